//! Event submission validation.
//!
//! An explicit pipeline, invoked in fixed order by the request handler:
//! [`structural::validate`] runs first (required fields, ranges), then —
//! only on a clean sink — [`semantic::validate`] applies the cross-field
//! rules. Both append into a shared [`ValidationErrors`] sink, and
//! [`render`] flattens the sink into the wire records for the response body.

pub mod errors;
pub mod render;
pub mod semantic;
pub mod structural;

pub use errors::{FieldFailure, ObjectFailure, ValidationErrors};
pub use render::render;
