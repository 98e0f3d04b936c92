//! Pure domain logic for the gather event service.
//!
//! Submission and entity types, the validation pipeline, and derived-field
//! computation. No I/O — persistence and HTTP live in `gather-db` and
//! `gather-api`.

pub mod error;
pub mod event;
pub mod types;
pub mod validation;
