//! Renders a validation sink into the flat record sequence sent to clients.
//!
//! Ordering is fixed: all field-level failures in recorded order, then all
//! object-level failures in recorded order. A record that fails to serialize
//! is logged and skipped so the rest of the response still renders.

use serde_json::Value;

use crate::validation::ValidationErrors;

/// Flatten the sink into an ordered list of wire records.
pub fn render(errors: &ValidationErrors) -> Vec<Value> {
    let mut records = Vec::with_capacity(errors.len());

    for failure in errors.field_failures() {
        match serde_json::to_value(failure) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(field = %failure.field, error = %err, "dropping unserializable field failure");
            }
        }
    }

    for failure in errors.object_failures() {
        match serde_json::to_value(failure) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(code = %failure.code, error = %err, "dropping unserializable object failure");
            }
        }
    }

    records
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
