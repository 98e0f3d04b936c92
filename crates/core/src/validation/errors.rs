//! The error-accumulation sink and its failure record types.
//!
//! Validation steps append named failures into a request-scoped
//! [`ValidationErrors`]; the handler queries it afterward with
//! [`ValidationErrors::has_errors`]. Failures are kept in recorded order —
//! no sorting, deduplication, or grouping.

use serde::Serialize;

/// A validation failure attributable to one named input attribute.
///
/// Serializes to the flat wire record. `rejected_value` is omitted entirely
/// (not emitted as null) when no rejected value was supplied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFailure {
    pub field: String,
    pub object_name: String,
    pub code: String,
    pub default_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_value: Option<String>,
}

/// A failure arising from a relationship between fields, not attributable to
/// a single one.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectFailure {
    pub object_name: String,
    pub code: String,
    pub default_message: String,
}

/// Mutable, append-only collection of validation failures for one request.
#[derive(Debug, Clone)]
pub struct ValidationErrors {
    object_name: String,
    field_failures: Vec<FieldFailure>,
    object_failures: Vec<ObjectFailure>,
}

impl ValidationErrors {
    /// Create an empty sink for the named object under validation.
    pub fn new(object_name: impl Into<String>) -> Self {
        ValidationErrors {
            object_name: object_name.into(),
            field_failures: Vec::new(),
            object_failures: Vec::new(),
        }
    }

    /// The name of the object being validated.
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Record a field-level failure without a rejected value.
    pub fn reject_field(
        &mut self,
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.field_failures.push(FieldFailure {
            field: field.into(),
            object_name: self.object_name.clone(),
            code: code.into(),
            default_message: message.into(),
            rejected_value: None,
        });
    }

    /// Record a field-level failure carrying the rejected value's text form.
    pub fn reject_field_value(
        &mut self,
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
        rejected_value: impl Into<String>,
    ) {
        self.field_failures.push(FieldFailure {
            field: field.into(),
            object_name: self.object_name.clone(),
            code: code.into(),
            default_message: message.into(),
            rejected_value: Some(rejected_value.into()),
        });
    }

    /// Record an object-level (cross-field) failure.
    pub fn reject_object(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.object_failures.push(ObjectFailure {
            object_name: self.object_name.clone(),
            code: code.into(),
            default_message: message.into(),
        });
    }

    /// Whether any failure has been recorded.
    pub fn has_errors(&self) -> bool {
        !self.field_failures.is_empty() || !self.object_failures.is_empty()
    }

    /// Total number of recorded failures.
    pub fn len(&self) -> usize {
        self.field_failures.len() + self.object_failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Field-level failures in recorded order.
    pub fn field_failures(&self) -> &[FieldFailure] {
        &self.field_failures
    }

    /// Object-level failures in recorded order.
    pub fn object_failures(&self) -> &[ObjectFailure] {
        &self.object_failures
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
