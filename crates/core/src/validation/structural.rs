//! Structural checks: required-field presence and value ranges.
//!
//! Runs before the semantic rules. Each check appends a field failure into
//! the sink; nothing here short-circuits, so every structurally invalid field
//! is reported in one pass.

use crate::event::EventSubmission;
use crate::validation::ValidationErrors;

/// Apply all structural checks to the submission, in field declaration order.
pub fn validate(submission: &EventSubmission, errors: &mut ValidationErrors) {
    check_text("name", &submission.name, errors);
    check_text("description", &submission.description, errors);

    if submission.enrollment_window.is_none() {
        errors.reject_field("enrollmentWindow", "NotNull", "must not be null");
    }
    if submission.event_window.is_none() {
        errors.reject_field("eventWindow", "NotNull", "must not be null");
    }

    check_non_negative("basePrice", submission.base_price, errors);
    check_non_negative("maxPrice", submission.max_price, errors);
    check_non_negative("capacity", submission.capacity, errors);
}

/// A required text field must be present and not blank. A supplied-but-blank
/// value is reported with the rejected value; a missing one without.
fn check_text(field: &'static str, value: &Option<String>, errors: &mut ValidationErrors) {
    match value {
        None => errors.reject_field(field, "NotEmpty", "must not be empty"),
        Some(s) if s.trim().is_empty() => {
            errors.reject_field_value(field, "NotEmpty", "must not be empty", s.clone());
        }
        Some(_) => {}
    }
}

fn check_non_negative(field: &'static str, value: i64, errors: &mut ValidationErrors) {
    if value < 0 {
        errors.reject_field_value(
            field,
            "Min",
            "must be greater than or equal to 0",
            value.to_string(),
        );
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::event::{EnrollmentWindow, EventWindow};
    use crate::types::Timestamp;

    fn ts(hour: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2018, 11, 11, hour, 0, 0).unwrap()
    }

    fn valid_submission() -> EventSubmission {
        EventSubmission {
            name: Some("spring".into()),
            description: Some("description".into()),
            enrollment_window: Some(EnrollmentWindow {
                opens_at: ts(19),
                closes_at: ts(19),
            }),
            event_window: Some(EventWindow {
                starts_at: ts(19),
                ends_at: ts(21),
            }),
            location: Some("강남역".into()),
            base_price: 100,
            max_price: 200,
            capacity: 100,
        }
    }

    fn run(submission: &EventSubmission) -> ValidationErrors {
        let mut errors = ValidationErrors::new("eventSubmission");
        validate(submission, &mut errors);
        errors
    }

    #[test]
    fn valid_submission_passes() {
        assert!(!run(&valid_submission()).has_errors());
    }

    #[test]
    fn empty_submission_reports_every_required_field() {
        let errors = run(&EventSubmission::default());
        let fields: Vec<_> = errors
            .field_failures()
            .iter()
            .map(|f| f.field.as_str())
            .collect();
        assert_eq!(
            fields,
            ["name", "description", "enrollmentWindow", "eventWindow"]
        );
    }

    #[test]
    fn missing_name_has_no_rejected_value() {
        let mut submission = valid_submission();
        submission.name = None;
        let errors = run(&submission);
        let failure = &errors.field_failures()[0];
        assert_eq!(failure.field, "name");
        assert_eq!(failure.code, "NotEmpty");
        assert!(failure.rejected_value.is_none());
    }

    #[test]
    fn blank_name_carries_the_rejected_value() {
        let mut submission = valid_submission();
        submission.name = Some("   ".into());
        let errors = run(&submission);
        let failure = &errors.field_failures()[0];
        assert_eq!(failure.code, "NotEmpty");
        assert_eq!(failure.rejected_value.as_deref(), Some("   "));
    }

    #[test]
    fn negative_prices_are_rejected_with_value_text() {
        let mut submission = valid_submission();
        submission.base_price = -5;
        submission.max_price = -1;
        let errors = run(&submission);
        let fields: Vec<_> = errors
            .field_failures()
            .iter()
            .map(|f| (f.field.as_str(), f.rejected_value.as_deref()))
            .collect();
        assert_eq!(
            fields,
            [("basePrice", Some("-5")), ("maxPrice", Some("-1"))]
        );
        assert!(errors.field_failures().iter().all(|f| f.code == "Min"));
    }

    #[test]
    fn negative_capacity_is_rejected() {
        let mut submission = valid_submission();
        submission.capacity = -10;
        let errors = run(&submission);
        assert_eq!(errors.field_failures()[0].field, "capacity");
        assert_eq!(errors.field_failures()[0].rejected_value.as_deref(), Some("-10"));
    }

    #[test]
    fn zero_prices_and_capacity_are_structurally_valid() {
        let mut submission = valid_submission();
        submission.base_price = 0;
        submission.max_price = 0;
        submission.capacity = 0;
        assert!(!run(&submission).has_errors());
    }
}
