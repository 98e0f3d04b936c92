//! Cross-field business rules for event submissions.
//!
//! Only runs once structural validation has left the sink clean. Never fails
//! itself; it only records failures. Both rules are evaluated on every call,
//! with no short-circuiting between them.

use crate::event::EventSubmission;
use crate::validation::ValidationErrors;

/// Apply the two semantic rules, in this exact order.
pub fn validate(submission: &EventSubmission, errors: &mut ValidationErrors) {
    // Rule 1: a set (nonzero) max price must not undercut the base price.
    // One trigger intentionally records a failure on both price fields.
    if submission.max_price != 0 && submission.max_price < submission.base_price {
        errors.reject_field("basePrice", "wrongValue", "basePrice is wrong");
        errors.reject_field("maxPrice", "wrongValue", "maxPrice is wrong");
    }

    // Rule 2: enrollment must not close before it opens. An absent window is
    // a structural failure reported upstream; the rule is skipped here.
    if let Some(window) = &submission.enrollment_window {
        if window.closes_at < window.opens_at {
            errors.reject_field("closesAt", "wrongValue", "closesAt is wrong value");
        }
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
