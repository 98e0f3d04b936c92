//! Event submission types and derived-field computation.
//!
//! [`EventSubmission`] is the inbound creation payload; it lives for one
//! request. [`NewEvent`] is the fully-derived, persistable form produced by
//! [`NewEvent::from_submission`] after validation has passed.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

/// The period during which enrollment is open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentWindow {
    pub opens_at: Timestamp,
    pub closes_at: Timestamp,
}

/// The period during which the event itself takes place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWindow {
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
}

/// Event lifecycle status. New events always start as `Draft`; no status
/// transitions happen on the creation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Draft,
    Published,
}

impl EventStatus {
    /// Database/wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Draft => "DRAFT",
            EventStatus::Published => "PUBLISHED",
        }
    }
}

/// Inbound event creation payload.
///
/// Required fields are `Option` so that structural validation can report each
/// missing field individually instead of failing at deserialization. The
/// price and capacity fields default to 0 when omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventSubmission {
    pub name: Option<String>,
    pub description: Option<String>,
    pub enrollment_window: Option<EnrollmentWindow>,
    pub event_window: Option<EventWindow>,
    /// Absent, empty, or all-whitespace means the event is held online.
    pub location: Option<String>,
    pub base_price: i64,
    pub max_price: i64,
    pub capacity: i64,
}

/// A fully-derived event ready for persistence. All required fields are
/// concrete and the derived flags have been computed.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub enrollment_window: EnrollmentWindow,
    pub event_window: EventWindow,
    pub location: Option<String>,
    pub base_price: i64,
    pub max_price: i64,
    pub capacity: i64,
    pub is_free: bool,
    pub is_online: bool,
    pub status: EventStatus,
}

/// An event is free when neither a base price nor a max price is set.
pub fn is_free(base_price: i64, max_price: i64) -> bool {
    base_price == 0 && max_price == 0
}

/// An event is online exactly when no usable location string is present.
pub fn is_online(location: Option<&str>) -> bool {
    match location {
        None => true,
        Some(s) => s.trim().is_empty(),
    }
}

impl NewEvent {
    /// Derive the persistable event from a validated submission.
    ///
    /// Copies every submitted field and computes `is_free` / `is_online`.
    /// Pure and idempotent: deriving twice from the same submission yields
    /// identical results.
    ///
    /// Must only be called after validation has passed; a missing required
    /// field here is a pipeline bug and surfaces as [`CoreError::Internal`].
    pub fn from_submission(submission: &EventSubmission) -> Result<Self, CoreError> {
        let name = require("name", &submission.name)?;
        let description = require("description", &submission.description)?;
        let enrollment_window = require("enrollmentWindow", &submission.enrollment_window)?;
        let event_window = require("eventWindow", &submission.event_window)?;

        Ok(NewEvent {
            name,
            description,
            enrollment_window,
            event_window,
            location: submission.location.clone(),
            base_price: submission.base_price,
            max_price: submission.max_price,
            capacity: submission.capacity,
            is_free: is_free(submission.base_price, submission.max_price),
            is_online: is_online(submission.location.as_deref()),
            status: EventStatus::Draft,
        })
    }
}

fn require<T: Clone>(field: &'static str, value: &Option<T>) -> Result<T, CoreError> {
    value
        .clone()
        .ok_or_else(|| CoreError::Internal(format!("cannot derive event: {field} is missing")))
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn ts(day: u32, hour: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2018, 11, day, hour, 0, 0).unwrap()
    }

    fn submission(location: Option<&str>, base_price: i64, max_price: i64) -> EventSubmission {
        EventSubmission {
            name: Some("spring".into()),
            description: Some("description".into()),
            enrollment_window: Some(EnrollmentWindow {
                opens_at: ts(11, 19),
                closes_at: ts(11, 19),
            }),
            event_window: Some(EventWindow {
                starts_at: ts(11, 19),
                ends_at: ts(11, 21),
            }),
            location: location.map(String::from),
            base_price,
            max_price,
            capacity: 100,
        }
    }

    // -- is_online --

    #[test]
    fn absent_location_means_online() {
        assert!(is_online(None));
    }

    #[test]
    fn empty_location_means_online() {
        assert!(is_online(Some("")));
    }

    #[test]
    fn whitespace_location_means_online() {
        assert!(is_online(Some("    ")));
    }

    #[test]
    fn concrete_location_means_not_online() {
        assert!(!is_online(Some("강남역")));
    }

    // -- is_free --

    #[test]
    fn free_only_when_both_prices_zero() {
        assert!(is_free(0, 0));
        assert!(!is_free(100, 0));
        assert!(!is_free(0, 100));
        assert!(!is_free(100, 200));
    }

    // -- derivation --

    #[test]
    fn derives_flags_and_draft_status() {
        let event = NewEvent::from_submission(&submission(Some("강남역"), 100, 200)).unwrap();
        assert!(!event.is_free);
        assert!(!event.is_online);
        assert_eq!(event.status, EventStatus::Draft);
        assert_eq!(event.name, "spring");
        assert_eq!(event.capacity, 100);
    }

    #[test]
    fn derives_free_online_event() {
        let event = NewEvent::from_submission(&submission(None, 0, 0)).unwrap();
        assert!(event.is_free);
        assert!(event.is_online);
    }

    #[test]
    fn whitespace_location_derives_online() {
        let event = NewEvent::from_submission(&submission(Some("    "), 0, 0)).unwrap();
        assert!(event.is_online);
    }

    #[test]
    fn derivation_is_idempotent() {
        let input = submission(Some("강남역"), 100, 200);
        let first = NewEvent::from_submission(&input).unwrap();
        let second = NewEvent::from_submission(&input).unwrap();
        assert_eq!(first.is_free, second.is_free);
        assert_eq!(first.is_online, second.is_online);
        assert_eq!(first.status, second.status);
        assert_eq!(first.name, second.name);
    }

    #[test]
    fn deriving_unvalidated_submission_is_an_internal_error() {
        let mut input = submission(None, 0, 0);
        input.name = None;
        let err = NewEvent::from_submission(&input).unwrap_err();
        assert!(matches!(err, CoreError::Internal(_)));
    }

    #[test]
    fn submission_deserializes_from_camel_case_json() {
        let json = serde_json::json!({
            "name": "spring",
            "description": "description",
            "enrollmentWindow": {
                "opensAt": "2018-11-11T19:00:00Z",
                "closesAt": "2018-11-11T19:00:00Z"
            },
            "eventWindow": {
                "startsAt": "2018-11-11T19:00:00Z",
                "endsAt": "2018-11-11T21:00:00Z"
            },
            "location": "강남역",
            "basePrice": 100,
            "maxPrice": 200,
            "capacity": 100
        });
        let submission: EventSubmission = serde_json::from_value(json).unwrap();
        assert_eq!(submission.base_price, 100);
        assert_eq!(submission.enrollment_window.unwrap().opens_at, ts(11, 19));
    }

    #[test]
    fn omitted_prices_default_to_zero() {
        let submission: EventSubmission =
            serde_json::from_value(serde_json::json!({"name": "spring"})).unwrap();
        assert_eq!(submission.base_price, 0);
        assert_eq!(submission.max_price, 0);
        assert_eq!(submission.capacity, 0);
    }
}
