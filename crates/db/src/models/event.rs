//! Event entity model.

use gather_core::event::{EnrollmentWindow, EventWindow};
use gather_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// An event row from the `events` table.
///
/// Window timestamps are stored as flat columns (`opens_at`, `closes_at`,
/// `starts_at`, `ends_at`) but exposed — and serialized — as the nested
/// window types, matching the submission shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: DbId,
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
    /// `DRAFT` at creation; no transitions happen on this path.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl FromRow<'_, PgRow> for Event {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Event {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            enrollment_window: EnrollmentWindow {
                opens_at: row.try_get("opens_at")?,
                closes_at: row.try_get("closes_at")?,
            },
            event_window: EventWindow {
                starts_at: row.try_get("starts_at")?,
                ends_at: row.try_get("ends_at")?,
            },
            location: row.try_get("location")?,
            base_price: row.try_get("base_price")?,
            max_price: row.try_get("max_price")?,
            capacity: row.try_get("capacity")?,
            is_free: row.try_get("is_free")?,
            is_online: row.try_get("is_online")?,
            status: row.try_get("status")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
