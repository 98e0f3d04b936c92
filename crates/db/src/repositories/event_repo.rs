//! Repository for the `events` table.

use gather_core::event::NewEvent;
use gather_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::Event;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, opens_at, closes_at, starts_at, ends_at, \
     location, base_price, max_price, capacity, is_free, is_online, status, \
     created_at, updated_at";

/// Provides persistence operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a fully-derived event, returning the created row with its
    /// assigned id.
    pub async fn create(pool: &PgPool, input: &NewEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (name, description, opens_at, closes_at, starts_at, ends_at,
                                 location, base_price, max_price, capacity, is_free, is_online,
                                 status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.enrollment_window.opens_at)
            .bind(input.enrollment_window.closes_at)
            .bind(input.event_window.starts_at)
            .bind(input.event_window.ends_at)
            .bind(&input.location)
            .bind(input.base_price)
            .bind(input.max_price)
            .bind(input.capacity)
            .bind(input.is_free)
            .bind(input.is_online)
            .bind(input.status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find an event by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all events ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }
}
