pub mod event;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /events          list, create
/// /events/{id}     get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/events", event::router())
}
