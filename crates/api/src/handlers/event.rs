//! Handlers for the `/events` resource.

use axum::extract::{Path, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::Json;
use gather_core::error::CoreError;
use gather_core::event::{EventSubmission, NewEvent};
use gather_core::types::DbId;
use gather_core::validation::{semantic, structural, ValidationErrors};
use gather_db::models::Event;
use gather_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::links::{event_uri, EventLinks, EventResource};
use crate::state::AppState;

/// POST /api/v1/events
///
/// The validation pipeline runs in fixed order: structural checks first,
/// then — only on a clean sink — the cross-field semantic rules. Any
/// recorded failure rejects the request with the ordered record array as
/// the body. On success the entity is derived (prices/location flags,
/// `DRAFT` status) and persisted.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<EventSubmission>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<EventResource>)> {
    let mut errors = ValidationErrors::new("eventSubmission");

    structural::validate(&input, &mut errors);
    if !errors.has_errors() {
        semantic::validate(&input, &mut errors);
    }
    if errors.has_errors() {
        return Err(AppError::Validation(errors));
    }

    let new_event = NewEvent::from_submission(&input)?;
    let event = EventRepo::create(&state.pool, &new_event).await?;

    let location = event_uri(event.id);
    let links = EventLinks::for_created(event.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(EventResource { event, links }),
    ))
}

/// GET /api/v1/events
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    let events = EventRepo::list(&state.pool).await?;
    Ok(Json(events))
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    Ok(Json(event))
}
