use axum::{extract::{State, Path, Query}, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::api::extractors::{auth::AuthUser, maybe_auth::MaybeAuthUser};
use crate::api::dtos::requests::EventListQuery;
use crate::domain::models::event::{EventPatch, NewEvent};
use crate::domain::services::events::{apply_venue_defaults, in_range, in_salon, on_date};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(session): MaybeAuthUser,
    Query(query): Query<EventListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut events = state.events(session).fetch().await?;

    if let Some(date) = query.date {
        events = on_date(&events, date).cloned().collect();
    }
    if let Some(salon) = query.salon.as_deref() {
        events = in_salon(&events, salon).cloned().collect();
    }
    if query.from.is_some() || query.to.is_some() {
        let from = query.from.unwrap_or(chrono::NaiveDate::MIN);
        let to = query.to.unwrap_or(chrono::NaiveDate::MAX);
        if to < from {
            return Err(AppError::Validation("'to' must not be before 'from'".into()));
        }
        events = in_range(&events, from, to).cloned().collect();
    }

    Ok(Json(events))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(session): MaybeAuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.events(session).get(&id).await?
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

    Ok(Json(event))
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
    Json(mut payload): Json<NewEvent>,
) -> Result<impl IntoResponse, AppError> {
    info!("Creating event on {} in salon '{}'", payload.date, payload.venue.salon);

    let venues = state.venues(Some(session.clone())).fetch().await?;
    apply_venue_defaults(&mut payload.venue, &venues);

    let event = state.events(Some(session)).add(payload).await?;

    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
    Path(id): Path<String>,
    Json(mut payload): Json<EventPatch>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(venue) = payload.venue.as_mut() {
        let venues = state.venues(Some(session.clone())).fetch().await?;
        apply_venue_defaults(venue, &venues);
    }

    let event = state.events(Some(session)).update(&id, payload).await?;
    Ok(Json(event))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.events(Some(session)).delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
