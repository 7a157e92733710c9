use axum::{extract::{State, Path, Query}, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::api::extractors::{auth::AuthUser, maybe_auth::MaybeAuthUser};
use crate::api::dtos::{requests::AvailabilityQuery, responses::VenueAvailabilityResponse};
use crate::domain::models::venue::{NewVenue, VenuePatch};
use crate::domain::services::availability::{available_venues, occupied_venues};
use crate::error::AppError;
use chrono::Local;
use std::sync::Arc;

pub async fn list_venues(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(session): MaybeAuthUser,
) -> Result<impl IntoResponse, AppError> {
    let venues = state.venues(session).fetch().await?;
    Ok(Json(venues))
}

pub async fn create_venue(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
    Json(payload): Json<NewVenue>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Venue name is required".into()));
    }
    let venue = state.venues(Some(session)).add(payload).await?;
    Ok((StatusCode::CREATED, Json(venue)))
}

pub async fn update_venue(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<VenuePatch>,
) -> Result<impl IntoResponse, AppError> {
    let venue = state.venues(Some(session)).update(&id, payload).await?;
    Ok(Json(venue))
}

pub async fn delete_venue(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.venues(Some(session)).delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Which venues are free on a day (today by default).
pub async fn venue_availability(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(session): MaybeAuthUser,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let date = query.date.unwrap_or_else(|| Local::now().date_naive());

    let venues = state.venues(session.clone()).fetch().await?;
    let events = state.events(session).fetch().await?;

    let occupied = occupied_venues(&events, date).into_iter().map(str::to_string).collect();
    let available = available_venues(&venues, &events, date).into_iter().cloned().collect();

    Ok(Json(VenueAvailabilityResponse { date, occupied, available }))
}
