use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::responses::DashboardResponse;
use crate::domain::services::availability::{dashboard_stats, unresolved_references};
use crate::error::AppError;
use chrono::Local;
use std::sync::Arc;

const UPCOMING_LIMIT: usize = 5;

pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let today = Local::now().date_naive();

    let hotel = state.hotel_config(Some(session.clone())).load().await?;
    let events = state.events(Some(session.clone())).fetch().await?;
    let venues = state.venues(Some(session.clone())).fetch().await?;
    let staff = state.staff(Some(session)).fetch().await?;

    let stats = dashboard_stats(&events, &venues, today);
    let unresolved = unresolved_references(&events, &venues, &staff);
    // Past events are left out of the upcoming list.
    let upcoming_events = events
        .into_iter()
        .filter(|e| e.date >= today)
        .take(UPCOMING_LIMIT)
        .collect();

    Ok(Json(DashboardResponse {
        hotel_name: hotel.hotel_name,
        today,
        stats,
        upcoming_events,
        unresolved_references: unresolved,
    }))
}
