use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::hotel_config::HotelConfigPatch;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn get_config(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let config = state.hotel_config(Some(session)).load().await?;
    Ok(Json(config))
}

pub async fn update_config(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
    Json(payload): Json<HotelConfigPatch>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(name) = &payload.hotel_name
        && name.trim().is_empty()
    {
        return Err(AppError::Validation("Hotel name must not be empty".into()));
    }

    let config = state.hotel_config(Some(session)).update(payload).await?;
    info!("Hotel config updated: {}", config.hotel_name);
    Ok(Json(config))
}
