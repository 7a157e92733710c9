use axum::{extract::{State, Path, Query}, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::api::extractors::{auth::AuthUser, maybe_auth::MaybeAuthUser};
use crate::api::dtos::requests::StaffListQuery;
use crate::domain::models::staff::{NewStaffMember, StaffPatch, StaffRole};
use crate::error::AppError;
use std::sync::Arc;

pub async fn list_staff(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(session): MaybeAuthUser,
    Query(query): Query<StaffListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let staff = state.staff(session);

    let members = match query.role.as_deref() {
        Some(raw) => {
            let role: StaffRole = raw.parse().map_err(AppError::Validation)?;
            staff.by_role(role).await?
        }
        None => staff.fetch().await?,
    };

    Ok(Json(members))
}

pub async fn create_staff(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
    Json(payload): Json<NewStaffMember>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Staff name is required".into()));
    }
    let member = state.staff(Some(session)).add(payload).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

pub async fn update_staff(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<StaffPatch>,
) -> Result<impl IntoResponse, AppError> {
    let member = state.staff(Some(session)).update(&id, payload).await?;
    Ok(Json(member))
}

pub async fn delete_staff(
    State(state): State<Arc<AppState>>,
    AuthUser(session): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.staff(Some(session)).delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
