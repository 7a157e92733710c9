use axum::{extract::State, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::extractors::auth::{AuthUser, SESSION_COOKIE};
use crate::domain::models::auth::UserProfile;
use crate::domain::models::session::Session;
use serde::Deserialize;
use std::sync::Arc;
use tower_cookies::{Cookies, Cookie};
use tower_cookies::cookie::SameSite;
use tracing::info;

#[derive(Deserialize)]
pub struct SessionRequest {
    pub token: String,
}

fn profile(session: Session) -> UserProfile {
    UserProfile {
        id: session.user_id,
        display_name: session.display_name,
        email: session.email,
    }
}

/// Exchanges a gateway-issued token for the session cookie.
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<SessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.identity.resolve_session(&payload.token).await?;

    let mut cookie = Cookie::new(SESSION_COOKIE, payload.token);
    cookie.set_http_only(true);
    cookie.set_secure(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_path("/");
    cookies.add(cookie);

    info!("User signed in: {}", session.user_id);

    Ok(Json(profile(session)))
}

pub async fn me(AuthUser(session): AuthUser) -> Result<impl IntoResponse, AppError> {
    Ok(Json(profile(session)))
}

pub async fn logout(cookies: Cookies) -> Result<impl IntoResponse, AppError> {
    cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());

    info!("User logged out");

    Ok(StatusCode::OK)
}
