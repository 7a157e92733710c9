use axum::{
    extract::{FromRequestParts, FromRef},
    http::{header, request::Parts},
};
use crate::state::AppState;
use crate::domain::models::session::Session;
use crate::error::AppError;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::Span;

pub const SESSION_COOKIE: &str = "session";

/// A signed-in caller. Rejects with 401 when no valid session token is sent.
pub struct AuthUser(pub Session);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = session_token(parts).ok_or(AppError::NotAuthenticated)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let session = app_state.identity.resolve_session(&token).await?;

        Span::current().record("user_id", session.user_id.as_str());

        Ok(AuthUser(session))
    }
}

/// Session token from the `session` cookie, falling back to a bearer header.
pub fn session_token(parts: &Parts) -> Option<String> {
    if let Some(cookies) = parts.extensions.get::<Cookies>()
        && let Some(cookie) = cookies.get(SESSION_COOKIE)
    {
        return Some(cookie.value().to_string());
    }

    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
