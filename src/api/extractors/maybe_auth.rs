use axum::{
    extract::{FromRequestParts, FromRef},
    http::request::Parts,
};
use crate::api::extractors::auth::session_token;
use crate::state::AppState;
use crate::domain::models::session::Session;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{debug, Span};

/// The caller's session if a valid token was sent; reads degrade to empty
/// results for guests instead of failing.
pub struct MaybeAuthUser(pub Option<Session>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = session_token(parts) else {
            return Ok(MaybeAuthUser(None));
        };

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        match app_state.identity.resolve_session(&token).await {
            Ok(session) => {
                Span::current().record("user_id", session.user_id.as_str());
                Ok(MaybeAuthUser(Some(session)))
            }
            Err(_) => {
                // Expired or forged token: treat as guest
                debug!("MaybeAuth: ignoring invalid session token");
                Ok(MaybeAuthUser(None))
            }
        }
    }
}
