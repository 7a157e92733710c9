use crate::config::Config;
use crate::domain::models::auth::Claims;
use crate::domain::models::session::Session;
use crate::domain::ports::IdentityProvider;
use crate::error::AppError;
use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use tracing::debug;

/// Verifies EdDSA session tokens issued by the sign-in gateway.
pub struct JwtIdentityProvider {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityProvider {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let decoding_key = DecodingKey::from_ed_pem(config.auth_public_key.as_bytes())
            .map_err(|e| AppError::InternalWithMsg(format!("Invalid AUTH_PUBLIC_KEY: {}", e)))?;

        let mut validation = Validation::new(Algorithm::EdDSA);
        validation.set_audience(&[config.auth_audience.as_str()]);
        validation.set_issuer(&[config.auth_issuer.as_str()]);

        Ok(Self { decoding_key, validation })
    }
}

#[async_trait]
impl IdentityProvider for JwtIdentityProvider {
    async fn resolve_session(&self, token: &str) -> Result<Session, AppError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            debug!("Rejected session token: {}", e);
            AppError::NotAuthenticated
        })?;

        let claims = token_data.claims;
        Ok(Session {
            user_id: claims.sub,
            display_name: claims.name,
            email: claims.email,
        })
    }
}
