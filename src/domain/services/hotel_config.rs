use crate::domain::models::hotel_config::{HotelConfig, HotelConfigPatch};
use crate::domain::models::session::Session;
use crate::domain::ports::{to_fields, RecordStore, HOTEL_CONFIG};
use crate::error::AppError;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// Per-owner hotel settings, stored under the owner's user id.
pub struct HotelConfigService {
    store: Arc<dyn RecordStore>,
    session: Option<Session>,
}

impl HotelConfigService {
    pub fn new(store: Arc<dyn RecordStore>, session: Option<Session>) -> Self {
        Self { store, session }
    }

    /// Reads the owner's config, creating the default one on first access.
    pub async fn load(&self) -> Result<HotelConfig, AppError> {
        let session = self.session.as_ref().ok_or(AppError::NotAuthenticated)?;
        let user_id = session.user_id.as_str();

        let existing = self
            .store
            .get(HOTEL_CONFIG, user_id)
            .await
            .map_err(AppError::operation_failed("Load hotel config"))?;

        if let Some(doc) = existing {
            return doc.decode().map_err(AppError::operation_failed("Load hotel config"));
        }

        let config = HotelConfig::default_for(user_id);
        let mut fields = to_fields(&config)?;
        fields.remove("id");

        self.store
            .set(HOTEL_CONFIG, user_id, fields)
            .await
            .map_err(AppError::operation_failed("Create hotel config"))?;

        info!(user_id = %user_id, "Default hotel config created");
        Ok(config)
    }

    pub async fn update(&self, patch: HotelConfigPatch) -> Result<HotelConfig, AppError> {
        let session = self.session.as_ref().ok_or(AppError::NotAuthenticated)?;

        let mut config = self.load().await?;
        if let Some(name) = patch.hotel_name {
            config.hotel_name = name;
        }
        config.updated_at = Utc::now();

        let mut fields = to_fields(&config)?;
        fields.remove("id");

        self.store
            .set(HOTEL_CONFIG, &session.user_id, fields)
            .await
            .map_err(AppError::operation_failed("Update hotel config"))?;

        Ok(config)
    }
}
