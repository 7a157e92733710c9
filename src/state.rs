use std::sync::Arc;
use crate::config::Config;
use crate::domain::models::session::Session;
use crate::domain::ports::{IdentityProvider, RecordStore};
use crate::domain::services::{
    events::EventCollection, hotel_config::HotelConfigService, staff::StaffCollection,
    venues::VenueCollection,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn RecordStore>,
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    pub fn events(&self, session: Option<Session>) -> EventCollection {
        EventCollection::new(self.store.clone(), session)
    }

    pub fn venues(&self, session: Option<Session>) -> VenueCollection {
        VenueCollection::new(self.store.clone(), session, self.config.shared_venue_catalog)
    }

    pub fn staff(&self, session: Option<Session>) -> StaffCollection {
        StaffCollection::new(self.store.clone(), session)
    }

    pub fn hotel_config(&self, session: Option<Session>) -> HotelConfigService {
        HotelConfigService::new(self.store.clone(), session)
    }
}
