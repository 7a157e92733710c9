use crate::domain::models::session::Session;
use crate::domain::models::venue::{NewVenue, Venue, VenuePatch};
use crate::domain::ports::{to_fields, RecordStore, VENUES};
use crate::domain::services::collection::OwnedCollection;
use crate::domain::services::live::LiveCollection;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

/// Venues ("salones") ordered by name. With a shared catalog every owner
/// sees and edits the same list.
pub struct VenueCollection {
    inner: OwnedCollection,
}

impl VenueCollection {
    pub fn new(store: Arc<dyn RecordStore>, session: Option<Session>, shared_catalog: bool) -> Self {
        let inner = OwnedCollection::new(store, session, VENUES, "nombre");
        Self { inner: if shared_catalog { inner.shared() } else { inner } }
    }

    pub async fn subscribe(&self) -> LiveCollection<Venue> {
        self.inner.subscribe().await
    }

    pub async fn fetch(&self) -> Result<Vec<Venue>, AppError> {
        self.inner.fetch("Load venues").await
    }

    pub async fn get(&self, id: &str) -> Result<Option<Venue>, AppError> {
        self.inner.get(id, "Load venue").await
    }

    pub async fn by_name(&self, name: &str) -> Result<Option<Venue>, AppError> {
        Ok(find_by_name(&self.fetch().await?, name).cloned())
    }

    pub async fn add(&self, draft: NewVenue) -> Result<Venue, AppError> {
        self.inner.require_session()?;
        let venue: Venue = self.inner.create(to_fields(&draft)?, "Create venue").await?;
        info!(venue_id = %venue.id, name = %venue.name, "Venue created");
        Ok(venue)
    }

    pub async fn update(&self, id: &str, patch: VenuePatch) -> Result<Venue, AppError> {
        self.inner.require_session()?;
        self.inner.update(id, to_fields(&patch)?, "Update venue").await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.inner.delete(id, "Delete venue").await?;
        info!(venue_id = %id, "Venue deleted");
        Ok(())
    }
}

/// First venue with exactly this name. Names are not unique.
pub fn find_by_name<'a>(venues: &'a [Venue], name: &str) -> Option<&'a Venue> {
    venues.iter().find(|v| v.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::memory_record_store::MemoryRecordStore;

    fn draft(name: &str, capacity: u32) -> NewVenue {
        NewVenue { name: name.to_string(), capacity, hourly_rate: 1000.0, power_outlets: 4 }
    }

    fn venues(store: &MemoryRecordStore, user: &str, shared: bool) -> VenueCollection {
        VenueCollection::new(Arc::new(store.clone()), Some(Session::new(user)), shared)
    }

    #[tokio::test]
    async fn test_shared_catalog_lists_all_owners_by_name() {
        let store = MemoryRecordStore::new();
        venues(&store, "owner-1", true).add(draft("Zafiro", 120)).await.unwrap();
        venues(&store, "owner-2", true).add(draft("Diamante", 300)).await.unwrap();

        let listed = venues(&store, "owner-1", true).fetch().await.unwrap();
        let names: Vec<&str> = listed.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Diamante", "Zafiro"]);
        assert_eq!(listed[0].user_id, "owner-2");
    }

    #[tokio::test]
    async fn test_private_catalog_is_owner_scoped() {
        let store = MemoryRecordStore::new();
        let created = venues(&store, "owner-1", false).add(draft("Zafiro", 120)).await.unwrap();

        let other = venues(&store, "owner-2", false);
        assert!(other.fetch().await.unwrap().is_empty());
        assert!(matches!(
            other.update(&created.id, VenuePatch::default()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_and_lookup_by_name() {
        let store = MemoryRecordStore::new();
        let catalog = venues(&store, "owner-1", true);
        let created = catalog.add(draft("Rubí", 80)).await.unwrap();

        let patch = VenuePatch { hourly_rate: Some(1250.0), ..Default::default() };
        let updated = catalog.update(&created.id, patch).await.unwrap();
        assert_eq!(updated.hourly_rate, 1250.0);
        assert_eq!(updated.capacity, 80);

        let found = catalog.by_name("Rubí").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert!(catalog.by_name("Perla").await.unwrap().is_none());

        catalog.delete(&created.id).await.unwrap();
        assert!(catalog.get(&created.id).await.unwrap().is_none());
    }
}
