use crate::domain::models::session::Session;
use crate::domain::models::staff::{NewStaffMember, StaffMember, StaffPatch, StaffRole};
use crate::domain::ports::{to_fields, RecordStore, STAFF};
use crate::domain::services::collection::OwnedCollection;
use crate::domain::services::live::LiveCollection;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub struct StaffCollection {
    inner: OwnedCollection,
}

impl StaffCollection {
    pub fn new(store: Arc<dyn RecordStore>, session: Option<Session>) -> Self {
        Self { inner: OwnedCollection::new(store, session, STAFF, "nombre") }
    }

    pub async fn subscribe(&self) -> LiveCollection<StaffMember> {
        self.inner.subscribe().await
    }

    pub async fn fetch(&self) -> Result<Vec<StaffMember>, AppError> {
        self.inner.fetch("Load staff").await
    }

    pub async fn get(&self, id: &str) -> Result<Option<StaffMember>, AppError> {
        self.inner.get(id, "Load staff member").await
    }

    pub async fn by_role(&self, role: StaffRole) -> Result<Vec<StaffMember>, AppError> {
        Ok(with_role(&self.fetch().await?, role).cloned().collect())
    }

    pub async fn coordinators(&self) -> Result<Vec<StaffMember>, AppError> {
        self.by_role(StaffRole::Coordinator).await
    }

    pub async fn kitchen_supervisors(&self) -> Result<Vec<StaffMember>, AppError> {
        self.by_role(StaffRole::KitchenSupervisor).await
    }

    pub async fn waiters(&self) -> Result<Vec<StaffMember>, AppError> {
        self.by_role(StaffRole::Waiter).await
    }

    pub async fn security(&self) -> Result<Vec<StaffMember>, AppError> {
        self.by_role(StaffRole::Security).await
    }

    pub async fn by_name(&self, name: &str) -> Result<Option<StaffMember>, AppError> {
        Ok(self.fetch().await?.into_iter().find(|m| m.name == name))
    }

    pub async fn add(&self, draft: NewStaffMember) -> Result<StaffMember, AppError> {
        self.inner.require_session()?;
        let member: StaffMember = self.inner.create(to_fields(&draft)?, "Create staff member").await?;
        info!(staff_id = %member.id, role = %member.role, "Staff member created");
        Ok(member)
    }

    pub async fn update(&self, id: &str, patch: StaffPatch) -> Result<StaffMember, AppError> {
        self.inner.require_session()?;
        self.inner.update(id, to_fields(&patch)?, "Update staff member").await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.inner.delete(id, "Delete staff member").await?;
        info!(staff_id = %id, "Staff member deleted");
        Ok(())
    }
}

pub fn with_role(staff: &[StaffMember], role: StaffRole) -> impl Iterator<Item = &StaffMember> {
    staff.iter().filter(move |m| m.role == role)
}
