use crate::domain::models::session::Session;
use crate::domain::ports::{CollectionQuery, Document, Fields, RecordStore, OWNER_FIELD};
use crate::domain::services::live::LiveCollection;
use crate::error::AppError;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

/// Store plumbing shared by the typed collections: session checks, owner
/// stamping and scoping, timestamping and error mapping.
#[derive(Clone)]
pub struct OwnedCollection {
    store: Arc<dyn RecordStore>,
    session: Option<Session>,
    collection: &'static str,
    order_by: &'static str,
    /// Whether reads are restricted to the session's own documents.
    owner_scoped: bool,
}

impl OwnedCollection {
    pub fn new(
        store: Arc<dyn RecordStore>,
        session: Option<Session>,
        collection: &'static str,
        order_by: &'static str,
    ) -> Self {
        Self { store, session, collection, order_by, owner_scoped: true }
    }

    /// Reads and edits span every owner; created documents are still stamped
    /// with the creator's id.
    pub fn shared(mut self) -> Self {
        self.owner_scoped = false;
        self
    }

    pub fn require_session(&self) -> Result<&Session, AppError> {
        self.session.as_ref().ok_or(AppError::NotAuthenticated)
    }

    fn query(&self) -> Option<CollectionQuery> {
        let session = self.session.as_ref()?;
        let query = CollectionQuery::new(self.collection, self.order_by);
        Some(if self.owner_scoped {
            query.owned_by(session.user_id.clone())
        } else {
            query
        })
    }

    pub async fn subscribe<T>(&self) -> LiveCollection<T>
    where
        T: DeserializeOwned + Clone + Send + Sync + 'static,
    {
        let Some(query) = self.query() else {
            return LiveCollection::empty();
        };

        match self.store.subscribe(query).await {
            Ok(snapshots) => LiveCollection::spawn(snapshots),
            Err(e) => {
                error!("Subscribing to {} failed: {:?}", self.collection, e);
                LiveCollection::failed(e.to_string())
            }
        }
    }

    pub async fn fetch<T: DeserializeOwned>(&self, operation: &'static str) -> Result<Vec<T>, AppError> {
        let Some(query) = self.query() else {
            return Ok(Vec::new());
        };

        let docs = self
            .store
            .fetch(&query)
            .await
            .map_err(AppError::operation_failed(operation))?;

        docs.iter()
            .map(Document::decode)
            .collect::<Result<Vec<T>, _>>()
            .map_err(AppError::operation_failed(operation))
    }

    /// A document visible to the session, or `None`.
    pub async fn get<T: DeserializeOwned>(&self, id: &str, operation: &'static str) -> Result<Option<T>, AppError> {
        let Some(session) = self.session.as_ref() else {
            return Ok(None);
        };

        let doc = self
            .store
            .get(self.collection, id)
            .await
            .map_err(AppError::operation_failed(operation))?;

        match doc {
            Some(doc) if !self.owner_scoped || doc.owner() == Some(session.user_id.as_str()) => {
                doc.decode().map(Some).map_err(AppError::operation_failed(operation))
            }
            _ => Ok(None),
        }
    }

    pub async fn create<T: DeserializeOwned>(&self, mut fields: Fields, operation: &'static str) -> Result<T, AppError> {
        let session = self.require_session()?;

        let now = Value::String(Utc::now().to_rfc3339());
        fields.insert(OWNER_FIELD.to_string(), Value::String(session.user_id.clone()));
        fields.insert("createdAt".to_string(), now.clone());
        fields.insert("updatedAt".to_string(), now);

        let id = self
            .store
            .create(self.collection, fields.clone())
            .await
            .map_err(AppError::operation_failed(operation))?;

        debug!("Created {}/{}", self.collection, id);

        Document::new(id, fields)
            .decode()
            .map_err(AppError::operation_failed(operation))
    }

    /// Merges `fields` into a document visible to the session and returns the
    /// stored result. In owner-scoped collections, documents of other owners
    /// read as not found.
    pub async fn update<T: DeserializeOwned>(&self, id: &str, mut fields: Fields, operation: &'static str) -> Result<T, AppError> {
        self.require_session()?;
        self.ensure_owned(id, operation).await?;

        fields.remove("id");
        fields.remove(OWNER_FIELD);
        fields.remove("createdAt");
        fields.insert("updatedAt".to_string(), Value::String(Utc::now().to_rfc3339()));

        self.store
            .update(self.collection, id, fields)
            .await
            .map_err(AppError::operation_failed(operation))?;

        let doc = self
            .store
            .get(self.collection, id)
            .await
            .map_err(AppError::operation_failed(operation))?
            .ok_or_else(|| self.not_found(id))?;

        doc.decode().map_err(AppError::operation_failed(operation))
    }

    pub async fn delete(&self, id: &str, operation: &'static str) -> Result<(), AppError> {
        self.require_session()?;
        self.ensure_owned(id, operation).await?;

        self.store
            .delete(self.collection, id)
            .await
            .map_err(AppError::operation_failed(operation))?;

        debug!("Deleted {}/{}", self.collection, id);
        Ok(())
    }

    async fn ensure_owned(&self, id: &str, operation: &'static str) -> Result<(), AppError> {
        let session = self.require_session()?;
        let doc = self
            .store
            .get(self.collection, id)
            .await
            .map_err(AppError::operation_failed(operation))?
            .ok_or_else(|| self.not_found(id))?;

        match doc.owner() {
            _ if !self.owner_scoped => Ok(()),
            Some(owner) if owner == session.user_id => Ok(()),
            _ => Err(self.not_found(id)),
        }
    }

    fn not_found(&self, id: &str) -> AppError {
        AppError::NotFound(format!("{} {} not found", self.collection, id))
    }
}
