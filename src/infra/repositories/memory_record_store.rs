use crate::domain::ports::{
    CollectionQuery, Document, Fields, RecordStore, SnapshotReceiver, OWNER_FIELD,
};
use crate::error::AppError;
use crate::infra::repositories::snapshot::{sort_documents, spawn_snapshot_pump, CHANGE_FEED_CAPACITY};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Simulated document database: collection name -> (document id -> fields).
#[derive(Default)]
pub struct MemoryStoreData {
    pub collections: HashMap<String, BTreeMap<String, Fields>>,
    /// If set, the next store call fails with this error.
    pub next_error: Option<AppError>,
}

/// In-process [RecordStore], used for demos and tests. Live subscriptions are
/// driven by the same change feed as the SQLite store.
#[derive(Clone)]
pub struct MemoryRecordStore {
    data: Arc<Mutex<MemoryStoreData>>,
    changes: broadcast::Sender<String>,
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_FEED_CAPACITY);
        Self {
            data: Arc::new(Mutex::new(MemoryStoreData::default())),
            changes,
        }
    }

    /// Makes the next store call fail with `error`.
    pub fn fail_next(&self, error: AppError) {
        if let Ok(mut data) = self.data.lock() {
            data.next_error = Some(error);
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryStoreData>, AppError> {
        let mut data = self
            .data
            .lock()
            .map_err(|_| AppError::InternalWithMsg("Memory store lock poisoned".into()))?;
        if let Some(e) = data.next_error.take() {
            return Err(e);
        }
        Ok(data)
    }

    fn notify(&self, collection: &str) {
        // No receivers is not an error: nobody is subscribed yet.
        let _ = self.changes.send(collection.to_string());
    }

    fn run_query(&self, query: &CollectionQuery) -> Result<Vec<Document>, AppError> {
        let data = self.lock()?;
        let mut docs: Vec<Document> = data
            .collections
            .get(query.collection)
            .map(|docs| {
                docs.iter()
                    .filter(|(_, fields)| match &query.owner {
                        Some(owner) => {
                            fields.get(OWNER_FIELD).and_then(Value::as_str) == Some(owner.as_str())
                        }
                        None => true,
                    })
                    .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default();
        sort_documents(&mut docs, query.order_by);
        Ok(docs)
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn fetch(&self, query: &CollectionQuery) -> Result<Vec<Document>, AppError> {
        self.run_query(query)
    }

    async fn subscribe(&self, query: CollectionQuery) -> Result<SnapshotReceiver, AppError> {
        let changes = self.changes.subscribe();
        let store = self.clone();
        Ok(spawn_snapshot_pump(query, changes, move |q| {
            let store = store.clone();
            async move { store.run_query(&q) }
        }))
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, AppError> {
        let data = self.lock()?;
        Ok(data
            .collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|fields| Document::new(id, fields.clone())))
    }

    async fn create(&self, collection: &str, fields: Fields) -> Result<String, AppError> {
        let id = Uuid::new_v4().to_string();
        {
            let mut data = self.lock()?;
            data.collections
                .entry(collection.to_string())
                .or_default()
                .insert(id.clone(), fields);
        }
        self.notify(collection);
        Ok(id)
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), AppError> {
        {
            let mut data = self.lock()?;
            data.collections
                .entry(collection.to_string())
                .or_default()
                .insert(id.to_string(), fields);
        }
        self.notify(collection);
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<(), AppError> {
        {
            let mut data = self.lock()?;
            let existing = data
                .collections
                .get_mut(collection)
                .and_then(|docs| docs.get_mut(id))
                .ok_or_else(|| AppError::NotFound(format!("Document {}/{} not found", collection, id)))?;
            for (key, value) in fields {
                existing.insert(key, value);
            }
        }
        self.notify(collection);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), AppError> {
        {
            let mut data = self.lock()?;
            let removed = data
                .collections
                .get_mut(collection)
                .and_then(|docs| docs.remove(id));
            if removed.is_none() {
                return Err(AppError::NotFound(format!("Document {}/{} not found", collection, id)));
            }
        }
        self.notify(collection);
        Ok(())
    }
}
