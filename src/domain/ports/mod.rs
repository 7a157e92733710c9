use crate::domain::models::session::Session;
use crate::error::AppError;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use tokio::sync::mpsc;

pub const EVENTS: &str = "events";
pub const VENUES: &str = "salones";
pub const STAFF: &str = "personal";
pub const HOTEL_CONFIG: &str = "hotelConfig";

/// Field holding the owning user id on every owner-scoped document.
pub const OWNER_FIELD: &str = "userId";

pub type Fields = Map<String, Value>;

/// A stored record: store-assigned id plus its top-level fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self { id: id.into(), fields }
    }

    pub fn owner(&self) -> Option<&str> {
        self.fields.get(OWNER_FIELD).and_then(Value::as_str)
    }

    /// Deserializes the document into a typed record, exposing the id as `id`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        let mut fields = self.fields.clone();
        fields.insert("id".to_string(), Value::String(self.id.clone()));
        serde_json::from_value(Value::Object(fields)).map_err(AppError::Serialization)
    }
}

/// Serializes a draft or patch into top-level document fields.
pub fn to_fields<T: Serialize>(value: &T) -> Result<Fields, AppError> {
    match serde_json::to_value(value).map_err(AppError::Serialization)? {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::InternalWithMsg("Record did not serialize to an object".into())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionQuery {
    pub collection: &'static str,
    /// Only documents whose `userId` equals this value; `None` reads the whole collection.
    pub owner: Option<String>,
    /// Ascending sort field.
    pub order_by: &'static str,
}

impl CollectionQuery {
    pub fn new(collection: &'static str, order_by: &'static str) -> Self {
        Self { collection, owner: None, order_by }
    }

    pub fn owned_by(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }
}

/// Each message is the complete, ordered result of the query at that moment.
pub type SnapshotReceiver = mpsc::Receiver<Result<Vec<Document>, AppError>>;

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn fetch(&self, query: &CollectionQuery) -> Result<Vec<Document>, AppError>;
    async fn subscribe(&self, query: CollectionQuery) -> Result<SnapshotReceiver, AppError>;
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, AppError>;
    async fn create(&self, collection: &str, fields: Fields) -> Result<String, AppError>;
    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), AppError>;
    /// Merges `fields` into the top level of an existing document.
    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<(), AppError>;
    async fn delete(&self, collection: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn resolve_session(&self, token: &str) -> Result<Session, AppError>;
}
