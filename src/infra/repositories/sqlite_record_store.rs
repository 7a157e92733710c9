use crate::domain::ports::{
    CollectionQuery, Document, Fields, RecordStore, SnapshotReceiver, OWNER_FIELD,
};
use crate::error::AppError;
use crate::infra::repositories::snapshot::{spawn_snapshot_pump, CHANGE_FEED_CAPACITY};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::SqlitePool;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Document collections kept in a single `documents` table, one JSON object
/// per row. `owner_id` mirrors the `userId` field so owner scoping is indexed.
#[derive(Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
    changes: broadcast::Sender<String>,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_FEED_CAPACITY);
        Self { pool, changes }
    }

    fn notify(&self, collection: &str) {
        let _ = self.changes.send(collection.to_string());
    }

    async fn run_query(pool: &SqlitePool, query: &CollectionQuery) -> Result<Vec<Document>, AppError> {
        let rows = sqlx::query_as::<_, (String, String)>(
            r#"SELECT id, fields FROM documents
               WHERE collection = ? AND (? IS NULL OR owner_id = ?)
               ORDER BY json_extract(fields, ?) ASC, id ASC"#
        )
            .bind(query.collection)
            .bind(query.owner.as_deref())
            .bind(query.owner.as_deref())
            .bind(format!("$.{}", query.order_by))
            .fetch_all(pool)
            .await
            .map_err(AppError::Database)?;

        rows.into_iter()
            .map(|(id, raw)| Ok(Document::new(id, parse_fields(&raw)?)))
            .collect()
    }
}

fn parse_fields(raw: &str) -> Result<Fields, AppError> {
    match serde_json::from_str::<Value>(raw).map_err(AppError::Serialization)? {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::InternalWithMsg("Stored document is not a JSON object".into())),
    }
}

fn owner_of(fields: &Fields) -> Option<String> {
    fields.get(OWNER_FIELD).and_then(Value::as_str).map(str::to_string)
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn fetch(&self, query: &CollectionQuery) -> Result<Vec<Document>, AppError> {
        Self::run_query(&self.pool, query).await
    }

    async fn subscribe(&self, query: CollectionQuery) -> Result<SnapshotReceiver, AppError> {
        let changes = self.changes.subscribe();
        let pool = self.pool.clone();
        Ok(spawn_snapshot_pump(query, changes, move |q| {
            let pool = pool.clone();
            async move { Self::run_query(&pool, &q).await }
        }))
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, AppError> {
        let row = sqlx::query_scalar::<_, String>(
            "SELECT fields FROM documents WHERE collection = ? AND id = ?"
        )
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        row.map(|raw| Ok(Document::new(id, parse_fields(&raw)?))).transpose()
    }

    async fn create(&self, collection: &str, fields: Fields) -> Result<String, AppError> {
        let id = Uuid::new_v4().to_string();
        let owner = owner_of(&fields);
        let raw = Value::Object(fields).to_string();

        sqlx::query("INSERT INTO documents (collection, id, owner_id, fields) VALUES (?, ?, ?, ?)")
            .bind(collection)
            .bind(&id)
            .bind(owner)
            .bind(raw)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.notify(collection);
        Ok(id)
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), AppError> {
        let owner = owner_of(&fields);
        let raw = Value::Object(fields).to_string();

        sqlx::query(
            r#"INSERT INTO documents (collection, id, owner_id, fields) VALUES (?, ?, ?, ?)
               ON CONFLICT(collection, id) DO UPDATE SET owner_id = excluded.owner_id, fields = excluded.fields"#
        )
            .bind(collection)
            .bind(id)
            .bind(owner)
            .bind(raw)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.notify(collection);
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let raw = sqlx::query_scalar::<_, String>(
            "SELECT fields FROM documents WHERE collection = ? AND id = ?"
        )
            .bind(collection)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Document {}/{} not found", collection, id)))?;

        let mut merged = parse_fields(&raw)?;
        for (key, value) in fields {
            merged.insert(key, value);
        }
        let owner = owner_of(&merged);

        sqlx::query("UPDATE documents SET owner_id = ?, fields = ? WHERE collection = ? AND id = ?")
            .bind(owner)
            .bind(Value::Object(merged).to_string())
            .bind(collection)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;

        self.notify(collection);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Document {}/{} not found", collection, id)));
        }

        self.notify(collection);
        Ok(())
    }
}
