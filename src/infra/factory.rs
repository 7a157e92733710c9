use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::{Config, MEMORY_DATABASE_URL};
use crate::domain::ports::RecordStore;
use crate::infra::identity::jwt_identity_provider::JwtIdentityProvider;
use crate::infra::repositories::{
    memory_record_store::MemoryRecordStore, sqlite_record_store::SqliteRecordStore,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let identity = Arc::new(
        JwtIdentityProvider::new(config).expect("Failed to load AUTH_PUBLIC_KEY"),
    );

    let store: Arc<dyn RecordStore> = if config.database_url == MEMORY_DATABASE_URL {
        info!("Using in-memory record store; data is lost on exit");
        Arc::new(MemoryRecordStore::new())
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(&config.database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        Arc::new(SqliteRecordStore::new(pool))
    };

    AppState {
        config: config.clone(),
        store,
        identity,
    }
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
