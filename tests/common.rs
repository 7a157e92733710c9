use hotel_events::{
    api::router::create_router,
    state::AppState,
    config::Config,
    domain::models::auth::Claims,
    domain::ports::RecordStore,
    infra::identity::jwt_identity_provider::JwtIdentityProvider,
    infra::repositories::{
        memory_record_store::MemoryRecordStore,
        sqlite_record_store::SqliteRecordStore,
    },
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, header},
    response::Response,
    Router,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::str::FromStr;
use tower::ServiceExt;
use serde_json::Value;

pub const ISSUER: &str = "https://auth.test";
pub const AUDIENCE: &str = "hotel-events-admin";

const PRIVATE_KEY: &str = include_str!("../tests/keys/test_private.pem");
const PUBLIC_KEY: &str = include_str!("../tests/keys/test_public.pem");

#[allow(dead_code)]
pub fn test_config(database_url: &str, shared_venue_catalog: bool) -> Config {
    Config {
        database_url: database_url.to_string(),
        port: 0,
        auth_public_key: PUBLIC_KEY.to_string(),
        auth_issuer: ISSUER.to_string(),
        auth_audience: AUDIENCE.to_string(),
        shared_venue_catalog,
    }
}

#[allow(dead_code)]
/// Signs a session token the way the sign-in gateway does.
pub fn token_for(user_id: &str, name: &str) -> String {
    let now = Utc::now();
    let claims = Claims {
        iss: ISSUER.to_string(),
        sub: user_id.to_string(),
        aud: AUDIENCE.to_string(),
        exp: (now + Duration::minutes(15)).timestamp() as usize,
        iat: now.timestamp() as usize,
        name: Some(name.to_string()),
        email: Some(format!("{}@example.com", user_id)),
    };
    let key = EncodingKey::from_ed_pem(PRIVATE_KEY.as_bytes()).unwrap();
    encode(&Header::new(Algorithm::EdDSA), &claims, &key).unwrap()
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Option<Pool<Sqlite>>,
    pub db_filename: Option<String>,
    pub state: Arc<AppState>,
    /// Set when the app runs on the in-memory store.
    pub memory: Option<MemoryRecordStore>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        Self::with_catalog(true).await
    }

    pub async fn with_catalog(shared_venue_catalog: bool) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = test_config(&db_url, shared_venue_catalog);
        let store: Arc<dyn RecordStore> = Arc::new(SqliteRecordStore::new(pool.clone()));
        let mut app = Self::build(config, store);
        app.pool = Some(pool);
        app.db_filename = Some(db_filename);
        app
    }

    /// App over the in-memory store, for injecting store failures.
    pub fn in_memory() -> Self {
        let memory = MemoryRecordStore::new();
        let store: Arc<dyn RecordStore> = Arc::new(memory.clone());
        let mut app = Self::build(test_config("memory://", true), store);
        app.memory = Some(memory);
        app
    }

    fn build(config: Config, store: Arc<dyn RecordStore>) -> Self {
        let identity = Arc::new(JwtIdentityProvider::new(&config).expect("Invalid test public key"));
        let state = Arc::new(AppState { config, store, identity });
        let router = create_router(state.clone());

        Self {
            router,
            pool: None,
            db_filename: None,
            state,
            memory: None,
        }
    }

    pub async fn send(&self, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.router.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(db_filename) = &self.db_filename {
            let _ = std::fs::remove_file(db_filename);
        }
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
