use std::env;

pub const MEMORY_DATABASE_URL: &str = "memory://";

#[derive(Clone)]
pub struct Config {
    /// `memory://` for the in-process store, otherwise an SQLite URL.
    pub database_url: String,
    pub port: u16,
    pub auth_public_key: String, // Ed25519 public key (PEM) of the sign-in gateway
    pub auth_issuer: String,
    pub auth_audience: String,
    /// Venues are one catalog shared by every owner.
    pub shared_venue_catalog: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://hotel-events.db".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            auth_public_key: env::var("AUTH_PUBLIC_KEY").expect("AUTH_PUBLIC_KEY must be set (Ed25519 Public Key)"),
            auth_issuer: env::var("AUTH_ISSUER").unwrap_or_else(|_| "https://auth.hotel-events.local".to_string()),
            auth_audience: env::var("AUTH_AUDIENCE").unwrap_or_else(|_| "hotel-events-admin".to_string()),
            shared_venue_catalog: env::var("SHARED_VENUE_CATALOG")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    !matches!(raw.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off")
}
