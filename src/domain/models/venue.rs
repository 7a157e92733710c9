use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// A bookable room ("salón"). Events reference it by `name`, not by id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Venue {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "capacidadPersonas")]
    pub capacity: u32,
    #[serde(rename = "precioPorHora")]
    pub hourly_rate: f64,
    #[serde(rename = "tomasCorriente", default)]
    pub power_outlets: u32,
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewVenue {
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    #[serde(rename = "capacidadPersonas", alias = "capacity")]
    pub capacity: u32,
    #[serde(rename = "precioPorHora", alias = "hourly_rate")]
    pub hourly_rate: f64,
    #[serde(rename = "tomasCorriente", alias = "power_outlets", default)]
    pub power_outlets: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct VenuePatch {
    #[serde(rename = "nombre", alias = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "capacidadPersonas", alias = "capacity", skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(rename = "precioPorHora", alias = "hourly_rate", skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(rename = "tomasCorriente", alias = "power_outlets", skip_serializing_if = "Option::is_none")]
    pub power_outlets: Option<u32>,
}
