use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaffRole {
    #[serde(rename = "coordinador")]
    Coordinator,
    #[serde(rename = "supervisor_cocina")]
    KitchenSupervisor,
    #[serde(rename = "mesero")]
    Waiter,
    #[serde(rename = "seguridad")]
    Security,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Coordinator => "coordinador",
            StaffRole::KitchenSupervisor => "supervisor_cocina",
            StaffRole::Waiter => "mesero",
            StaffRole::Security => "seguridad",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StaffRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coordinador" | "coordinator" => Ok(StaffRole::Coordinator),
            "supervisor_cocina" | "kitchen_supervisor" => Ok(StaffRole::KitchenSupervisor),
            "mesero" | "waiter" => Ok(StaffRole::Waiter),
            "seguridad" | "security" => Ok(StaffRole::Security),
            other => Err(format!("Unknown staff role '{}'", other)),
        }
    }
}

/// Staff member ("personal"). Events reference staff by `name`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StaffMember {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "telefono", default)]
    pub phone: String,
    #[serde(rename = "tipo")]
    pub role: StaffRole,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewStaffMember {
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    #[serde(rename = "telefono", alias = "phone", default)]
    pub phone: String,
    #[serde(rename = "tipo", alias = "role")]
    pub role: StaffRole,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct StaffPatch {
    #[serde(rename = "nombre", alias = "name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "telefono", alias = "phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "tipo", alias = "role", skip_serializing_if = "Option::is_none")]
    pub role: Option<StaffRole>,
}
