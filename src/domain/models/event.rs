use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Finished,
}

impl EventStatus {
    pub const ALL: [EventStatus; 4] = [
        EventStatus::Pending,
        EventStatus::Confirmed,
        EventStatus::Cancelled,
        EventStatus::Finished,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Pending => "pending",
            EventStatus::Confirmed => "confirmed",
            EventStatus::Cancelled => "cancelled",
            EventStatus::Finished => "finished",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientContact {
    pub name: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub special_requirements: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VenueAssignment {
    /// Venue name; the join key into the `salones` collection.
    pub salon: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub configuration: String,
    #[serde(default)]
    pub attendees_min: Option<u32>,
    #[serde(default)]
    pub attendees_max: u32,
    #[serde(default)]
    pub additional_areas: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffAssignment {
    pub coordinator: Option<String>,
    pub waiters: Option<u32>,
    pub security: Option<u32>,
    pub kitchen_supervisor: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Financials {
    pub total_cost: f64,
    pub deposit: f64,
    pub deposit_date: String,
    pub balance: f64,
    pub payment_method: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Logistics {
    pub external_providers: Option<String>,
    pub special_notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LegalChecklist {
    pub contract_signed: bool,
    pub contract_date: String,
    pub insurance: bool,
    pub permits: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub status: EventStatus,
    pub date: NaiveDate,
    #[serde(with = "clock")]
    pub start_time: NaiveTime,
    #[serde(with = "clock")]
    pub end_time: NaiveTime,
    #[serde(default, with = "opt_clock", skip_serializing_if = "Option::is_none")]
    pub setup_time: Option<NaiveTime>,
    #[serde(default, with = "opt_clock", skip_serializing_if = "Option::is_none")]
    pub teardown_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientContact>,
    pub venue: VenueAssignment,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub staff: StaffAssignment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial: Option<Financials>,
    #[serde(default)]
    pub logistics: Logistics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal: Option<LegalChecklist>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the "new event" flow. Owner and timestamps are stamped
/// by the collection on create.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub status: EventStatus,
    pub date: NaiveDate,
    #[serde(with = "clock")]
    pub start_time: NaiveTime,
    #[serde(with = "clock")]
    pub end_time: NaiveTime,
    #[serde(default, with = "opt_clock", skip_serializing_if = "Option::is_none")]
    pub setup_time: Option<NaiveTime>,
    #[serde(default, with = "opt_clock", skip_serializing_if = "Option::is_none")]
    pub teardown_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientContact>,
    pub venue: VenueAssignment,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub staff: StaffAssignment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial: Option<Financials>,
    #[serde(default)]
    pub logistics: Logistics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal: Option<LegalChecklist>,
}

impl NewEvent {
    /// Events created without a name are labelled with their date.
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            self.date.format("%d/%m/%Y").to_string()
        } else {
            self.name.clone()
        }
    }
}

/// Partial update; only the fields present are merged into the stored record.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, with = "opt_clock", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "opt_clock", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    #[serde(default, with = "opt_clock", skip_serializing_if = "Option::is_none")]
    pub setup_time: Option<NaiveTime>,
    #[serde(default, with = "opt_clock", skip_serializing_if = "Option::is_none")]
    pub teardown_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientContact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<VenueAssignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff: Option<StaffAssignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial: Option<Financials>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logistics: Option<Logistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal: Option<LegalChecklist>,
}

/// Day-local clock values stored as `HH:MM`.
pub mod clock {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn parse(value: &str) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(value, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
            .ok()
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid clock time '{}'", raw)))
    }
}

/// Optional clock values; the front end stores unset times as "".
pub mod opt_clock {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => super::clock::serialize(t, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => super::clock::parse(value)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid clock time '{}'", value))),
        }
    }
}
