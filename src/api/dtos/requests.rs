use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize, Default)]
pub struct EventListQuery {
    pub date: Option<NaiveDate>,
    pub salon: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Deserialize, Default)]
pub struct AvailabilityQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Deserialize, Default)]
pub struct StaffListQuery {
    pub role: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub venue: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

/// Either `salon` (priced at the venue's rate) or an explicit `hourlyRate`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub start_time: String,
    pub end_time: String,
    pub salon: Option<String>,
    pub hourly_rate: Option<f64>,
}
