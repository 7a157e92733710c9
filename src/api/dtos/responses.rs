use crate::domain::models::event::Event;
use crate::domain::models::venue::Venue;
use crate::domain::services::availability::{DashboardStats, UnresolvedReference};
use crate::domain::services::calendar::DayCell;
use crate::domain::services::filter::EventFilter;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueAvailabilityResponse {
    pub date: NaiveDate,
    pub occupied: Vec<String>,
    pub available: Vec<Venue>,
}

#[derive(Serialize)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

#[derive(Serialize)]
pub struct FilteredTotals {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse<'a> {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub prev: MonthRef,
    pub next: MonthRef,
    pub weekdays: [&'static str; 7],
    pub filter: EventFilter,
    pub venue_options: Vec<String>,
    pub event_types: Vec<String>,
    pub venue_colors: BTreeMap<String, &'static str>,
    /// Badge colors keyed by status.
    pub status_colors: BTreeMap<&'static str, &'static str>,
    /// Badge colors keyed by event type.
    pub type_colors: BTreeMap<String, &'static str>,
    pub totals: FilteredTotals,
    pub cells: Vec<DayCell<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub hotel_name: String,
    pub today: NaiveDate,
    pub stats: DashboardStats,
    pub upcoming_events: Vec<Event>,
    pub unresolved_references: Vec<UnresolvedReference>,
}
