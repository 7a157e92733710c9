use crate::domain::models::event::{Event, EventStatus};
use crate::domain::models::staff::StaffMember;
use crate::domain::models::venue::Venue;
use crate::error::AppError;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::BTreeSet;

pub fn total_count<E: Borrow<Event>>(events: &[E]) -> usize {
    events.len()
}

pub fn count_with_status<E: Borrow<Event>>(events: &[E], status: EventStatus) -> usize {
    events.iter().map(Borrow::<Event>::borrow).filter(|e| e.status == status).count()
}

pub fn confirmed_count<E: Borrow<Event>>(events: &[E]) -> usize {
    count_with_status(events, EventStatus::Confirmed)
}

pub fn pending_count<E: Borrow<Event>>(events: &[E]) -> usize {
    count_with_status(events, EventStatus::Pending)
}

/// Sum of each event's maximum attendance.
pub fn total_attendees<E: Borrow<Event>>(events: &[E]) -> u64 {
    events
        .iter()
        .map(Borrow::<Event>::borrow)
        .map(|e| u64::from(e.venue.attendees_max))
        .sum()
}

/// Mean maximum attendance per event; 0 for no events.
pub fn average_attendees<E: Borrow<Event>>(events: &[E]) -> f64 {
    if events.is_empty() {
        return 0.0;
    }
    total_attendees(events) as f64 / events.len() as f64
}

/// Venue names booked by any event on `date`.
pub fn occupied_venues(events: &[Event], date: NaiveDate) -> BTreeSet<&str> {
    events
        .iter()
        .filter(|e| e.date == date)
        .map(|e| e.venue.salon.as_str())
        .collect()
}

/// Venues not booked on `date`, in catalog order.
pub fn available_venues<'a>(venues: &'a [Venue], events: &[Event], date: NaiveDate) -> Vec<&'a Venue> {
    let occupied = occupied_venues(events, date);
    venues.iter().filter(|v| !occupied.contains(v.name.as_str())).collect()
}

/// Rental cost for a same-day booking: fractional hours times `hourly_rate`.
pub fn estimated_cost(start: NaiveTime, end: NaiveTime, hourly_rate: f64) -> Result<f64, AppError> {
    if end <= start {
        return Err(AppError::Validation(format!(
            "End time {} must be after start time {}",
            end.format("%H:%M"),
            start.format("%H:%M")
        )));
    }
    let hours = (end - start).num_seconds() as f64 / 3600.0;
    Ok(hours * hourly_rate)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostQuote {
    pub salon: String,
    pub hours: f64,
    pub hourly_rate: f64,
    pub total_cost: f64,
}

/// Prices a booking of the named venue.
pub fn quote_event_cost(
    start: NaiveTime,
    end: NaiveTime,
    salon: &str,
    venues: &[Venue],
) -> Result<CostQuote, AppError> {
    let venue = venues
        .iter()
        .find(|v| v.name == salon)
        .ok_or_else(|| AppError::NotFound(format!("Venue '{}' not found", salon)))?;

    let total_cost = estimated_cost(start, end, venue.hourly_rate)?;
    Ok(CostQuote {
        salon: venue.name.clone(),
        hours: (end - start).num_seconds() as f64 / 3600.0,
        hourly_rate: venue.hourly_rate,
        total_cost,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_events: usize,
    pub confirmed_events: usize,
    pub pending_events: usize,
    pub total_attendees: u64,
    /// Rounded the way the dashboard displays it.
    pub average_attendees: u64,
    pub total_venues: usize,
    pub available_venues_today: usize,
    pub occupied_venues_today: Vec<String>,
}

pub fn dashboard_stats(events: &[Event], venues: &[Venue], today: NaiveDate) -> DashboardStats {
    let occupied = occupied_venues(events, today);
    DashboardStats {
        total_events: total_count(events),
        confirmed_events: confirmed_count(events),
        pending_events: pending_count(events),
        total_attendees: total_attendees(events),
        average_attendees: average_attendees(events).round() as u64,
        total_venues: venues.len(),
        available_venues_today: available_venues(venues, events, today).len(),
        occupied_venues_today: occupied.into_iter().map(str::to_string).collect(),
    }
}

/// Name references of an event that no longer match any record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedReference {
    pub event_id: String,
    pub field: &'static str,
    pub name: String,
}

/// Reports events pointing at renamed or deleted venues and staff. Blank
/// references are not reported.
pub fn unresolved_references(
    events: &[Event],
    venues: &[Venue],
    staff: &[StaffMember],
) -> Vec<UnresolvedReference> {
    let venue_names: BTreeSet<&str> = venues.iter().map(|v| v.name.as_str()).collect();
    let staff_names: BTreeSet<&str> = staff.iter().map(|m| m.name.as_str()).collect();

    let mut missing = Vec::new();
    for event in events {
        let mut check = |field: &'static str, name: &str, known: &BTreeSet<&str>| {
            let name = name.trim();
            if !name.is_empty() && !known.contains(name) {
                missing.push(UnresolvedReference {
                    event_id: event.id.clone(),
                    field,
                    name: name.to_string(),
                });
            }
        };

        check("venue.salon", &event.venue.salon, &venue_names);
        if let Some(coordinator) = &event.staff.coordinator {
            check("staff.coordinator", coordinator, &staff_names);
        }
        if let Some(supervisor) = &event.staff.kitchen_supervisor {
            check("staff.kitchenSupervisor", supervisor, &staff_names);
        }
    }
    missing
}
