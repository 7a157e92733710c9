use crate::domain::models::event::{Event, EventPatch, NewEvent, VenueAssignment};
use crate::domain::models::session::Session;
use crate::domain::models::venue::Venue;
use crate::domain::ports::{to_fields, RecordStore, EVENTS};
use crate::domain::services::collection::OwnedCollection;
use crate::domain::services::live::LiveCollection;
use crate::error::AppError;
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// The session owner's events, ordered by date.
pub struct EventCollection {
    inner: OwnedCollection,
}

impl EventCollection {
    pub fn new(store: Arc<dyn RecordStore>, session: Option<Session>) -> Self {
        Self { inner: OwnedCollection::new(store, session, EVENTS, "date") }
    }

    pub async fn subscribe(&self) -> LiveCollection<Event> {
        self.inner.subscribe().await
    }

    pub async fn fetch(&self) -> Result<Vec<Event>, AppError> {
        self.inner.fetch("Load events").await
    }

    pub async fn get(&self, id: &str) -> Result<Option<Event>, AppError> {
        self.inner.get(id, "Load event").await
    }

    pub async fn by_date(&self, date: NaiveDate) -> Result<Vec<Event>, AppError> {
        Ok(on_date(&self.fetch().await?, date).cloned().collect())
    }

    pub async fn by_salon(&self, salon: &str) -> Result<Vec<Event>, AppError> {
        Ok(in_salon(&self.fetch().await?, salon).cloned().collect())
    }

    pub async fn between(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Event>, AppError> {
        Ok(in_range(&self.fetch().await?, from, to).cloned().collect())
    }

    /// Stores a new event. Unnamed events are named after their date.
    pub async fn add(&self, draft: NewEvent) -> Result<Event, AppError> {
        self.inner.require_session()?;

        let name = draft.display_name();
        let mut fields = to_fields(&draft)?;
        fields.insert("name".to_string(), Value::String(name));

        let event: Event = self.inner.create(fields, "Create event").await?;
        info!(event_id = %event.id, date = %event.date, salon = %event.venue.salon, "Event created");
        Ok(event)
    }

    pub async fn update(&self, id: &str, patch: EventPatch) -> Result<Event, AppError> {
        self.inner.require_session()?;
        self.inner.update(id, to_fields(&patch)?, "Update event").await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.inner.delete(id, "Delete event").await?;
        info!(event_id = %id, "Event deleted");
        Ok(())
    }
}

/// Copies the selected venue's capacity into both `capacity` and
/// `attendeesMax`. Unknown salons are left as sent.
pub fn apply_venue_defaults(assignment: &mut VenueAssignment, venues: &[Venue]) {
    let Some(venue) = venues.iter().find(|v| v.name == assignment.salon) else {
        return;
    };
    assignment.capacity = venue.capacity;
    assignment.attendees_max = venue.capacity;
}

pub fn on_date(events: &[Event], date: NaiveDate) -> impl Iterator<Item = &Event> {
    events.iter().filter(move |e| e.date == date)
}

pub fn in_salon<'a>(events: &'a [Event], salon: &'a str) -> impl Iterator<Item = &'a Event> {
    events.iter().filter(move |e| e.venue.salon == salon)
}

/// Both ends inclusive.
pub fn in_range(events: &[Event], from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = &Event> {
    events.iter().filter(move |e| e.date >= from && e.date <= to)
}
