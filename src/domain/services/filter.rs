use crate::domain::models::event::Event;
use crate::domain::models::venue::Venue;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const ALL: &str = "all";

/// One dropdown of the calendar filter: `all` or a single value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some(ALL) => Selection::All,
            Some(value) => Selection::Only(value.to_string()),
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selection::All => serializer.serialize_str(ALL),
            Selection::Only(value) => serializer.serialize_str(value),
        }
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Selection::parse(raw.as_deref()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventFilter {
    #[serde(default)]
    pub venue: Selection,
    #[serde(default, rename = "type")]
    pub event_type: Selection,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        self.venue.matches(&event.venue.salon) && self.event_type.matches(&event.event_type)
    }

    /// Events passing both selections, in input order.
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Distinct event types in first-seen order.
pub fn distinct_event_types(events: &[Event]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for event in events {
        if !types.iter().any(|t| *t == event.event_type) {
            types.push(event.event_type.clone());
        }
    }
    types
}

pub fn venue_options(venues: &[Venue]) -> Vec<String> {
    venues.iter().map(|v| v.name.clone()).collect()
}
