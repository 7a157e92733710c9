use axum::{extract::{State, Query}, response::{IntoResponse, Response}, Json};
use crate::state::AppState;
use crate::api::extractors::maybe_auth::MaybeAuthUser;
use crate::api::dtos::{requests::CalendarQuery, responses::{CalendarResponse, FilteredTotals, MonthRef}};
use crate::domain::models::event::{Event, EventStatus};
use crate::domain::services::availability::{confirmed_count, pending_count, total_count};
use crate::domain::services::calendar::{build_grid, CalendarMonth, WEEKDAY_LABELS};
use crate::domain::services::colors::{consistent_color_for, event_type_color, status_color};
use crate::domain::services::filter::{distinct_event_types, venue_options, EventFilter, Selection};
use crate::error::AppError;
use chrono::Local;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Month grid of the caller's events, narrowed by the venue and type filters.
pub async fn get_calendar(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(session): MaybeAuthUser,
    Query(query): Query<CalendarQuery>,
) -> Result<Response, AppError> {
    let today = Local::now().date_naive();
    let current = CalendarMonth::containing(today);
    let month = CalendarMonth::new(
        query.year.unwrap_or(current.year()),
        query.month.unwrap_or(current.month()),
    )
    .ok_or_else(|| AppError::Validation("Invalid year or month".into()))?;

    let filter = EventFilter {
        venue: Selection::parse(query.venue.as_deref()),
        event_type: Selection::parse(query.event_type.as_deref()),
    };

    let venues = state.venues(session.clone()).fetch().await?;
    let events = state.events(session).fetch().await?;

    let filtered: Vec<Event> = filter.apply(&events).into_iter().cloned().collect();
    let grid = build_grid(month, &filtered, today);

    let options = venue_options(&venues);
    let venue_colors: BTreeMap<String, &'static str> = options
        .iter()
        .map(String::as_str)
        .chain(events.iter().map(|e| e.venue.salon.as_str()))
        .map(|name| (name.to_string(), consistent_color_for(name)))
        .collect();

    let event_types = distinct_event_types(&events);
    let type_colors = event_types
        .iter()
        .map(|t| (t.clone(), event_type_color(t)))
        .collect();
    let status_colors = EventStatus::ALL
        .iter()
        .map(|s| (s.as_str(), status_color(*s)))
        .collect();

    let (prev, next) = (month.prev(), month.next());
    let response = CalendarResponse {
        year: grid.year,
        month: grid.month,
        title: grid.title,
        prev: MonthRef { year: prev.year(), month: prev.month() },
        next: MonthRef { year: next.year(), month: next.month() },
        weekdays: WEEKDAY_LABELS,
        venue_options: options,
        event_types,
        venue_colors,
        status_colors,
        type_colors,
        totals: FilteredTotals {
            total: total_count(&filtered),
            confirmed: confirmed_count(&filtered),
            pending: pending_count(&filtered),
        },
        filter,
        cells: grid.cells,
    };

    Ok(Json(response).into_response())
}
