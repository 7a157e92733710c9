use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::maybe_auth::MaybeAuthUser;
use crate::api::dtos::requests::QuoteRequest;
use crate::domain::models::event::clock;
use crate::domain::services::availability::{estimated_cost, quote_event_cost, CostQuote};
use crate::error::AppError;
use chrono::NaiveTime;
use std::sync::Arc;

fn parse_clock(field: &str, raw: &str) -> Result<NaiveTime, AppError> {
    clock::parse(raw.trim())
        .ok_or_else(|| AppError::Validation(format!("{} must be HH:MM, got '{}'", field, raw)))
}

pub async fn create_quote(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(session): MaybeAuthUser,
    Json(payload): Json<QuoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let start = parse_clock("startTime", &payload.start_time)?;
    let end = parse_clock("endTime", &payload.end_time)?;

    let quote = match (payload.salon, payload.hourly_rate) {
        (Some(salon), _) => {
            let venues = state.venues(session).fetch().await?;
            quote_event_cost(start, end, &salon, &venues)?
        }
        (None, Some(rate)) => CostQuote {
            salon: String::new(),
            hours: (end - start).num_seconds() as f64 / 3600.0,
            hourly_rate: rate,
            total_cost: estimated_cost(start, end, rate)?,
        },
        (None, None) => {
            return Err(AppError::Validation("Either salon or hourlyRate is required".into()));
        }
    };

    Ok(Json(quote))
}
