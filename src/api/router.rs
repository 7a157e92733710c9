use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, calendar, dashboard, event, health, hotel_config, quote, staff, venue};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/session", post(auth::create_session))
        .route("/api/v1/auth/me", get(auth::me))
        .route("/api/v1/auth/logout", post(auth::logout))

        // Events
        .route("/api/v1/events", get(event::list_events).post(event::create_event))
        .route("/api/v1/events/{id}", get(event::get_event).put(event::update_event).delete(event::delete_event))

        // Venues
        .route("/api/v1/venues", get(venue::list_venues).post(venue::create_venue))
        .route("/api/v1/venues/availability", get(venue::venue_availability))
        .route("/api/v1/venues/{id}", put(venue::update_venue).delete(venue::delete_venue))

        // Staff
        .route("/api/v1/staff", get(staff::list_staff).post(staff::create_staff))
        .route("/api/v1/staff/{id}", put(staff::update_staff).delete(staff::delete_staff))

        // Hotel config
        .route("/api/v1/config", get(hotel_config::get_config).put(hotel_config::update_config))

        // Views
        .route("/api/v1/calendar", get(calendar::get_calendar))
        .route("/api/v1/dashboard", get(dashboard::get_dashboard))
        .route("/api/v1/quotes", post(quote::create_quote))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
