//! Router configuration.

use super::health::{health_check, readiness_check};
use super::state::AppState;
use crate::api::{availability, bookings, movies};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Build the complete Axum router.
///
/// # Arguments
///
/// - `state`: Application state to share with handlers
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health checks
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        // Inventory reads
        .route("/movies", get(movies::list_movies))
        .route("/movies/:id/availability", get(availability::get_availability))
        // Booking (the write path)
        .route("/movies/:id/book", post(bookings::book_seat))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
