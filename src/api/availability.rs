//! Seat availability endpoint.
//!
//! A plain, non-locking read. The result is advisory with respect to
//! in-flight bookings; only the booking engine's locked read decides whether
//! a seat can actually be taken.

use crate::server::{AppError, AppState};
use crate::types::Availability;
use axum::{
    Json,
    extract::{Path, State},
};

/// Get remaining availability for one movie.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/movies/1/availability
/// # {"movie_id":1,"available_seats":42}
/// ```
pub async fn get_availability(
    Path(movie_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Availability>, AppError> {
    let availability = state.inventory.availability(movie_id).await?;
    Ok(Json(availability))
}
