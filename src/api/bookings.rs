//! Seat booking endpoint.

use crate::server::{AppError, AppJson, AppState};
use crate::types::{BookingReceipt, BookingRequest};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// Book one seat for a movie.
///
/// Failure mapping: empty name → 400, unknown movie → 404, sold out → 409,
/// transient store failure (retryable) or any other fault → 500.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:8080/movies/1/book \
///   -H "Content-Type: application/json" \
///   -d '{"user_name": "Ada"}'
/// ```
///
/// Response (201 Created):
/// ```json
/// {
///   "booking_id": 17,
///   "movie_id": 1,
///   "user_name": "Ada",
///   "message": "Booking successful"
/// }
/// ```
pub async fn book_seat(
    Path(movie_id): Path<i64>,
    State(state): State<AppState>,
    AppJson(request): AppJson<BookingRequest>,
) -> Result<(StatusCode, Json<BookingReceipt>), AppError> {
    let receipt = state.engine.reserve(movie_id, &request.user_name).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}
