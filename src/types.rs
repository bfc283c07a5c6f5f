//! Domain types for the movie booking service.
//!
//! Movies are the finite resource; bookings are immutable facts recording the
//! consumption of one seat. Identifiers are assigned by the store, so they are
//! plain integers rather than generated UUIDs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie with its seat inventory.
#[derive(Clone, Debug, Serialize, Deserialize, FromRow)]
pub struct Movie {
    /// Store-assigned identifier
    pub id: i64,
    /// Movie title
    pub title: String,
    /// Total seat capacity
    pub total_seats: i32,
    /// Seats still available for booking
    pub available_seats: i32,
}

/// Remaining availability for a single movie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Movie identifier
    pub movie_id: i64,
    /// Seats still available for booking
    pub available_seats: i32,
}

/// Request body for booking a seat.
#[derive(Clone, Debug, Deserialize)]
pub struct BookingRequest {
    /// Name of the person booking the seat
    pub user_name: String,
}

/// Receipt returned after a successful booking.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BookingReceipt {
    /// Store-assigned booking identifier
    pub booking_id: i64,
    /// Movie the seat was booked for
    pub movie_id: i64,
    /// Name the booking was made under
    pub user_name: String,
    /// Human-readable confirmation message
    pub message: String,
}
