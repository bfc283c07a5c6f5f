//! Read-only inventory queries.
//!
//! Plain, non-locking reads against the same storage the booking engine
//! writes. Results are advisory with respect to in-flight reservations and
//! must never gate a booking decision; only the engine's locked read does.

use crate::error::{BookingError, classify};
use crate::types::{Availability, Movie};
use async_trait::async_trait;
use sqlx::PgPool;

/// Read interface over the movie inventory.
///
/// Handlers depend on this seam rather than on the concrete store so the
/// read path can be swapped or faked independently of the booking engine.
#[async_trait]
pub trait InventoryReader: Send + Sync {
    /// List all movies with their capacity and current availability.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Storage`] or [`BookingError::Transient`] on
    /// store faults.
    async fn list_movies(&self) -> Result<Vec<Movie>, BookingError>;

    /// Remaining availability for one movie.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] for an unknown movie id, otherwise
    /// store faults as in [`Self::list_movies`].
    async fn availability(&self, movie_id: i64) -> Result<Availability, BookingError>;
}

/// Postgres-backed implementation of [`InventoryReader`].
#[derive(Clone)]
pub struct PostgresInventory {
    pool: PgPool,
}

impl PostgresInventory {
    /// Create a reader over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryReader for PostgresInventory {
    async fn list_movies(&self) -> Result<Vec<Movie>, BookingError> {
        sqlx::query_as::<_, Movie>(
            "SELECT id, title, total_seats, available_seats FROM movies ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(classify)
    }

    async fn availability(&self, movie_id: i64) -> Result<Availability, BookingError> {
        let row: Option<(i32,)> =
            sqlx::query_as("SELECT available_seats FROM movies WHERE id = $1")
                .bind(movie_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(classify)?;

        row.map(|(available_seats,)| Availability {
            movie_id,
            available_seats,
        })
        .ok_or(BookingError::NotFound(movie_id))
    }
}
