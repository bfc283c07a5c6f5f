//! The booking engine: atomic check-decrement-record.
//!
//! `reserve` is the only writer of `movies.available_seats`. It serializes
//! writers on the same movie with a row-scoped `SELECT ... FOR UPDATE` lock
//! held for the duration of the transaction, so two concurrent requests can
//! never both observe the last seat. Requests for different movies never
//! contend.

use crate::error::{BookingError, classify};
use crate::types::BookingReceipt;
use sqlx::PgPool;
use tracing::info;

/// Validate a requester name before any store interaction.
///
/// Returns the trimmed name.
///
/// # Errors
///
/// Returns [`BookingError::InvalidInput`] if the name is empty or whitespace.
pub fn validate_user_name(user_name: &str) -> Result<&str, BookingError> {
    let trimmed = user_name.trim();
    if trimmed.is_empty() {
        return Err(BookingError::InvalidInput(
            "user_name must not be empty".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Executes seat reservations against the inventory store.
///
/// Holds a connection pool and the configured bound on how long a
/// reservation may wait for the row lock before failing as transient.
#[derive(Clone)]
pub struct BookingEngine {
    pool: PgPool,
    lock_timeout_ms: u64,
}

impl BookingEngine {
    /// Create an engine over the given pool.
    ///
    /// `lock_timeout_ms` bounds the wait for the per-movie row lock; a
    /// reservation that exceeds it fails with [`BookingError::Transient`].
    #[must_use]
    pub const fn new(pool: PgPool, lock_timeout_ms: u64) -> Self {
        Self {
            pool,
            lock_timeout_ms,
        }
    }

    /// Reserve exactly one seat for `movie_id` under `user_name`.
    ///
    /// The check, decrement, and booking insert commit as one unit or not at
    /// all. On any failure the transaction is rolled back and the store is
    /// left exactly as it was before the attempt.
    ///
    /// # Errors
    ///
    /// - [`BookingError::InvalidInput`] for an empty name (no store access)
    /// - [`BookingError::NotFound`] if the movie does not exist
    /// - [`BookingError::Exhausted`] if no seats remain
    /// - [`BookingError::Transient`] on lock timeout or commit conflict;
    ///   safe to retry the whole operation
    /// - [`BookingError::Storage`] on any other store fault
    pub async fn reserve(
        &self,
        movie_id: i64,
        user_name: &str,
    ) -> Result<BookingReceipt, BookingError> {
        let result = self.reserve_inner(movie_id, user_name).await;

        match &result {
            Ok(receipt) => {
                metrics::counter!("bookings.succeeded").increment(1);
                info!(movie_id, booking_id = receipt.booking_id, "seat booked");
            }
            Err(err) => {
                metrics::counter!("bookings.rejected", "reason" => err.reason_label())
                    .increment(1);
            }
        }

        result
    }

    /// The reservation transaction itself, without outcome accounting.
    async fn reserve_inner(
        &self,
        movie_id: i64,
        user_name: &str,
    ) -> Result<BookingReceipt, BookingError> {
        let user_name = validate_user_name(user_name)?;

        let mut tx = self.pool.begin().await.map_err(classify)?;

        // Bound the row-lock wait for this transaction only. SET LOCAL does
        // not accept bind parameters; the value is a config-sourced integer.
        sqlx::query(&format!(
            "SET LOCAL lock_timeout = '{}ms'",
            self.lock_timeout_ms
        ))
        .execute(&mut *tx)
        .await
        .map_err(classify)?;

        // Row lock held until commit/rollback. Every other writer for this
        // movie blocks here; writers for other movies are unaffected.
        let row: Option<(i32,)> =
            sqlx::query_as("SELECT available_seats FROM movies WHERE id = $1 FOR UPDATE")
                .bind(movie_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(classify)?;

        // Dropping the transaction on the error paths rolls it back.
        let Some((available_seats,)) = row else {
            return Err(BookingError::NotFound(movie_id));
        };

        if available_seats <= 0 {
            return Err(BookingError::Exhausted(movie_id));
        }

        sqlx::query("UPDATE movies SET available_seats = available_seats - 1 WHERE id = $1")
            .bind(movie_id)
            .execute(&mut *tx)
            .await
            .map_err(classify)?;

        let (booking_id,): (i64,) =
            sqlx::query_as("INSERT INTO bookings (movie_id, user_name) VALUES ($1, $2) RETURNING id")
                .bind(movie_id)
                .bind(user_name)
                .fetch_one(&mut *tx)
                .await
                .map_err(classify)?;

        // A failed commit has no visible effect; whatever the cause, the
        // caller may retry the whole operation.
        tx.commit().await.map_err(BookingError::Transient)?;

        Ok(BookingReceipt {
            booking_id,
            movie_id,
            user_name: user_name.to_string(),
            message: "Booking successful".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            validate_user_name(""),
            Err(BookingError::InvalidInput(_))
        ));
    }

    #[test]
    fn whitespace_name_is_rejected() {
        assert!(matches!(
            validate_user_name("   \t\n"),
            Err(BookingError::InvalidInput(_))
        ));
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!(validate_user_name("  Ada  ").ok(), Some("Ada"));
    }
}
