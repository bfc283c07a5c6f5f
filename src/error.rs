//! Booking error taxonomy.
//!
//! The original service distinguished failures by comparing error message
//! text; here every outcome is a structured kind so callers can branch on it
//! safely. `Transient` marks failures where retrying the whole operation is
//! safe because the transaction boundary discarded any partial effect.

use thiserror::Error;

/// Failure modes of the booking engine and inventory reads.
#[derive(Debug, Error)]
pub enum BookingError {
    /// Request was malformed; rejected before touching the store.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No movie exists with the given identifier.
    #[error("movie {0} not found")]
    NotFound(i64),

    /// The movie has no seats left. A correct business outcome, not a fault.
    #[error("no available seats for movie {0}")]
    Exhausted(i64),

    /// Lock-wait timeout, deadlock, serialization conflict, or connectivity
    /// loss. The whole operation may be retried; no partial effect persists.
    #[error("transient storage failure")]
    Transient(#[source] sqlx::Error),

    /// Any other store fault. Logged with detail, reported generically.
    #[error("storage failure")]
    Storage(#[source] sqlx::Error),
}

/// Postgres SQLSTATE for a `lock_timeout` expiry.
const LOCK_NOT_AVAILABLE: &str = "55P03";
/// Postgres SQLSTATE for a serialization failure.
const SERIALIZATION_FAILURE: &str = "40001";
/// Postgres SQLSTATE for a deadlock detected by the server.
const DEADLOCK_DETECTED: &str = "40P01";

/// Classify a raw sqlx error into the booking taxonomy.
///
/// Retryable server conditions (lock timeout, serialization failure,
/// deadlock) and connection-level failures become [`BookingError::Transient`];
/// everything else is an opaque [`BookingError::Storage`] fault.
#[must_use]
pub fn classify(err: sqlx::Error) -> BookingError {
    if let sqlx::Error::Database(db) = &err {
        if let Some(code) = db.code() {
            if matches!(
                code.as_ref(),
                LOCK_NOT_AVAILABLE | SERIALIZATION_FAILURE | DEADLOCK_DETECTED
            ) {
                return BookingError::Transient(err);
            }
        }
        return BookingError::Storage(err);
    }

    match err {
        sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            BookingError::Transient(err)
        }
        other => BookingError::Storage(other),
    }
}

impl BookingError {
    /// Whether retrying the whole operation may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient(_))
    }

    /// Stable label for this failure kind, used as the `reason` label on
    /// booking outcome metrics.
    #[must_use]
    pub const fn reason_label(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::NotFound(_) => "not_found",
            Self::Exhausted(_) => "exhausted",
            Self::Transient(_) => "transient",
            Self::Storage(_) => "storage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_transient() {
        let err = classify(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, BookingError::Transient(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn row_not_found_is_storage() {
        let err = classify(sqlx::Error::RowNotFound);
        assert!(matches!(err, BookingError::Storage(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn business_outcomes_are_not_retryable() {
        assert!(!BookingError::Exhausted(1).is_retryable());
        assert!(!BookingError::NotFound(1).is_retryable());
        assert!(!BookingError::InvalidInput("empty".into()).is_retryable());
    }

    #[test]
    fn every_failure_kind_has_a_distinct_reason_label() {
        let labels = [
            BookingError::InvalidInput("empty".into()).reason_label(),
            BookingError::NotFound(1).reason_label(),
            BookingError::Exhausted(1).reason_label(),
            BookingError::Transient(sqlx::Error::PoolTimedOut).reason_label(),
            BookingError::Storage(sqlx::Error::RowNotFound).reason_label(),
        ];
        assert_eq!(
            labels,
            [
                "invalid_input",
                "not_found",
                "exhausted",
                "transient",
                "storage"
            ]
        );
    }
}
