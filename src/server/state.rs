//! Application state for the booking HTTP server.

use crate::booking::BookingEngine;
use crate::inventory::InventoryReader;
use sqlx::PgPool;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Cloned (cheaply via `Arc` and pool handles) for each request. The store
/// handle is built once in `main` and threaded in explicitly; nothing here
/// is ambient or global.
#[derive(Clone)]
pub struct AppState {
    /// Booking engine (the only writer of seat inventory)
    pub engine: Arc<BookingEngine>,
    /// Read-only inventory queries
    pub inventory: Arc<dyn InventoryReader>,
    /// Pool handle for readiness checks
    pub pool: PgPool,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(
        engine: Arc<BookingEngine>,
        inventory: Arc<dyn InventoryReader>,
        pool: PgPool,
    ) -> Self {
        Self {
            engine,
            inventory,
            pool,
        }
    }
}
