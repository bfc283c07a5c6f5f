//! HTTP API handlers.
//!
//! Thin adapters over the booking engine and inventory reads; all domain
//! decisions live below this layer.

pub mod availability;
pub mod bookings;
pub mod movies;
