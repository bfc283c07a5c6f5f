//! Movie seat booking service.
//!
//! Exposes movie inventory over HTTP and guarantees that concurrent booking
//! requests never oversell a movie. The core is [`booking::BookingEngine`],
//! which runs the check-decrement-record sequence inside a single Postgres
//! transaction holding a row-scoped `FOR UPDATE` lock on the target movie:
//!
//! ```text
//! BEGIN;
//!   SET LOCAL lock_timeout = '...';
//!   SELECT available_seats FROM movies WHERE id = $1 FOR UPDATE;
//!   -- missing row  -> NotFound, seats <= 0 -> Exhausted (rollback)
//!   UPDATE movies SET available_seats = available_seats - 1 WHERE id = $1;
//!   INSERT INTO bookings (movie_id, user_name) VALUES ($1, $2) RETURNING id;
//! COMMIT;
//! ```
//!
//! This serializes writers on the same movie while leaving writers on
//! different movies fully concurrent, so at all times
//! `available_seats == total_seats - count(bookings)` holds for every movie.
//!
//! Reads ([`inventory::InventoryReader`]) are plain non-locking queries and
//! are advisory only.

pub mod api;
pub mod booking;
pub mod config;
pub mod error;
pub mod inventory;
pub mod server;
pub mod types;
