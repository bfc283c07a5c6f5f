//! HTTP server wiring: router, shared state, health checks, error envelope.

pub mod error;
pub mod extractors;
pub mod health;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use extractors::AppJson;
pub use routes::build_router;
pub use state::AppState;
