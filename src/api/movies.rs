//! Movie listing endpoint.

use crate::server::{AppError, AppState};
use crate::types::Movie;
use axum::{Json, extract::State};

/// List all movies with capacity and current availability.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/movies
/// ```
///
/// Response:
/// ```json
/// [
///   {"id": 1, "title": "Alien", "total_seats": 100, "available_seats": 42}
/// ]
/// ```
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = state.inventory.list_movies().await?;
    Ok(Json(movies))
}
