//! Custom Axum extractors.

use super::error::AppError;
use axum::{
    Json, async_trait,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

/// JSON body extractor that rejects malformed or incomplete bodies with
/// 400 Bad Request and the service's `{code, message}` envelope.
///
/// Axum's stock `Json` answers 422 when a body parses but does not match the
/// target type; the booking API treats every unusable body the same way.
///
/// # Example
///
/// ```ignore
/// async fn handler(AppJson(request): AppJson<BookingRequest>) -> ... { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::bad_request(rejection.body_text())),
        }
    }
}
