// src/presentation/http/middleware.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Duration;

/// Bound the time a request may take. The inner future is dropped when the
/// deadline passes, which also cancels any store or author lookups still in
/// flight, and the caller gets the usual JSON error body.
pub async fn enforce_deadline(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    tokio::time::timeout(limit, next.run(request))
        .await
        .unwrap_or_else(|_elapsed| {
            tracing::error!(timeout = ?limit, "request deadline exceeded");
            HttpError::from_error(ApplicationError::infrastructure(format!(
                "request did not complete within {limit:?}"
            )))
            .into_response()
        })
}
