use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cinedex_core::error::CoreError;

use crate::response::ApiResponse;

/// Message returned for every 500, whatever the cause.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the standard failure envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinedex_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An error that already knows its HTTP status.
    #[error("{message}")]
    Status { status: StatusCode, message: String },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Detail behind a 500 response, carried as a response extension.
///
/// [`crate::middleware::error_detail`] decides whether it reaches the client.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, ApiResponse::failure(core.to_string()))
                }
                CoreError::Validation(errors) => (
                    StatusCode::BAD_REQUEST,
                    ApiResponse::validation(errors.clone()),
                ),
            },

            // Repos report missing rows as `None`/`false`, so any sqlx error is a store failure.
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                return internal_error_response(self.to_string());
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiResponse::failure(msg)),
            AppError::Status { status, message } => (*status, ApiResponse::failure(message)),
        };

        (status, Json(body)).into_response()
    }
}

/// Generic 500 envelope with the detail attached as an [`ErrorDetail`] extension.
pub fn internal_error_response(detail: String) -> Response {
    let mut response = (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::failure(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response();
    response.extensions_mut().insert(ErrorDetail(detail));
    response
}
