pub mod entry;
pub mod health;

use axum::http::StatusCode;
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /entries              list, create
/// /entries/search       search by title
/// /entries/{id}         get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/entries", entry::router())
}

/// Fallback for any path no route matched.
pub async fn route_not_found() -> AppError {
    AppError::Status {
        status: StatusCode::NOT_FOUND,
        message: "Route not found".into(),
    }
}
