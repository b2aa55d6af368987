//! Route definitions for the `/entries` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::entry;
use crate::state::AppState;

/// Routes mounted at `/entries`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /search    -> search
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(entry::list).post(entry::create))
        .route("/search", get(entry::search))
        .route(
            "/{id}",
            get(entry::get_by_id)
                .put(entry::update)
                .delete(entry::delete),
        )
}
