//! Development-mode exposure of internal error detail.

use axum::extract::State;
use axum::response::Response;

use crate::error::{ErrorDetail, INTERNAL_ERROR_MESSAGE};
use crate::middleware::envelope::replace_body;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Response mapper that rewrites 500 bodies to include an `error` field
/// when running in development.
///
/// In production the [`ErrorDetail`] extension is stripped and the body is
/// left as the generic message.
pub async fn expose_error_detail(State(state): State<AppState>, mut response: Response) -> Response {
    let Some(ErrorDetail(detail)) = response.extensions_mut().remove::<ErrorDetail>() else {
        return response;
    };

    if !state.config.environment.is_development() {
        return response;
    }

    replace_body(
        response,
        ApiResponse::failure(INTERNAL_ERROR_MESSAGE).with_error(detail),
    )
}
