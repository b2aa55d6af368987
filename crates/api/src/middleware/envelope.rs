//! JSON envelope for error responses produced outside the handlers.
//!
//! Layers such as the request timeout answer with a bare status. This
//! mapper gives those responses the same `{success, message}` body as
//! everything else.

use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response::ApiResponse;

/// Wrap bodiless 4xx/5xx responses in the failure envelope.
///
/// Responses that already declare a content type are left alone.
pub async fn envelope_bare_errors(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error())
        || response.headers().contains_key(CONTENT_TYPE)
    {
        return response;
    }

    let message = status.canonical_reason().unwrap_or("Request failed");
    replace_body(response, ApiResponse::failure(message))
}

/// Swap the body for `body`, keeping status, headers and extensions.
pub fn replace_body(response: Response, body: ApiResponse) -> Response {
    let (mut parts, _) = response.into_parts();
    let json = Json(body).into_response();
    parts.headers.remove(CONTENT_LENGTH);
    parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Response::from_parts(parts, json.into_body())
}
