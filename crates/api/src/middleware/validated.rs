//! Validating extractors.
//!
//! Handlers only ever see input that passed [`FromRaw`]. Failures are
//! rejected here with the 400 validation envelope and never reach the
//! repository layer. Body and query rejections keep axum's status (400
//! malformed, 413 too large, 415 wrong content type).

use std::collections::HashMap;

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::validation::{FromRaw, RawInput};
use serde_json::Value;

use crate::error::AppError;

/// A JSON request body validated into `T`.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<NewEntry>) -> AppResult<...> { ... }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: FromRaw + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Status {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        let Value::Object(raw) = body else {
            return Err(AppError::BadRequest(
                "Request body must be a JSON object".into(),
            ));
        };

        let value = T::from_raw(&raw).map_err(CoreError::Validation)?;
        Ok(ValidatedJson(value))
    }
}

/// Query parameters validated into `T`.
///
/// Parameters with empty values (`?page=`) are treated as absent.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: FromRaw + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::Status {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        let value = T::from_raw(&query_to_raw(params)).map_err(CoreError::Validation)?;
        Ok(ValidatedQuery(value))
    }
}

fn query_to_raw(params: HashMap<String, String>) -> RawInput {
    params
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key, Value::String(value)))
        .collect()
}
