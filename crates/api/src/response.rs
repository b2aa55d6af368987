//! Shared response envelope for API handlers.
//!
//! Every response, success or failure, uses the same shape:
//!
//! ```text
//! { "success": bool, "message": str, "data"?: T, "errors"?: [...], "pagination"?: {...} }
//! ```
//!
//! Absent keys are omitted rather than serialized as `null`.

use cinedex_core::pagination::PageMeta;
use cinedex_core::validation::ValidationErrors;
use serde::Serialize;

/// Standard `{ success, message, ... }` response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize = ()> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageMeta>,
    /// Internal error detail. Only populated in development mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn new(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
            data: None,
            errors: None,
            pagination: None,
            error: None,
        }
    }

    /// Successful response carrying `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::new(true, message)
        }
    }

    /// Successful page of results plus its pagination block.
    pub fn paginated(message: impl Into<String>, data: T, pagination: PageMeta) -> Self {
        Self {
            data: Some(data),
            pagination: Some(pagination),
            ..Self::new(true, message)
        }
    }
}

impl ApiResponse {
    /// Successful response with no payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(true, message)
    }

    /// Failure with a human-readable message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(false, message)
    }

    /// 400 body listing every field violation.
    pub fn validation(errors: ValidationErrors) -> Self {
        Self {
            errors: Some(errors),
            ..Self::new(false, "Validation error")
        }
    }

    pub fn with_error(mut self, detail: impl Into<String>) -> Self {
        self.error = Some(detail.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinedex_core::pagination::PageRequest;
    use serde_json::json;

    #[test]
    fn absent_keys_are_omitted() {
        let body = serde_json::to_value(ApiResponse::message("Entry deleted successfully")).unwrap();
        assert_eq!(
            body,
            json!({"success": true, "message": "Entry deleted successfully"})
        );
    }

    #[test]
    fn paginated_includes_data_and_pagination() {
        let meta = PageMeta::new(PageRequest::default(), 0);
        let body = serde_json::to_value(ApiResponse::paginated("ok", Vec::<u8>::new(), meta))
            .unwrap();
        assert_eq!(body["data"], json!([]));
        assert_eq!(body["pagination"]["totalPages"], 0);
        assert!(body.get("errors").is_none());
    }

    #[test]
    fn validation_lists_field_errors() {
        let mut errors = ValidationErrors::new();
        errors.push("title", "Title is required");
        let body = serde_json::to_value(ApiResponse::validation(errors)).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Validation error");
        assert_eq!(
            body["errors"],
            json!([{"field": "title", "message": "Title is required"}])
        );
    }
}
