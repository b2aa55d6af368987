//! Query-string schemas for listing and searching.

use validator::Validate;

use super::coerce::coerce_fields;
use super::rules::{FieldKind, FieldSpec, ValidationErrors};
use super::{FromRaw, RawInput};
use crate::pagination::{PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};

const TITLE: FieldSpec = FieldSpec::new("title", "Title", FieldKind::Text);
const PAGE: FieldSpec = FieldSpec::new("page", "Page", FieldKind::Integer);
const LIMIT: FieldSpec = FieldSpec::new("limit", "Limit", FieldKind::Integer);

/// `?page=&limit=` fields.
pub const PAGE_FIELDS: [FieldSpec; 2] = [PAGE, LIMIT];

/// `?title=&page=&limit=` fields.
pub const SEARCH_FIELDS: [FieldSpec; 3] = [TITLE, PAGE, LIMIT];

/// A validated title search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Case-insensitive substring to look for in entry titles.
    pub title: String,
    pub page: PageRequest,
}

impl FromRaw for PageRequest {
    fn from_raw(raw: &RawInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let request = page_request(raw, &mut errors);
        errors.sort_by_table(&PAGE_FIELDS);
        errors.into_result(|| request)
    }
}

impl FromRaw for SearchQuery {
    fn from_raw(raw: &RawInput) -> Result<Self, ValidationErrors> {
        let (mut parsed, mut errors) = coerce_fields(&[TITLE], raw, true);
        let title = parsed.text(TITLE.name).unwrap_or_default();
        if raw.contains_key(TITLE.name) && errors.is_empty() && title.trim().is_empty() {
            errors.push(TITLE.name, "Title is required");
        }

        let page = page_request(raw, &mut errors);
        errors.sort_by_table(&SEARCH_FIELDS);
        errors.into_result(|| SearchQuery { title, page })
    }
}

/// Parse `page`/`limit` with their defaults, collecting violations into `errors`.
fn page_request(raw: &RawInput, errors: &mut ValidationErrors) -> PageRequest {
    let (mut parsed, parse_errors) = coerce_fields(&PAGE_FIELDS, raw, false);
    errors.append(parse_errors);

    let request = PageRequest {
        page: parsed.integer(PAGE.name).unwrap_or(DEFAULT_PAGE),
        limit: parsed.integer(LIMIT.name).unwrap_or(DEFAULT_LIMIT),
    };
    if let Err(violations) = request.validate() {
        errors.absorb(&violations);
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn query(value: Value) -> RawInput {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn missing_params_use_defaults() {
        let request = PageRequest::from_raw(&RawInput::new()).unwrap();
        assert_eq!(request, PageRequest { page: 1, limit: 10 });
    }

    #[test]
    fn string_params_are_coerced() {
        let request = PageRequest::from_raw(&query(json!({"page": "3", "limit": "25"}))).unwrap();
        assert_eq!(request, PageRequest { page: 3, limit: 25 });
    }

    #[test]
    fn page_must_be_positive() {
        let errors = PageRequest::from_raw(&query(json!({"page": "0"}))).unwrap_err();
        let violation = errors.iter().next().unwrap();
        assert_eq!(violation.field, "page");
        assert_eq!(violation.message, "Page must be greater than 0");
    }

    #[test]
    fn limit_is_capped_at_100() {
        assert!(PageRequest::from_raw(&query(json!({"limit": "100"}))).is_ok());
        let errors = PageRequest::from_raw(&query(json!({"limit": "101"}))).unwrap_err();
        assert_eq!(errors.iter().next().unwrap().field, "limit");
    }

    #[test]
    fn oversized_page_is_out_of_range() {
        let errors =
            PageRequest::from_raw(&query(json!({"page": "99999999999999999999"}))).unwrap_err();
        let violation = errors.iter().next().unwrap();
        assert_eq!(violation.field, "page");
        assert_eq!(violation.message, "Page is out of range");
    }

    #[test]
    fn non_numeric_params_are_rejected_not_defaulted() {
        let errors =
            PageRequest::from_raw(&query(json!({"page": "first", "limit": "ten"}))).unwrap_err();
        let messages: Vec<_> = errors.iter().map(|v| v.message.as_str()).collect();
        assert_eq!(messages, ["Page must be a number", "Limit must be a number"]);
    }

    #[test]
    fn search_requires_title() {
        let errors = SearchQuery::from_raw(&RawInput::new()).unwrap_err();
        let violation = errors.iter().next().unwrap();
        assert_eq!(violation.field, "title");
        assert_eq!(violation.message, "Title is required");
    }

    #[test]
    fn search_rejects_blank_title() {
        let errors = SearchQuery::from_raw(&query(json!({"title": "   "}))).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn search_collects_title_and_paging_errors() {
        let errors = SearchQuery::from_raw(&query(json!({"limit": "500"}))).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, ["title", "limit"]);
    }

    #[test]
    fn search_keeps_title_verbatim() {
        let search =
            SearchQuery::from_raw(&query(json!({"title": "Dark", "page": "2"}))).unwrap();
        assert_eq!(search.title, "Dark");
        assert_eq!(search.page, PageRequest { page: 2, limit: 10 });
    }
}
