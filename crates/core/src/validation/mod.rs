//! Request validation.
//!
//! Raw request input (a JSON body, or a query string lifted into a JSON
//! object of strings) goes through two stages:
//!
//! 1. **Coercion** -- a declarative field table ([`rules::FieldSpec`]) says how
//!    each field is parsed. Numeric fields accept numbers or numeric strings;
//!    anything unparseable is reported, never defaulted.
//! 2. **Constraints** -- the typed value is checked with its `validator`
//!    attributes, plus the calendar-relative year ceiling.
//!
//! Every violation from both stages is collected; nothing short-circuits.

pub mod coerce;
pub mod query;
pub mod rules;
pub mod schema;

pub use query::SearchQuery;
pub use rules::{FieldViolation, ValidationErrors};

/// Untyped request input keyed by field name.
pub type RawInput = serde_json::Map<String, serde_json::Value>;

/// Build a typed, constraint-satisfying value from raw request input.
pub trait FromRaw: Sized {
    fn from_raw(raw: &RawInput) -> Result<Self, ValidationErrors>;
}
