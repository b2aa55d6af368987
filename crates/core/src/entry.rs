//! Media entry schema: the entry kind, the typed create/update inputs, and
//! the field constraints they must satisfy.
//!
//! Static constraints live on the structs as `validator` attributes. The year
//! ceiling moves with the calendar, so it is checked separately via
//! [`max_year`].

use std::fmt;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Earliest accepted release year.
pub const MIN_YEAR: i32 = 1800;

/// How many years into the future a release year may be.
pub const YEAR_LOOKAHEAD: i32 = 10;

/// Largest budget representable by the `NUMERIC(15, 2)` column.
pub const MAX_BUDGET: f64 = 9_999_999_999_999.99;

/// Latest accepted release year, relative to the current UTC date.
pub fn max_year() -> i32 {
    chrono::Utc::now().year() + YEAR_LOOKAHEAD
}

/// Whether an entry is a movie or a TV show.
///
/// Serialized as `"Movie"` / `"TV Show"` on the wire and in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "Movie")]
    Movie,
    #[serde(rename = "TV Show")]
    TvShow,
}

impl EntryKind {
    pub const ALL: [EntryKind; 2] = [EntryKind::Movie, EntryKind::TvShow];

    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Movie => "Movie",
            EntryKind::TvShow => "TV Show",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown entry kind: {0}")]
pub struct UnknownEntryKind(pub String);

impl TryFrom<String> for EntryKind {
    type Error = UnknownEntryKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EntryKind::parse(&value).ok_or(UnknownEntryKind(value))
    }
}

/// A fully-specified entry ready to be inserted.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewEntry {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    pub kind: EntryKind,
    #[validate(length(
        min = 1,
        max = 255,
        message = "Director must be between 1 and 255 characters"
    ))]
    pub director: String,
    #[validate(range(
        exclusive_min = 0.0,
        max = 9_999_999_999_999.99,
        message = "Budget must be a positive number"
    ))]
    pub budget: f64,
    #[validate(length(
        min = 1,
        max = 255,
        message = "Location must be between 1 and 255 characters"
    ))]
    pub location: String,
    /// Runtime in minutes.
    #[validate(range(min = 1, message = "Duration must be a positive integer"))]
    pub duration: i32,
    #[validate(range(min = 1800, message = "Year must be 1800 or later"))]
    pub year: i32,
}

/// A partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct EntryPatch {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    pub kind: Option<EntryKind>,
    #[validate(length(
        min = 1,
        max = 255,
        message = "Director must be between 1 and 255 characters"
    ))]
    pub director: Option<String>,
    #[validate(range(
        exclusive_min = 0.0,
        max = 9_999_999_999_999.99,
        message = "Budget must be a positive number"
    ))]
    pub budget: Option<f64>,
    #[validate(length(
        min = 1,
        max = 255,
        message = "Location must be between 1 and 255 characters"
    ))]
    pub location: Option<String>,
    #[validate(range(min = 1, message = "Duration must be a positive integer"))]
    pub duration: Option<i32>,
    #[validate(range(min = 1800, message = "Year must be 1800 or later"))]
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> NewEntry {
        NewEntry {
            title: "Inception".to_string(),
            kind: EntryKind::Movie,
            director: "Christopher Nolan".to_string(),
            budget: 160_000_000.0,
            location: "Los Angeles, USA".to_string(),
            duration: 148,
            year: 2010,
        }
    }

    #[test]
    fn kind_round_trips_through_wire_names() {
        assert_eq!(EntryKind::parse("Movie"), Some(EntryKind::Movie));
        assert_eq!(EntryKind::parse("TV Show"), Some(EntryKind::TvShow));
        assert_eq!(EntryKind::parse("tv show"), None);
        assert_eq!(EntryKind::TvShow.to_string(), "TV Show");
    }

    #[test]
    fn kind_serializes_with_display_name() {
        let json = serde_json::to_string(&EntryKind::TvShow).unwrap();
        assert_eq!(json, "\"TV Show\"");
    }

    #[test]
    fn kind_try_from_rejects_unknown() {
        let err = EntryKind::try_from("Documentary".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "unknown entry kind: Documentary");
    }

    #[test]
    fn valid_entry_passes_static_constraints() {
        assert!(inception().validate().is_ok());
    }

    #[test]
    fn title_over_255_chars_fails() {
        let mut entry = inception();
        entry.title = "x".repeat(256);
        let errors = entry.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        let mut entry = inception();
        entry.title = "é".repeat(255);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn budget_above_column_capacity_fails() {
        let mut entry = inception();
        entry.budget = MAX_BUDGET * 10.0;
        assert!(entry.validate().is_err());
    }

    #[test]
    fn zero_budget_fails() {
        let mut entry = inception();
        entry.budget = 0.0;
        let errors = entry.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("budget"));
    }

    #[test]
    fn patch_skips_absent_fields() {
        assert!(EntryPatch::default().validate().is_ok());
    }

    #[test]
    fn max_year_is_ten_years_ahead() {
        assert_eq!(max_year(), chrono::Utc::now().year() + 10);
    }
}
