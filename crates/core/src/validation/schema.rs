//! Entry create/update schemas.

use validator::Validate;

use super::coerce::coerce_fields;
use super::rules::{FieldKind, FieldSpec, ValidationErrors};
use super::{FromRaw, RawInput};
use crate::entry::{max_year, EntryPatch, NewEntry};

/// Entry fields in the order violations are reported.
pub const ENTRY_FIELDS: [FieldSpec; 7] = [
    FieldSpec::new("title", "Title", FieldKind::Text),
    FieldSpec::new("type", "Type", FieldKind::EntryKind),
    FieldSpec::new("director", "Director", FieldKind::Text),
    FieldSpec::new("budget", "Budget", FieldKind::Decimal),
    FieldSpec::new("location", "Location", FieldKind::Text),
    FieldSpec::new("duration", "Duration", FieldKind::Integer),
    FieldSpec::new("year", "Year", FieldKind::Integer),
];

impl FromRaw for EntryPatch {
    fn from_raw(raw: &RawInput) -> Result<Self, ValidationErrors> {
        parse_entry(raw, false)
    }
}

impl FromRaw for NewEntry {
    fn from_raw(raw: &RawInput) -> Result<Self, ValidationErrors> {
        let patch = parse_entry(raw, true)?;
        complete(patch).ok_or_else(|| {
            let mut errors = ValidationErrors::new();
            errors.push("body", "Entry is missing required fields");
            errors
        })
    }
}

/// Coerce, then check constraints on whatever parsed.
///
/// Constraints run even when some fields failed to parse, so a single
/// response lists every problem in the payload.
fn parse_entry(raw: &RawInput, required: bool) -> Result<EntryPatch, ValidationErrors> {
    let (mut parsed, mut errors) = coerce_fields(&ENTRY_FIELDS, raw, required);

    let duration = narrow(&mut errors, "duration", "Duration", parsed.integer("duration"));
    let year = narrow(&mut errors, "year", "Year", parsed.integer("year"));

    let patch = EntryPatch {
        title: parsed.text("title"),
        kind: parsed.kind("type"),
        director: parsed.text("director"),
        budget: parsed.decimal("budget"),
        location: parsed.text("location"),
        duration,
        year,
    };

    if let Err(violations) = patch.validate() {
        errors.absorb(&violations);
    }

    if let Some(year) = patch.year {
        let ceiling = max_year();
        if year > ceiling {
            errors.push("year", format!("Year must be {ceiling} or earlier"));
        }
    }

    errors.sort_by_table(&ENTRY_FIELDS);
    errors.into_result(|| patch)
}

fn narrow(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    value: Option<i64>,
) -> Option<i32> {
    let value = value?;
    match i32::try_from(value) {
        Ok(v) => Some(v),
        Err(_) => {
            errors.push(field, format!("{label} is out of range"));
            None
        }
    }
}

fn complete(patch: EntryPatch) -> Option<NewEntry> {
    Some(NewEntry {
        title: patch.title?,
        kind: patch.kind?,
        director: patch.director?,
        budget: patch.budget?,
        location: patch.location?,
        duration: patch.duration?,
        year: patch.year?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryKind;
    use serde_json::{json, Value};

    fn raw(value: Value) -> RawInput {
        value.as_object().cloned().unwrap()
    }

    fn inception() -> Value {
        json!({
            "title": "Inception",
            "type": "Movie",
            "director": "Christopher Nolan",
            "budget": 160000000,
            "location": "Los Angeles, USA",
            "duration": 148,
            "year": 2010
        })
    }

    fn fields(errors: &ValidationErrors) -> Vec<&str> {
        errors.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn valid_create_payload_parses() {
        let entry = NewEntry::from_raw(&raw(inception())).unwrap();
        assert_eq!(entry.title, "Inception");
        assert_eq!(entry.kind, EntryKind::Movie);
        assert_eq!(entry.budget, 160_000_000.0);
        assert_eq!(entry.duration, 148);
        assert_eq!(entry.year, 2010);
    }

    #[test]
    fn numeric_strings_are_coerced_on_create() {
        let mut payload = inception();
        payload["budget"] = json!("160000000.50");
        payload["duration"] = json!("148");
        payload["year"] = json!("2010");

        let entry = NewEntry::from_raw(&raw(payload)).unwrap();
        assert_eq!(entry.budget, 160_000_000.5);
        assert_eq!(entry.duration, 148);
        assert_eq!(entry.year, 2010);
    }

    #[test]
    fn empty_object_reports_every_field_as_required() {
        let errors = NewEntry::from_raw(&RawInput::new()).unwrap_err();
        assert_eq!(
            fields(&errors),
            ["title", "type", "director", "budget", "location", "duration", "year"]
        );
        assert!(errors.iter().all(|v| v.message.ends_with("is required")));
    }

    #[test]
    fn one_error_per_violated_field() {
        let mut payload = inception();
        payload["title"] = json!("");
        payload["budget"] = json!(-5);
        payload["year"] = json!(1700);

        let errors = NewEntry::from_raw(&raw(payload)).unwrap_err();
        assert_eq!(fields(&errors), ["title", "budget", "year"]);
    }

    #[test]
    fn parse_and_constraint_failures_are_reported_together() {
        let mut payload = inception();
        payload["budget"] = json!("a lot");
        payload["duration"] = json!(0);

        let errors = NewEntry::from_raw(&raw(payload)).unwrap_err();
        assert_eq!(fields(&errors), ["budget", "duration"]);
        assert_eq!(errors.iter().next().unwrap().message, "Budget must be a number");
    }

    #[test]
    fn invalid_type_is_rejected() {
        let mut payload = inception();
        payload["type"] = json!("Documentary");
        let errors = NewEntry::from_raw(&raw(payload)).unwrap_err();
        assert_eq!(fields(&errors), ["type"]);
    }

    #[test]
    fn year_ceiling_is_ten_years_ahead() {
        let mut payload = inception();
        payload["year"] = json!(max_year());
        assert!(NewEntry::from_raw(&raw(payload.clone())).is_ok());

        payload["year"] = json!(max_year() + 1);
        let errors = NewEntry::from_raw(&raw(payload)).unwrap_err();
        assert_eq!(fields(&errors), ["year"]);
    }

    #[test]
    fn year_floor_is_1800() {
        let mut payload = inception();
        payload["year"] = json!(1800);
        assert!(NewEntry::from_raw(&raw(payload.clone())).is_ok());

        payload["year"] = json!(1799);
        assert!(NewEntry::from_raw(&raw(payload)).is_err());
    }

    #[test]
    fn huge_duration_is_out_of_range() {
        let mut payload = inception();
        payload["duration"] = json!(10_000_000_000i64);
        let errors = NewEntry::from_raw(&raw(payload)).unwrap_err();
        assert_eq!(errors.iter().next().unwrap().message, "Duration is out of range");
    }

    #[test]
    fn update_accepts_partial_payload() {
        let patch = EntryPatch::from_raw(&raw(json!({"budget": 999}))).unwrap();
        assert_eq!(
            patch,
            EntryPatch {
                budget: Some(999.0),
                ..Default::default()
            }
        );
    }

    #[test]
    fn update_accepts_empty_payload() {
        let patch = EntryPatch::from_raw(&RawInput::new()).unwrap();
        assert_eq!(patch, EntryPatch::default());
    }

    #[test]
    fn update_applies_the_same_constraints() {
        let errors =
            EntryPatch::from_raw(&raw(json!({"title": "", "duration": "-3"}))).unwrap_err();
        assert_eq!(fields(&errors), ["title", "duration"]);
    }

    #[test]
    fn update_ignores_null_and_unknown_fields() {
        let patch =
            EntryPatch::from_raw(&raw(json!({"title": null, "id": "abc", "createdAt": 1})))
                .unwrap();
        assert_eq!(patch, EntryPatch::default());
    }
}
