//! Parse stage: raw JSON values to typed field values.

use std::collections::HashMap;

use serde_json::Value;

use super::rules::{FieldKind, FieldSpec, ValidationErrors};
use super::RawInput;
use crate::entry::EntryKind;

/// A successfully parsed field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Kind(EntryKind),
    Decimal(f64),
    Integer(i64),
}

/// Fields that parsed, keyed by wire name.
#[derive(Debug, Default)]
pub struct ParsedFields(HashMap<&'static str, FieldValue>);

impl ParsedFields {
    pub fn text(&mut self, name: &str) -> Option<String> {
        match self.0.remove(name) {
            Some(FieldValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn kind(&mut self, name: &str) -> Option<EntryKind> {
        match self.0.remove(name) {
            Some(FieldValue::Kind(k)) => Some(k),
            _ => None,
        }
    }

    pub fn decimal(&mut self, name: &str) -> Option<f64> {
        match self.0.remove(name) {
            Some(FieldValue::Decimal(n)) => Some(n),
            _ => None,
        }
    }

    pub fn integer(&mut self, name: &str) -> Option<i64> {
        match self.0.remove(name) {
            Some(FieldValue::Integer(n)) => Some(n),
            _ => None,
        }
    }
}

/// Parse every field in `fields` out of `raw`.
///
/// Absent and `null` fields are skipped, or reported as required when
/// `required` is set. Keys not in the table are ignored.
pub fn coerce_fields(
    fields: &[FieldSpec],
    raw: &RawInput,
    required: bool,
) -> (ParsedFields, ValidationErrors) {
    let mut parsed = ParsedFields::default();
    let mut errors = ValidationErrors::new();

    for spec in fields {
        match raw.get(spec.name) {
            None | Some(Value::Null) => {
                if required {
                    errors.push(spec.name, format!("{} is required", spec.label));
                }
            }
            Some(value) => match coerce(spec, value) {
                Ok(v) => {
                    parsed.0.insert(spec.name, v);
                }
                Err(message) => errors.push(spec.name, message),
            },
        }
    }

    (parsed, errors)
}

/// Parse one value according to its field spec.
pub fn coerce(spec: &FieldSpec, value: &Value) -> Result<FieldValue, String> {
    match spec.kind {
        FieldKind::Text => match value {
            Value::String(s) => Ok(FieldValue::Text(s.clone())),
            _ => Err(format!("{} must be a string", spec.label)),
        },
        FieldKind::EntryKind => value
            .as_str()
            .and_then(EntryKind::parse)
            .map(FieldValue::Kind)
            .ok_or_else(|| format!("{} must be either 'Movie' or 'TV Show'", spec.label)),
        FieldKind::Decimal => {
            let n = number(value).ok_or_else(|| format!("{} must be a number", spec.label))?;
            Ok(FieldValue::Decimal((n * 100.0).round() / 100.0))
        }
        FieldKind::Integer => {
            let n = number(value).ok_or_else(|| format!("{} must be a number", spec.label))?;
            if n.fract() != 0.0 {
                return Err(format!("{} must be an integer", spec.label));
            }
            if n < i64::MIN as f64 || n >= i64::MAX as f64 {
                return Err(format!("{} is out of range", spec.label));
            }
            Ok(FieldValue::Integer(n as i64))
        }
    }
}

/// A finite number from a JSON number or a numeric string.
fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}
