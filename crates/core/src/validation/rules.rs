//! Field table and violation types.

use std::fmt;

use serde::Serialize;

/// How a raw field value is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON string.
    Text,
    /// One of the [`EntryKind`](crate::entry::EntryKind) wire names.
    EntryKind,
    /// A finite number, or a string holding one. Rounded to cents.
    Decimal,
    /// A whole number, or a string holding one.
    Integer,
}

/// One row of a declarative field table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Wire name of the field.
    pub name: &'static str,
    /// Human-readable name used in messages.
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Every violation found while validating one input, in field-table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldViolation {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }

    pub fn append(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    /// Append the violations reported by a `validator` derive.
    ///
    /// Messages come from the `message = "..."` attribute on each rule.
    pub fn absorb(&mut self, errors: &validator::ValidationErrors) {
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                self.push(field.to_string(), message);
            }
        }
    }

    /// Stable-sort violations into the order fields appear in `fields`.
    ///
    /// `validator` reports through a `HashMap`, so its order is arbitrary.
    pub fn sort_by_table(&mut self, fields: &[FieldSpec]) {
        self.0.sort_by_key(|v| {
            fields
                .iter()
                .position(|spec| spec.name == v.field)
                .unwrap_or(usize::MAX)
        });
    }

    /// `Ok(value)` when no violations were collected.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", violation.field, violation.message)?;
            first = false;
        }
        Ok(())
    }
}
