//! Entry entity model.

use serde::Serialize;
use sqlx::FromRow;

use cinedex_core::types::{EntryId, Timestamp};

pub use cinedex_core::entry::{EntryKind, EntryPatch, NewEntry};

/// A row from the `entries` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    #[serde(rename = "type")]
    #[sqlx(try_from = "String")]
    pub kind: EntryKind,
    pub director: String,
    /// Stored as `NUMERIC(15, 2)`, read back as `float8`.
    pub budget: f64,
    pub location: String,
    /// Runtime in minutes.
    pub duration: i32,
    pub year: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
