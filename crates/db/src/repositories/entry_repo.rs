//! Repository for the `entries` table.

use sqlx::PgPool;
use uuid::Uuid;

use cinedex_core::pagination::{PageRequest, Paginated};
use cinedex_core::types::EntryId;

use crate::models::entry::{Entry, EntryPatch, NewEntry};

/// Column list shared across queries. `budget` is cast so it decodes as `f64`.
const COLUMNS: &str = "id, title, kind, director, budget::float8 AS budget, location, \
     duration, year, created_at, updated_at";

/// Newest first; `id` breaks ties between rows created in the same instant.
const ORDER: &str = "ORDER BY created_at DESC, id DESC";

/// Provides CRUD and search operations for entries.
pub struct EntryRepo;

impl EntryRepo {
    /// Insert a new entry, returning the stored row with its generated id and timestamps.
    pub async fn create(pool: &PgPool, input: &NewEntry) -> Result<Entry, sqlx::Error> {
        let query = format!(
            "INSERT INTO entries (id, title, kind, director, budget, location, duration, year)
             VALUES ($1, $2, $3, $4, $5::numeric, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(Uuid::now_v7())
            .bind(&input.title)
            .bind(input.kind.as_str())
            .bind(&input.director)
            .bind(input.budget)
            .bind(&input.location)
            .bind(input.duration)
            .bind(input.year)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by id.
    pub async fn find_by_id(pool: &PgPool, id: EntryId) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entries WHERE id = $1");
        sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of all entries, newest first, with the total entry count.
    pub async fn list(pool: &PgPool, page: PageRequest) -> Result<Paginated<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entries {ORDER} LIMIT $1 OFFSET $2");
        let items = sqlx::query_as::<_, Entry>(&query)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM entries")
            .fetch_one(pool)
            .await?;

        Ok(Paginated { items, total })
    }

    /// One page of entries whose title contains `title` (case-insensitive),
    /// newest first, with the number of matching entries.
    ///
    /// `%`, `_` and `\` in `title` match literally.
    pub async fn search(
        pool: &PgPool,
        title: &str,
        page: PageRequest,
    ) -> Result<Paginated<Entry>, sqlx::Error> {
        let pattern = escape_like(title);

        let query = format!(
            "SELECT {COLUMNS} FROM entries \
             WHERE title ILIKE '%' || $1 || '%' \
             {ORDER} LIMIT $2 OFFSET $3"
        );
        let items = sqlx::query_as::<_, Entry>(&query)
            .bind(&pattern)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM entries WHERE title ILIKE '%' || $1 || '%'")
                .bind(&pattern)
                .fetch_one(pool)
                .await?;

        Ok(Paginated { items, total })
    }

    /// Update an entry. Only `Some` fields in `input` are applied; `updated_at`
    /// is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntryId,
        input: &EntryPatch,
    ) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!(
            "UPDATE entries SET
                title = COALESCE($2, title),
                kind = COALESCE($3, kind),
                director = COALESCE($4, director),
                budget = COALESCE($5::numeric, budget),
                location = COALESCE($6, location),
                duration = COALESCE($7, duration),
                year = COALESCE($8, year),
                updated_at = GREATEST(NOW(), updated_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.kind.map(|k| k.as_str()))
            .bind(input.director.as_deref())
            .bind(input.budget)
            .bind(input.location.as_deref())
            .bind(input.duration)
            .bind(input.year)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: EntryId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape `LIKE` metacharacters so user input is matched literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
