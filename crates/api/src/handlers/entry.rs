//! Handlers for the `/entries` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::pagination::{PageMeta, PageRequest};
use cinedex_core::types::EntryId;
use cinedex_core::validation::SearchQuery;
use cinedex_db::models::entry::{Entry, EntryPatch, NewEntry};
use cinedex_db::repositories::EntryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::validated::{ValidatedJson, ValidatedQuery};
use crate::response::ApiResponse;
use crate::state::AppState;

const ENTITY: &str = "Entry";

/// Ids that are not UUIDs cannot name an entry, so they are a plain 404.
fn parse_id(raw: &str) -> AppResult<EntryId> {
    EntryId::parse_str(raw).map_err(|_| not_found())
}

fn not_found() -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY })
}

/// POST /api/entries
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewEntry>,
) -> AppResult<(StatusCode, Json<ApiResponse<Entry>>)> {
    let entry = EntryRepo::create(&state.pool, &input).await?;
    tracing::info!(id = %entry.id, title = %entry.title, "Entry created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Entry created successfully", entry)),
    ))
}

/// GET /api/entries?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    ValidatedQuery(page): ValidatedQuery<PageRequest>,
) -> AppResult<Json<ApiResponse<Vec<Entry>>>> {
    let result = EntryRepo::list(&state.pool, page).await?;
    Ok(Json(ApiResponse::paginated(
        "Entries retrieved successfully",
        result.items,
        PageMeta::new(page, result.total),
    )))
}

/// GET /api/entries/search?title=&page=&limit=
pub async fn search(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> AppResult<Json<ApiResponse<Vec<Entry>>>> {
    let result = EntryRepo::search(&state.pool, &query.title, query.page).await?;
    Ok(Json(ApiResponse::paginated(
        "Search results retrieved successfully",
        result.items,
        PageMeta::new(query.page, result.total),
    )))
}

/// GET /api/entries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Entry>>> {
    let id = parse_id(&id)?;
    let entry = EntryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(ApiResponse::ok("Entry retrieved successfully", entry)))
}

/// PUT /api/entries/{id}
///
/// Fields omitted from the body (or sent as `null`) keep their stored value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<EntryPatch>,
) -> AppResult<Json<ApiResponse<Entry>>> {
    let id = parse_id(&id)?;
    let entry = EntryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(not_found)?;
    tracing::info!(%id, "Entry updated");
    Ok(Json(ApiResponse::ok("Entry updated successfully", entry)))
}

/// DELETE /api/entries/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse>> {
    let id = parse_id(&id)?;
    if !EntryRepo::delete(&state.pool, id).await? {
        return Err(not_found());
    }
    tracing::info!(%id, "Entry deleted");
    Ok(Json(ApiResponse::message("Entry deleted successfully")))
}
