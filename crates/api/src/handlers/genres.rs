//! Handlers for the `/genres` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinelog_core::catalog;
use cinelog_core::error::CoreError;
use cinelog_core::types::DbId;
use cinelog_db::models::genre::{CreateGenre, UpdateGenre};
use cinelog_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::query::{ForceParams, PageParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/genres
///
/// Create a genre. Duplicate names violate `uq_genres_name` and map to 409.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGenre>,
) -> AppResult<impl IntoResponse> {
    catalog::validate_name(&input.name)?;

    let genre = GenreRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: genre })))
}

/// GET /api/v1/genres?page=&size=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = params.to_page_request()?;
    let genres = GenreRepo::list(&state.pool, &page).await?;
    Ok(Json(DataResponse { data: genres }))
}

/// GET /api/v1/genres/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found_id("Genre", id)))?;
    Ok(Json(DataResponse { data: genre }))
}

/// PATCH /api/v1/genres/{id}
///
/// Partial update: only supplied fields change.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGenre>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        catalog::validate_name(name)?;
    }

    let genre = GenreRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found_id("Genre", id)))?;
    Ok(Json(DataResponse { data: genre }))
}

/// DELETE /api/v1/genres/{id}?force=false
///
/// Guarded by default: 409 when any movie still references the genre.
/// With `force=true` the movie-side join rows are removed first.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ForceParams>,
) -> AppResult<impl IntoResponse> {
    GenreRepo::delete(&state.pool, id, params.force).await?;
    Ok(StatusCode::NO_CONTENT)
}
