//! Handlers for the `/movies` resource.
//!
//! Movies are the owning side of both associations, so this module carries
//! the richest surface: filtered listing, title search, creation with
//! initial association ids, patching with name-resolved association
//! replacement, and guarded/forced deletion.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinelog_core::catalog;
use cinelog_core::error::CoreError;
use cinelog_core::pagination::PageRequest;
use cinelog_core::types::DbId;
use cinelog_db::models::movie::{CreateMovie, UpdateMovie};
use cinelog_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::query::{ForceParams, MovieListParams, PageParams, TitleSearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/movies
///
/// Create a movie with optional initial genre/actor id lists. One unknown
/// id fails the whole request with 404 and nothing is persisted.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    catalog::validate_title(&input.title)?;
    catalog::validate_duration(input.duration_minutes)?;

    let movie = MovieRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: movie })))
}

/// GET /api/v1/movies?genre=&year=&actor=&page=&size=
///
/// List movies, optionally filtered by related genre id, release year, or
/// related actor id (in that precedence). A filter naming a nonexistent
/// genre/actor yields 404; a valid filter matching nothing yields an empty
/// page.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<impl IntoResponse> {
    let page = PageRequest::new(params.page, params.size)?;

    let movies = if let Some(genre_id) = params.genre {
        MovieRepo::list_by_genre(&state.pool, genre_id, &page).await?
    } else if let Some(year) = params.year {
        MovieRepo::list_by_year(&state.pool, year, &page).await?
    } else if let Some(actor_id) = params.actor {
        MovieRepo::list_by_actor(&state.pool, actor_id, &page).await?
    } else {
        MovieRepo::list(&state.pool, &page).await?
    };

    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/search?title=&page=&size=
///
/// Case-insensitive substring search on title. A blank title is rejected
/// before any query runs.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<TitleSearchParams>,
) -> AppResult<impl IntoResponse> {
    catalog::validate_search_title(&params.title)?;
    let page = PageRequest::new(params.page, params.size)?;

    let movies = MovieRepo::search_by_title(&state.pool, params.title.trim(), &page).await?;
    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/{id}
///
/// Fetch a movie with its genre and actor sets resolved.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found_id("Movie", id)))?;
    Ok(Json(DataResponse { data: movie }))
}

/// PATCH /api/v1/movies/{id}
///
/// Partial update: absent scalar fields stay unchanged; a supplied
/// genre/actor name list replaces that association set (empty list clears
/// it). One unresolvable name fails the whole patch.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        catalog::validate_title(title)?;
    }
    if let Some(duration) = input.duration_minutes {
        catalog::validate_duration(duration)?;
    }

    let movie = MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found_id("Movie", id)))?;
    Ok(Json(DataResponse { data: movie }))
}

/// DELETE /api/v1/movies/{id}?force=false
///
/// Guarded by default: 409 when the movie still has associations. With
/// `force=true` the associations are detached first, atomically.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ForceParams>,
) -> AppResult<impl IntoResponse> {
    MovieRepo::delete(&state.pool, id, params.force).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/movies/{id}/actors?page=&size=
///
/// List the actors of a movie. 404 when the movie does not exist; a movie
/// with no actors yields an empty page.
pub async fn actors_of_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = params.to_page_request()?;
    let actors = MovieRepo::actors_of_movie(&state.pool, id, &page).await?;
    Ok(Json(DataResponse { data: actors }))
}
