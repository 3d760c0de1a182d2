//! Handlers for the `/actors` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinelog_core::catalog;
use cinelog_core::error::CoreError;
use cinelog_core::pagination::PageRequest;
use cinelog_core::types::DbId;
use cinelog_db::models::actor::{CreateActor, UpdateActor};
use cinelog_db::repositories::ActorRepo;

use crate::error::{AppError, AppResult};
use crate::query::{ActorListParams, ForceParams, PageParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/actors
///
/// Create an actor. Actors start with no movie associations; movies
/// attach themselves on their own create/patch path.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateActor>,
) -> AppResult<impl IntoResponse> {
    catalog::validate_name(&input.name)?;
    catalog::validate_birth_date(input.birth_date)?;

    let actor = ActorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: actor })))
}

/// GET /api/v1/actors?name=&page=&size=
///
/// List actors, optionally filtered by case-insensitive name substring.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ActorListParams>,
) -> AppResult<impl IntoResponse> {
    let page = PageRequest::new(params.page, params.size)?;
    let actors = ActorRepo::list(&state.pool, params.name.as_deref(), &page).await?;
    Ok(Json(DataResponse { data: actors }))
}

/// GET /api/v1/actors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let actor = ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found_id("Actor", id)))?;
    Ok(Json(DataResponse { data: actor }))
}

/// PATCH /api/v1/actors/{id}
///
/// Partial update: only supplied fields change.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateActor>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        catalog::validate_name(name)?;
    }
    if let Some(birth_date) = input.birth_date {
        catalog::validate_birth_date(birth_date)?;
    }

    let actor = ActorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found_id("Actor", id)))?;
    Ok(Json(DataResponse { data: actor }))
}

/// DELETE /api/v1/actors/{id}?force=false
///
/// Guarded by default: 409 when any movie still references the actor.
/// With `force=true` the movie-side join rows are removed first.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ForceParams>,
) -> AppResult<impl IntoResponse> {
    ActorRepo::delete(&state.pool, id, params.force).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/actors/{id}/movies?page=&size=
///
/// List the movies an actor appears in. 404 when the actor does not
/// exist; an actor with no movies yields an empty page.
pub async fn movies_of_actor(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = params.to_page_request()?;
    let movies = ActorRepo::movies_of_actor(&state.pool, id, &page).await?;
    Ok(Json(DataResponse { data: movies }))
}
