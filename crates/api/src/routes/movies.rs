//! Route definitions for movies.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /              -> list (filters: genre, year, actor)
/// POST   /              -> create
/// GET    /search        -> search by title substring
/// GET    /{id}          -> get (with associations)
/// PATCH  /{id}          -> update
/// DELETE /{id}          -> delete (?force=)
/// GET    /{id}/actors   -> actors of the movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list).post(movies::create))
        .route("/search", get(movies::search))
        .route(
            "/{id}",
            get(movies::get_by_id)
                .patch(movies::update)
                .delete(movies::delete),
        )
        .route("/{id}/actors", get(movies::actors_of_movie))
}
