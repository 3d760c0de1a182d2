//! Route definitions for actors.

use axum::routing::get;
use axum::Router;

use crate::handlers::actors;
use crate::state::AppState;

/// Routes mounted at `/actors`.
///
/// ```text
/// GET    /              -> list (?name= substring filter)
/// POST   /              -> create
/// GET    /{id}          -> get
/// PATCH  /{id}          -> update
/// DELETE /{id}          -> delete (?force=)
/// GET    /{id}/movies   -> movies of the actor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(actors::list).post(actors::create))
        .route(
            "/{id}",
            get(actors::get_by_id)
                .patch(actors::update)
                .delete(actors::delete),
        )
        .route("/{id}/movies", get(actors::movies_of_actor))
}
