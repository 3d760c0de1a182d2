pub mod actors;
pub mod genres;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                     list (genre/year/actor filters), create
/// /movies/search              case-insensitive title substring search
/// /movies/{id}                get, patch, delete (?force=)
/// /movies/{id}/actors         actors of a movie (paged)
///
/// /actors                     list (?name= substring filter), create
/// /actors/{id}                get, patch, delete (?force=)
/// /actors/{id}/movies         movies of an actor (paged)
///
/// /genres                     list, create
/// /genres/{id}                get, patch, delete (?force=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movies::router())
        .nest("/actors", actors::router())
        .nest("/genres", genres::router())
}
