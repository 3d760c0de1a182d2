//! Cross-cutting error-shape tests: every failure surfaces as the JSON
//! `{error, code}` envelope with the right status.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_route_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/nonsense").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_not_found_body_names_the_entity_and_key(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/genres/12345").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Genre with id 12345 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_pagination_rejected_on_every_listing(pool: PgPool) {
    for uri in [
        "/api/v1/movies?page=-1",
        "/api/v1/movies?size=0",
        "/api/v1/actors?page=-1",
        "/api/v1/genres?size=-3",
        "/api/v1/movies/search?title=x&page=-1",
    ] {
        let response = get(common::build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
        assert_eq!(body_json(response).await["code"], "INVALID_PAGINATION", "uri: {uri}");
    }
}
