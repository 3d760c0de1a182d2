//! HTTP-level integration tests for the `/genres` resource, including the
//! end-to-end guarded/forced delete scenario.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use sqlx::PgPool;

async fn create_genre(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/genres",
        serde_json::json!({"name": name}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_list_genres(pool: PgPool) {
    create_genre(&pool, "Drama").await;
    create_genre(&pool, "Comedy").await;

    let response = get(common::build_test_app(pool), "/api/v1/genres").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_genre_name_returns_409(pool: PgPool) {
    create_genre(&pool, "Drama").await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/genres",
        serde_json::json!({"name": "Drama"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rename_genre(pool: PgPool) {
    let id = create_genre(&pool, "Dramma").await;

    let response = patch_json(
        common::build_test_app(pool),
        &format!("/api/v1/genres/{id}"),
        serde_json::json!({"name": "Drama"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "Drama");
}

/// The canonical relationship-integrity scenario: a guarded delete of a
/// referenced genre is rejected with the blocking count, the forced
/// delete succeeds, and the movie's genre set comes back empty.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_guarded_then_forced_genre_delete_scenario(pool: PgPool) {
    let drama = create_genre(&pool, "Drama").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/actors",
        serde_json::json!({"name": "Jane Doe", "birth_date": "1980-01-01"}),
    )
    .await;
    let jane = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/movies",
        serde_json::json!({
            "title": "Example",
            "release_year": 2000,
            "duration_minutes": 120,
            "genre_ids": [drama],
            "actor_ids": [jane],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let movie_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    // Guarded delete: blocked, names the single blocking association.
    let response = delete(common::build_test_app(pool.clone()), &format!("/api/v1/genres/{drama}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "RELATIONSHIP_CONFLICT");
    assert!(json["error"].as_str().unwrap().contains("1 associated"));

    // Forced delete: succeeds.
    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/genres/{drama}?force=true"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The movie survives with an empty genre set and its actor intact.
    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/movies/{movie_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["genres"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["actors"][0]["name"], "Jane Doe");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_genre_returns_404(pool: PgPool) {
    let response = delete(common::build_test_app(pool), "/api/v1/genres/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
