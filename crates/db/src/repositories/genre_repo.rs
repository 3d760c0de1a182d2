//! Repository for the `genres` table.
//!
//! Like actors, genres never own join rows; deleting a genre edits the
//! movie-side `movie_genres` table only. Names are unique, enforced by
//! the `uq_genres_name` constraint.

use cinelog_core::error::CoreError;
use cinelog_core::pagination::PageRequest;
use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::{CreateGenre, Genre, UpdateGenre};
use crate::RepoError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre, returning the created row. A duplicate name
    /// violates `uq_genres_name` and surfaces as a database error.
    pub async fn create(pool: &PgPool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        let query = format!("INSERT INTO genres (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Genre>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a genre by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a genre by its exact name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE name = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM genres WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List genres, ordered by id for stable paging.
    pub async fn list(pool: &PgPool, page: &PageRequest) -> Result<Vec<Genre>, sqlx::Error> {
        let query = paged(format!("SELECT {COLUMNS} FROM genres ORDER BY id"), page);
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// Patch a genre. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGenre,
    ) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!(
            "UPDATE genres SET \
                name = COALESCE($2, name), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a genre.
    ///
    /// Guarded (`force = false`): fails with `RelationshipConflict` when
    /// any movie still references the genre. Forced: removes the genre's
    /// join rows from the movie-side table, then the genre, in one
    /// transaction.
    pub async fn delete(pool: &PgPool, id: DbId, force: bool) -> Result<(), RepoError> {
        let mut tx = pool.begin().await?;

        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM genres WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        if !exists {
            return Err(CoreError::not_found_id("Genre", id).into());
        }

        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM movie_genres WHERE genre_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        if count > 0 {
            if !force {
                return Err(CoreError::RelationshipConflict {
                    entity: "Genre",
                    id,
                    count,
                }
                .into());
            }
            tracing::debug!(genre_id = id, associations = count, "Force-detaching genre before delete");
            sqlx::query("DELETE FROM movie_genres WHERE genre_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

/// Append `LIMIT`/`OFFSET` when the request is paged.
fn paged(base: String, page: &PageRequest) -> String {
    match page.limit_offset() {
        Some((limit, offset)) => format!("{base} LIMIT {limit} OFFSET {offset}"),
        None => base,
    }
}
