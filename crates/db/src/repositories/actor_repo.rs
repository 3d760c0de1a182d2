//! Repository for the `actors` table.
//!
//! Actors never own join rows; their association with movies lives in
//! `movie_actors` on the movie side. Deleting an actor therefore edits
//! that table only.

use cinelog_core::error::CoreError;
use cinelog_core::pagination::PageRequest;
use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::actor::{Actor, CreateActor, UpdateActor};
use crate::models::movie::Movie;
use crate::RepoError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, birth_date, created_at, updated_at";

const MOVIE_COLUMNS: &str =
    "m.id, m.title, m.release_year, m.duration_minutes, m.created_at, m.updated_at";

/// Provides CRUD operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateActor) -> Result<Actor, sqlx::Error> {
        let query = format!(
            "INSERT INTO actors (name, birth_date) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(&input.name)
            .bind(input.birth_date)
            .fetch_one(pool)
            .await
    }

    /// Find an actor by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE id = $1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM actors WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List actors, optionally filtered by a case-insensitive name
    /// substring. Ordered by id for stable paging.
    pub async fn list(
        pool: &PgPool,
        name: Option<&str>,
        page: &PageRequest,
    ) -> Result<Vec<Actor>, sqlx::Error> {
        match name {
            Some(needle) => {
                let query = paged(
                    format!("SELECT {COLUMNS} FROM actors WHERE name ILIKE $1 ORDER BY id"),
                    page,
                );
                sqlx::query_as::<_, Actor>(&query)
                    .bind(format!("%{needle}%"))
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = paged(format!("SELECT {COLUMNS} FROM actors ORDER BY id"), page);
                sqlx::query_as::<_, Actor>(&query).fetch_all(pool).await
            }
        }
    }

    /// List the movies an actor appears in, paginated.
    ///
    /// Fails with `NotFound` when the actor does not exist; an actor with
    /// no movies yields an empty page.
    pub async fn movies_of_actor(
        pool: &PgPool,
        actor_id: DbId,
        page: &PageRequest,
    ) -> Result<Vec<Movie>, RepoError> {
        if !Self::exists(pool, actor_id).await? {
            return Err(CoreError::not_found_id("Actor", actor_id).into());
        }

        let query = paged(
            format!(
                "SELECT {MOVIE_COLUMNS} FROM movies m \
                 JOIN movie_actors ma ON ma.movie_id = m.id \
                 WHERE ma.actor_id = $1 \
                 ORDER BY m.id"
            ),
            page,
        );
        let movies = sqlx::query_as::<_, Movie>(&query)
            .bind(actor_id)
            .fetch_all(pool)
            .await?;
        Ok(movies)
    }

    /// Patch an actor. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActor,
    ) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!(
            "UPDATE actors SET \
                name = COALESCE($2, name), \
                birth_date = COALESCE($3, birth_date), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.birth_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete an actor.
    ///
    /// Guarded (`force = false`): fails with `RelationshipConflict` when
    /// any movie still references the actor. Forced: removes the actor's
    /// join rows from the movie-side table, then the actor, in one
    /// transaction.
    pub async fn delete(pool: &PgPool, id: DbId, force: bool) -> Result<(), RepoError> {
        let mut tx = pool.begin().await?;

        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM actors WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        if !exists {
            return Err(CoreError::not_found_id("Actor", id).into());
        }

        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM movie_actors WHERE actor_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        if count > 0 {
            if !force {
                return Err(CoreError::RelationshipConflict {
                    entity: "Actor",
                    id,
                    count,
                }
                .into());
            }
            tracing::debug!(actor_id = id, associations = count, "Force-detaching actor before delete");
            sqlx::query("DELETE FROM movie_actors WHERE actor_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query("DELETE FROM actors WHERE id = $1")
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
