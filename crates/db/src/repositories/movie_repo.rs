//! Repository for the `movies` table and its association join tables.
//!
//! The movie side owns `movie_genres` and `movie_actors`; "movies of an
//! actor/genre" is always answered by querying the join table, so the two
//! directions of an association cannot diverge. Each join pair exists at
//! most once (composite primary key).

use cinelog_core::error::CoreError;
use cinelog_core::pagination::PageRequest;
use cinelog_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::actor::Actor;
use crate::models::genre::Genre;
use crate::models::movie::{CreateMovie, Movie, MovieDetail, UpdateMovie};
use crate::RepoError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, release_year, duration_minutes, created_at, updated_at";

// Qualified variants for joins against the join tables, whose own
// created_at/updated_at columns would otherwise be ambiguous.
const MOVIE_COLUMNS: &str =
    "m.id, m.title, m.release_year, m.duration_minutes, m.created_at, m.updated_at";
const GENRE_COLUMNS: &str = "g.id, g.name, g.created_at, g.updated_at";
const ACTOR_COLUMNS: &str = "a.id, a.name, a.birth_date, a.created_at, a.updated_at";

/// Provides CRUD and association operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie together with its initial associations.
    ///
    /// Resolution of all supplied genre/actor ids and the insert run in
    /// one transaction: an unknown id fails the whole creation with
    /// `NotFound` and nothing is persisted.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<MovieDetail, RepoError> {
        let mut tx = pool.begin().await?;

        let genres =
            resolve_genres_by_id(&mut tx, input.genre_ids.as_deref().unwrap_or_default()).await?;
        let actors =
            resolve_actors_by_id(&mut tx, input.actor_ids.as_deref().unwrap_or_default()).await?;

        let query = format!(
            "INSERT INTO movies (title, release_year, duration_minutes) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.release_year)
            .bind(input.duration_minutes)
            .fetch_one(&mut *tx)
            .await?;

        attach_genres(&mut tx, movie.id, &genres).await?;
        attach_actors(&mut tx, movie.id, &actors).await?;

        tx.commit().await?;
        Ok(MovieDetail {
            movie,
            genres,
            actors,
        })
    }

    /// Find a movie row by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a movie with both association sets resolved.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<MovieDetail>, sqlx::Error> {
        let Some(movie) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let genres = genres_of(pool, id).await?;
        let actors = actors_of(pool, id).await?;
        Ok(Some(MovieDetail {
            movie,
            genres,
            actors,
        }))
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List movies, ordered by id so consecutive pages never overlap or
    /// skip rows.
    pub async fn list(pool: &PgPool, page: &PageRequest) -> Result<Vec<Movie>, sqlx::Error> {
        let query = paged(format!("SELECT {COLUMNS} FROM movies ORDER BY id"), page);
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// List movies associated with the given genre.
    ///
    /// Fails with `NotFound` when the genre itself does not exist; a genre
    /// with no movies yields an empty page.
    pub async fn list_by_genre(
        pool: &PgPool,
        genre_id: DbId,
        page: &PageRequest,
    ) -> Result<Vec<Movie>, RepoError> {
        let genre_exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM genres WHERE id = $1)")
            .bind(genre_id)
            .fetch_one(pool)
            .await?;
        if !genre_exists {
            return Err(CoreError::not_found_id("Genre", genre_id).into());
        }

        let query = paged(
            format!(
                "SELECT {MOVIE_COLUMNS} FROM movies m \
                 JOIN movie_genres mg ON mg.movie_id = m.id \
                 WHERE mg.genre_id = $1 \
                 ORDER BY m.id"
            ),
            page,
        );
        let movies = sqlx::query_as::<_, Movie>(&query)
            .bind(genre_id)
            .fetch_all(pool)
            .await?;
        Ok(movies)
    }

    /// List movies released in the given year. A year with no movies is a
    /// valid, empty result.
    pub async fn list_by_year(
        pool: &PgPool,
        release_year: i32,
        page: &PageRequest,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = paged(
            format!("SELECT {COLUMNS} FROM movies WHERE release_year = $1 ORDER BY id"),
            page,
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(release_year)
            .fetch_all(pool)
            .await
    }

    /// List movies featuring the given actor.
    ///
    /// Fails with `NotFound` when the actor does not exist.
    pub async fn list_by_actor(
        pool: &PgPool,
        actor_id: DbId,
        page: &PageRequest,
    ) -> Result<Vec<Movie>, RepoError> {
        let actor_exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM actors WHERE id = $1)")
            .bind(actor_id)
            .fetch_one(pool)
            .await?;
        if !actor_exists {
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

    /// Case-insensitive substring search on title. The needle must be
    /// validated as non-blank by the caller; no movies matching is a
    /// valid, empty result.
    pub async fn search_by_title(
        pool: &PgPool,
        needle: &str,
        page: &PageRequest,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = paged(
            format!("SELECT {COLUMNS} FROM movies WHERE title ILIKE $1 ORDER BY id"),
            page,
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(format!("%{needle}%"))
            .fetch_all(pool)
            .await
    }

    /// List the actors of a movie, paginated.
    ///
    /// Fails with `NotFound` when the movie does not exist.
    pub async fn actors_of_movie(
        pool: &PgPool,
        movie_id: DbId,
        page: &PageRequest,
    ) -> Result<Vec<Actor>, RepoError> {
        if !Self::exists(pool, movie_id).await? {
            return Err(CoreError::not_found_id("Movie", movie_id).into());
        }

        let query = paged(
            format!(
                "SELECT {ACTOR_COLUMNS} FROM actors a \
                 JOIN movie_actors ma ON ma.actor_id = a.id \
                 WHERE ma.movie_id = $1 \
                 ORDER BY a.id"
            ),
            page,
        );
        let actors = sqlx::query_as::<_, Actor>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await?;
        Ok(actors)
    }

    /// Patch a movie. Scalar fields follow absent-means-unchanged via
    /// `COALESCE`; a supplied genre/actor name list replaces that whole
    /// association set (empty list clears it), resolving every name first.
    ///
    /// Returns `None` if no row with the given `id` exists. Resolution and
    /// mutation share one transaction, so a `NotFound` name rolls back the
    /// scalar patch too.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<MovieDetail>, RepoError> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE movies SET \
                title = COALESCE($2, title), \
                release_year = COALESCE($3, release_year), \
                duration_minutes = COALESCE($4, duration_minutes), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let Some(movie) = sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.release_year)
            .bind(input.duration_minutes)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(names) = &input.genre_names {
            let genres = resolve_genres_by_name(&mut tx, names).await?;
            sqlx::query("DELETE FROM movie_genres WHERE movie_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            attach_genres(&mut tx, id, &genres).await?;
        }

        if let Some(names) = &input.actor_names {
            let actors = resolve_actors_by_name(&mut tx, names).await?;
            sqlx::query("DELETE FROM movie_actors WHERE movie_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            attach_actors(&mut tx, id, &actors).await?;
        }

        let genres = genres_of(&mut *tx, id).await?;
        let actors = actors_of(&mut *tx, id).await?;

        tx.commit().await?;
        Ok(Some(MovieDetail {
            movie,
            genres,
            actors,
        }))
    }

    /// Delete a movie.
    ///
    /// Guarded (`force = false`): fails with `RelationshipConflict` when
    /// any join fact references the movie, counting both kinds.
    /// Forced: detaches both association kinds and removes the row, all in
    /// one transaction.
    pub async fn delete(pool: &PgPool, id: DbId, force: bool) -> Result<(), RepoError> {
        let mut tx = pool.begin().await?;

        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        if !exists {
            return Err(CoreError::not_found_id("Movie", id).into());
        }

        let count: i64 = sqlx::query_scalar(
            "SELECT (SELECT COUNT(*) FROM movie_genres WHERE movie_id = $1) \
                  + (SELECT COUNT(*) FROM movie_actors WHERE movie_id = $1)",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        if count > 0 {
            if !force {
                return Err(CoreError::RelationshipConflict {
                    entity: "Movie",
                    id,
                    count,
                }
                .into());
            }
            tracing::debug!(movie_id = id, associations = count, "Force-detaching movie before delete");
            sqlx::query("DELETE FROM movie_genres WHERE movie_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            sqlx::query("DELETE FROM movie_actors WHERE movie_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

/// Append `LIMIT`/`OFFSET` when the request is paged; leave the query
/// unrestricted otherwise. Values come from a validated `PageRequest`.
fn paged(base: String, page: &PageRequest) -> String {
    match page.limit_offset() {
        Some((limit, offset)) => format!("{base} LIMIT {limit} OFFSET {offset}"),
        None => base,
    }
}

/// Genres of a movie, ordered by id.
async fn genres_of<'e, E>(executor: E, movie_id: DbId) -> Result<Vec<Genre>, sqlx::Error>
where
    E: sqlx::PgExecutor<'e>,
{
    let query = format!(
        "SELECT {GENRE_COLUMNS} FROM genres g \
         JOIN movie_genres mg ON mg.genre_id = g.id \
         WHERE mg.movie_id = $1 \
         ORDER BY g.id"
    );
    sqlx::query_as::<_, Genre>(&query)
        .bind(movie_id)
        .fetch_all(executor)
        .await
}

/// Actors of a movie, ordered by id.
async fn actors_of<'e, E>(executor: E, movie_id: DbId) -> Result<Vec<Actor>, sqlx::Error>
where
    E: sqlx::PgExecutor<'e>,
{
    let query = format!(
        "SELECT {ACTOR_COLUMNS} FROM actors a \
         JOIN movie_actors ma ON ma.actor_id = a.id \
         WHERE ma.movie_id = $1 \
         ORDER BY a.id"
    );
    sqlx::query_as::<_, Actor>(&query)
        .bind(movie_id)
        .fetch_all(executor)
        .await
}

/// Resolve genre ids to live rows. Duplicates collapse; the first id with
/// no matching row fails the whole operation with `NotFound`. Performs no
/// writes.
async fn resolve_genres_by_id(
    conn: &mut PgConnection,
    ids: &[DbId],
) -> Result<Vec<Genre>, RepoError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let rows: Vec<Genre> = sqlx::query_as(
        "SELECT id, name, created_at, updated_at FROM genres WHERE id = ANY($1) ORDER BY id",
    )
    .bind(ids)
    .fetch_all(&mut *conn)
    .await?;

    for id in ids {
        if !rows.iter().any(|g| g.id == *id) {
            return Err(CoreError::not_found_id("Genre", *id).into());
        }
    }
    Ok(rows)
}

/// Resolve actor ids to live rows; same contract as genre resolution.
async fn resolve_actors_by_id(
    conn: &mut PgConnection,
    ids: &[DbId],
) -> Result<Vec<Actor>, RepoError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let rows: Vec<Actor> = sqlx::query_as(
        "SELECT id, name, birth_date, created_at, updated_at FROM actors \
         WHERE id = ANY($1) ORDER BY id",
    )
    .bind(ids)
    .fetch_all(&mut *conn)
    .await?;

    for id in ids {
        if !rows.iter().any(|a| a.id == *id) {
            return Err(CoreError::not_found_id("Actor", *id).into());
        }
    }
    Ok(rows)
}

/// Resolve exact genre names to live rows. Genre names are unique, so a
/// name maps to at most one row; the first unmatched name fails the whole
/// operation with `NotFound`.
async fn resolve_genres_by_name(
    conn: &mut PgConnection,
    names: &[String],
) -> Result<Vec<Genre>, RepoError> {
    if names.is_empty() {
        return Ok(Vec::new());
    }
    let rows: Vec<Genre> = sqlx::query_as(
        "SELECT id, name, created_at, updated_at FROM genres WHERE name = ANY($1) ORDER BY id",
    )
    .bind(names)
    .fetch_all(&mut *conn)
    .await?;

    for name in names {
        if !rows.iter().any(|g| g.name == *name) {
            return Err(CoreError::not_found_name("Genre", name).into());
        }
    }
    Ok(rows)
}

/// Resolve exact actor names to live rows. Actor names are not unique;
/// each name resolves to its lowest-id match, deterministically.
async fn resolve_actors_by_name(
    conn: &mut PgConnection,
    names: &[String],
) -> Result<Vec<Actor>, RepoError> {
    if names.is_empty() {
        return Ok(Vec::new());
    }
    let rows: Vec<Actor> = sqlx::query_as(
        "SELECT DISTINCT ON (name) id, name, birth_date, created_at, updated_at \
         FROM actors WHERE name = ANY($1) \
         ORDER BY name, id",
    )
    .bind(names)
    .fetch_all(&mut *conn)
    .await?;

    for name in names {
        if !rows.iter().any(|a| a.name == *name) {
            return Err(CoreError::not_found_name("Actor", name).into());
        }
    }
    Ok(rows)
}

/// Record the movie->genre join facts. `ON CONFLICT DO NOTHING` collapses
/// duplicate pairs, keeping each join fact unique.
async fn attach_genres(
    conn: &mut PgConnection,
    movie_id: DbId,
    genres: &[Genre],
) -> Result<(), sqlx::Error> {
    for genre in genres {
        sqlx::query(
            "INSERT INTO movie_genres (movie_id, genre_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(movie_id)
        .bind(genre.id)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

async fn attach_actors(
    conn: &mut PgConnection,
    movie_id: DbId,
    actors: &[Actor],
) -> Result<(), sqlx::Error> {
    for actor in actors {
        sqlx::query(
            "INSERT INTO movie_actors (movie_id, actor_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(movie_id)
        .bind(actor.id)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}
