//! Movie entity model and DTOs.
//!
//! The movie is the owning side of both associations: its create DTO takes
//! id lists, its patch DTO takes name lists, and [`MovieDetail`] is the
//! read shape with both sets resolved.

use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::actor::Actor;
use crate::models::genre::Genre;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub release_year: i32,
    pub duration_minutes: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A movie together with its resolved association sets.
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    pub genres: Vec<Genre>,
    pub actors: Vec<Actor>,
}

/// DTO for creating a new movie.
///
/// Association ids are resolved before anything is persisted; one unknown
/// id aborts the whole insert. An omitted list means no associations of
/// that kind.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub release_year: i32,
    pub duration_minutes: i32,
    pub genre_ids: Option<Vec<DbId>>,
    pub actor_ids: Option<Vec<DbId>>,
}

/// DTO for patching a movie.
///
/// Scalars follow absent-means-unchanged. Association name lists replace
/// the whole set: absent leaves the set untouched, empty clears it,
/// non-empty resolves every name (first miss aborts the patch) and swaps
/// the set.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub release_year: Option<i32>,
    pub duration_minutes: Option<i32>,
    pub genre_names: Option<Vec<String>>,
    pub actor_names: Option<Vec<String>>,
}
