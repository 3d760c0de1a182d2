//! Genre entity model and DTOs.

use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `genres` table. Names are unique (`uq_genres_name`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new genre. Genres are created without associations;
/// movies attach themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGenre {
    pub name: String,
}

/// DTO for patching a genre. An absent name leaves the row unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGenre {
    pub name: Option<String>,
}
