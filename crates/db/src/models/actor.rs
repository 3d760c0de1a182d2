//! Actor entity model and DTOs.

use chrono::NaiveDate;
use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `actors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    /// Calendar date, no timezone; must lie in the past.
    pub birth_date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new actor. Actors are created without associations;
/// movies attach themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActor {
    pub name: String,
    pub birth_date: NaiveDate,
}

/// DTO for patching an actor. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateActor {
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
}
