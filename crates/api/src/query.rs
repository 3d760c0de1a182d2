//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication. Pagination converts into a
//! validated [`PageRequest`] before any query runs.

use cinelog_core::error::CoreError;
use cinelog_core::pagination::PageRequest;
use cinelog_core::types::DbId;
use serde::Deserialize;

/// Generic pagination parameters (`?page=&size=`).
///
/// Zero-based page; an omitted size means the whole result set.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: i64,
    pub size: Option<i64>,
}

impl PageParams {
    pub fn to_page_request(&self) -> Result<PageRequest, CoreError> {
        PageRequest::new(self.page, self.size)
    }
}

/// Query parameters for `GET /movies`.
///
/// The filters are mutually exclusive; when several are supplied the
/// precedence is genre, then year, then actor.
#[derive(Debug, Deserialize)]
pub struct MovieListParams {
    pub genre: Option<DbId>,
    pub year: Option<i32>,
    pub actor: Option<DbId>,
    #[serde(default)]
    pub page: i64,
    pub size: Option<i64>,
}

/// Query parameters for `GET /movies/search`.
#[derive(Debug, Deserialize)]
pub struct TitleSearchParams {
    pub title: String,
    #[serde(default)]
    pub page: i64,
    pub size: Option<i64>,
}

/// Query parameters for `GET /actors` (optional name substring filter).
#[derive(Debug, Deserialize)]
pub struct ActorListParams {
    pub name: Option<String>,
    #[serde(default)]
    pub page: i64,
    pub size: Option<i64>,
}

/// `?force=` flag for delete endpoints. Defaults to a guarded delete.
#[derive(Debug, Deserialize)]
pub struct ForceParams {
    #[serde(default)]
    pub force: bool,
}
