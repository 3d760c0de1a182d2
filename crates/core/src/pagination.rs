//! Offset pagination shared by every listing operation.
//!
//! Pages are zero-based. A request without a size means "the whole result
//! set" rather than a default page size; a supplied size must be positive.
//! Validation happens here, before any query executes, so a structurally
//! invalid request never reaches the store.

use crate::error::CoreError;

/// A validated page request.
///
/// Construct via [`PageRequest::new`], which rejects a negative page index
/// or a non-positive size with [`CoreError::InvalidPagination`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    size: Option<i64>,
}

impl PageRequest {
    pub fn new(page: i64, size: Option<i64>) -> Result<Self, CoreError> {
        if page < 0 {
            return Err(CoreError::InvalidPagination(format!(
                "page must be non-negative, got {page}"
            )));
        }
        if let Some(size) = size {
            if size <= 0 {
                return Err(CoreError::InvalidPagination(format!(
                    "size must be positive, got {size}"
                )));
            }
        }
        Ok(Self { page, size })
    }

    /// An unpaged request: page 0, no size limit.
    pub fn unpaged() -> Self {
        Self {
            page: 0,
            size: None,
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> Option<i64> {
        self.size
    }

    /// The `LIMIT`/`OFFSET` pair for this request, or `None` when the
    /// request is unpaged and the query should run without either clause.
    pub fn limit_offset(&self) -> Option<(i64, i64)> {
        self.size.map(|size| (size, self.page * size))
    }
}
