//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. A paginated listing
//! that matches nothing returns an empty `data` array with status 200,
//! which keeps "valid but empty" distinguishable from the 400/404 of a
//! structurally invalid request.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
