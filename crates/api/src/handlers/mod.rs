//! HTTP handlers, one module per resource.
//!
//! Handlers stay mechanical: validate fields, convert pagination, call a
//! repository, wrap the result in the response envelope. All relationship
//! semantics live in the repository layer.

pub mod actors;
pub mod genres;
pub mod movies;
