//! Domain layer for the cinelog catalog service.
//!
//! Pure types and rules shared by the persistence and HTTP layers: shared
//! id/timestamp aliases, the error taxonomy, pagination, and field
//! validation. This crate never touches the database.

pub mod catalog;
pub mod error;
pub mod pagination;
pub mod types;
