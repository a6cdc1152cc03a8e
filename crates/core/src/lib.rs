//! Shared domain types for the Medley API service.
//!
//! This crate holds everything the `db` and `api` crates have in common:
//! primitive type aliases, the error taxonomy, pagination arithmetic, and
//! the permission scope constants used by gated routes.

pub mod error;
pub mod pagination;
pub mod scopes;
pub mod types;
