//! Trivia category model.
//!
//! Categories are reference data seeded by migration; the API only reads
//! them. `kind` is the display label ("Science", "Art", ...).

use medley_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub kind: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
