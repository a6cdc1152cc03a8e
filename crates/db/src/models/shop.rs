//! Shop models and DTOs.

use medley_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `shops` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Shop {
    pub id: DbId,
    pub name: String,
    pub industry: Option<String>,
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a shop.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShop {
    pub name: String,
    pub industry: Option<String>,
    pub address: Option<String>,
}

/// DTO for patching a shop. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateShop {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub address: Option<String>,
}
