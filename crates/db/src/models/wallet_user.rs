//! Wallet user models and DTOs.

use medley_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `wallet_users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WalletUser {
    pub id: DbId,
    pub name: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a wallet user. Status defaults to `Active`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWalletUser {
    pub name: String,
    pub status: Option<String>,
}

/// DTO for patching a wallet user. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWalletUser {
    pub name: Option<String>,
    pub status: Option<String>,
}
