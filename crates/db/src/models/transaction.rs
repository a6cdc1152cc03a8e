//! Wallet transaction models and DTOs.

use chrono::NaiveDate;
use medley_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Allowed values for a transaction's `kind` column. Mirrored by the
/// `ck_transactions_kind` check constraint.
pub const TRANSACTION_KINDS: [&str; 2] = ["Income", "Expense"];

/// A row from the `transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    pub kind: String,
    pub amount: f64,
    pub category: String,
    pub status: String,
    pub entry_date: NaiveDate,
    pub description: Option<String>,
    pub user_id: DbId,
    pub shop_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a transaction under a user.
///
/// `kind`, `amount`, and `category` are semantically required; they arrive
/// as options so the handler can reject incomplete payloads as
/// unprocessable. `entry_date` defaults to today when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransaction {
    pub kind: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub entry_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub shop_id: Option<DbId>,
}
