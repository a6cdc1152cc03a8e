//! Repository for the `transactions` table.

use chrono::NaiveDate;
use medley_core::pagination::Page;
use medley_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::transaction::Transaction;

const COLUMNS: &str = "\
    id, kind, amount, category, status, entry_date, description, \
    user_id, shop_id, created_at, updated_at";

/// Provides creation and per-user listing for transactions.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Insert a new transaction for a user, returning the created row.
    ///
    /// Kind is validated by the handler against the allowed set; the
    /// `ck_transactions_kind` check backs it up at the database level. A
    /// dangling user or shop id surfaces as a foreign-key violation.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        kind: &str,
        amount: f64,
        category: &str,
        entry_date: NaiveDate,
        description: Option<&str>,
        shop_id: Option<DbId>,
    ) -> DbResult<Transaction> {
        let query = format!(
            "INSERT INTO transactions \
                (kind, amount, category, entry_date, description, user_id, shop_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Transaction>(&query)
            .bind(kind)
            .bind(amount)
            .bind(category)
            .bind(entry_date)
            .bind(description)
            .bind(user_id)
            .bind(shop_id)
            .fetch_one(pool)
            .await?)
    }

    /// One page of a user's transactions, ordered by id.
    pub async fn list_by_user_page(
        pool: &PgPool,
        user_id: DbId,
        page: Page,
    ) -> DbResult<Vec<Transaction>> {
        let query = format!(
            "SELECT {COLUMNS} FROM transactions \
             WHERE user_id = $1 \
             ORDER BY id \
             LIMIT $2 OFFSET $3"
        );
        Ok(sqlx::query_as::<_, Transaction>(&query)
            .bind(user_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await?)
    }

    /// Number of transactions recorded for a user.
    pub async fn count_by_user(pool: &PgPool, user_id: DbId) -> DbResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM transactions WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
