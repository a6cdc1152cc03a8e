//! Repository for the `wallet_users` table.

use medley_core::pagination::Page;
use medley_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::wallet_user::{CreateWalletUser, UpdateWalletUser, WalletUser};

const COLUMNS: &str = "id, name, status, created_at, updated_at";

/// Provides CRUD operations for wallet users.
pub struct WalletUserRepo;

impl WalletUserRepo {
    /// One page of all users, ordered by id.
    pub async fn list_page(pool: &PgPool, page: Page) -> DbResult<Vec<WalletUser>> {
        let query = format!("SELECT {COLUMNS} FROM wallet_users ORDER BY id LIMIT $1 OFFSET $2");
        Ok(sqlx::query_as::<_, WalletUser>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await?)
    }

    /// Total number of users.
    pub async fn count(pool: &PgPool) -> DbResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM wallet_users")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Find a user by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<WalletUser>> {
        let query = format!("SELECT {COLUMNS} FROM wallet_users WHERE id = $1");
        Ok(sqlx::query_as::<_, WalletUser>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateWalletUser) -> DbResult<WalletUser> {
        let query = format!(
            "INSERT INTO wallet_users (name, status) \
             VALUES ($1, COALESCE($2, 'Active')) \
             RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, WalletUser>(&query)
            .bind(&input.name)
            .bind(&input.status)
            .fetch_one(pool)
            .await?)
    }

    /// Update a user. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWalletUser,
    ) -> DbResult<Option<WalletUser>> {
        let query = format!(
            "UPDATE wallet_users SET \
                name = COALESCE($2, name), \
                status = COALESCE($3, status), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, WalletUser>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.status)
            .fetch_optional(pool)
            .await?)
    }

    /// Delete a user by ID, returning the deleted row. Cascade deletes the
    /// user's transactions.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<Option<WalletUser>> {
        let query = format!("DELETE FROM wallet_users WHERE id = $1 RETURNING {COLUMNS}");
        Ok(sqlx::query_as::<_, WalletUser>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }
}
