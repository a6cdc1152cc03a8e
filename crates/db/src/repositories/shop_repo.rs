//! Repository for the `shops` table.

use medley_core::pagination::Page;
use medley_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::shop::{CreateShop, Shop, UpdateShop};

const COLUMNS: &str = "id, name, industry, address, created_at, updated_at";

/// Provides CRUD operations for shops.
pub struct ShopRepo;

impl ShopRepo {
    /// One page of all shops, ordered by id.
    pub async fn list_page(pool: &PgPool, page: Page) -> DbResult<Vec<Shop>> {
        let query = format!("SELECT {COLUMNS} FROM shops ORDER BY id LIMIT $1 OFFSET $2");
        Ok(sqlx::query_as::<_, Shop>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await?)
    }

    /// Total number of shops.
    pub async fn count(pool: &PgPool) -> DbResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shops")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Find a shop by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Shop>> {
        let query = format!("SELECT {COLUMNS} FROM shops WHERE id = $1");
        Ok(sqlx::query_as::<_, Shop>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    /// Insert a new shop, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateShop) -> DbResult<Shop> {
        let query = format!(
            "INSERT INTO shops (name, industry, address) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Shop>(&query)
            .bind(&input.name)
            .bind(&input.industry)
            .bind(&input.address)
            .fetch_one(pool)
            .await?)
    }

    /// Update a shop. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateShop) -> DbResult<Option<Shop>> {
        let query = format!(
            "UPDATE shops SET \
                name = COALESCE($2, name), \
                industry = COALESCE($3, industry), \
                address = COALESCE($4, address), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Shop>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.industry)
            .bind(&input.address)
            .fetch_optional(pool)
            .await?)
    }

    /// Delete a shop by ID, returning the deleted row. Transactions
    /// pointing at it keep their rows with `shop_id` nulled.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<Option<Shop>> {
        let query = format!("DELETE FROM shops WHERE id = $1 RETURNING {COLUMNS}");
        Ok(sqlx::query_as::<_, Shop>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }
}
