//! Repository for the `drinks` table.

use medley_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::drink::Drink;

const COLUMNS: &str = "id, title, recipe, created_at, updated_at";

/// Provides CRUD operations for drinks.
pub struct DrinkRepo;

impl DrinkRepo {
    /// All drinks ordered by id.
    pub async fn list_all(pool: &PgPool) -> DbResult<Vec<Drink>> {
        let query = format!("SELECT {COLUMNS} FROM drinks ORDER BY id");
        Ok(sqlx::query_as::<_, Drink>(&query).fetch_all(pool).await?)
    }

    /// Find a drink by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Drink>> {
        let query = format!("SELECT {COLUMNS} FROM drinks WHERE id = $1");
        Ok(sqlx::query_as::<_, Drink>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    /// Insert a new drink, returning the created row.
    ///
    /// A duplicate title violates `uq_drinks_title`.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        recipe: &serde_json::Value,
    ) -> DbResult<Drink> {
        let query = format!(
            "INSERT INTO drinks (title, recipe) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Drink>(&query)
            .bind(title)
            .bind(recipe)
            .fetch_one(pool)
            .await?)
    }

    /// Update a drink's title and/or recipe. Omitted fields are kept.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: Option<&str>,
        recipe: Option<&serde_json::Value>,
    ) -> DbResult<Option<Drink>> {
        let query = format!(
            "UPDATE drinks SET \
                title = COALESCE($2, title), \
                recipe = COALESCE($3, recipe), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Drink>(&query)
            .bind(id)
            .bind(title)
            .bind(recipe)
            .fetch_optional(pool)
            .await?)
    }

    /// Delete a drink by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
