//! Repository for the `categories` table. Read-only: categories are
//! reference data seeded by migration.

use medley_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::category::Category;

const COLUMNS: &str = "id, kind, created_at, updated_at";

pub struct CategoryRepo;

impl CategoryRepo {
    /// All categories ordered by id.
    pub async fn list_all(pool: &PgPool) -> DbResult<Vec<Category>> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        Ok(sqlx::query_as::<_, Category>(&query)
            .fetch_all(pool)
            .await?)
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Category>> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        Ok(sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }
}
