//! Repository for the `shows` table.

use medley_core::pagination::Page;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::show::{CreateShow, Show, ShowListing};

const COLUMNS: &str = "id, venue_id, artist_id, start_time, created_at, updated_at";

/// Provides creation and denormalized listing for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show, returning the created row.
    ///
    /// A dangling venue or artist id surfaces as a foreign-key constraint
    /// violation.
    pub async fn create(pool: &PgPool, input: &CreateShow) -> DbResult<Show> {
        let query = format!(
            "INSERT INTO shows (venue_id, artist_id, start_time) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Show>(&query)
            .bind(input.venue_id)
            .bind(input.artist_id)
            .bind(input.start_time)
            .fetch_one(pool)
            .await?)
    }

    /// One page of the denormalized show listing, ordered by show id.
    pub async fn list_page(pool: &PgPool, page: Page) -> DbResult<Vec<ShowListing>> {
        Ok(sqlx::query_as::<_, ShowListing>(
            "SELECT s.venue_id, v.name AS venue_name, \
                    s.artist_id, a.name AS artist_name, \
                    a.image_link AS artist_image_link, s.start_time \
             FROM shows s \
             JOIN venues v ON v.id = s.venue_id \
             JOIN artists a ON a.id = s.artist_id \
             ORDER BY s.id \
             LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?)
    }

    /// Total number of shows.
    pub async fn count(pool: &PgPool) -> DbResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shows")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
