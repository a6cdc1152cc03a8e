//! Repository for the `venues` table.

use medley_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::venue::{
    CreateVenue, UpdateVenue, Venue, VenueHit, VenueShow, VenueShowCountRow,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, city, state, address, phone, genres, image_link, \
    facebook_link, website, seeking_talent, seeking_description, \
    created_at, updated_at";

/// Provides CRUD and aggregate queries for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> DbResult<Venue> {
        let query = format!(
            "INSERT INTO venues (name, city, state, address, phone, genres, image_link, \
                                 facebook_link, website, seeking_talent, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, COALESCE($10, TRUE), $11) \
             RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await?)
    }

    /// Find a venue by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Venue>> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        Ok(sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    /// Every venue with its upcoming-show count, ordered by `(city, state,
    /// id)` so the handler can partition rows into city groups in one pass.
    ///
    /// The join is a LEFT OUTER JOIN on purpose: a venue with no shows at
    /// all must still appear, with a count of zero.
    pub async fn list_grouped(pool: &PgPool) -> DbResult<Vec<VenueShowCountRow>> {
        Ok(sqlx::query_as::<_, VenueShowCountRow>(
            "SELECT v.id, v.name, v.city, v.state, \
                    COUNT(s.id) FILTER (WHERE s.start_time > now()) AS num_upcoming_shows \
             FROM venues v \
             LEFT JOIN shows s ON s.venue_id = v.id \
             GROUP BY v.id, v.name, v.city, v.state \
             ORDER BY v.city, v.state, v.id",
        )
        .fetch_all(pool)
        .await?)
    }

    /// Case-insensitive substring search on venue name, ordered by id.
    pub async fn search(pool: &PgPool, term: &str) -> DbResult<Vec<VenueHit>> {
        let pattern = format!("%{term}%");
        Ok(sqlx::query_as::<_, VenueHit>(
            "SELECT id, name FROM venues WHERE name ILIKE $1 ORDER BY id",
        )
        .bind(&pattern)
        .fetch_all(pool)
        .await?)
    }

    /// Shows at a venue joined with artist info, split on `now()`.
    ///
    /// `upcoming = true` returns shows strictly in the future; `false`
    /// returns past (and currently running) ones.
    pub async fn shows(pool: &PgPool, venue_id: DbId, upcoming: bool) -> DbResult<Vec<VenueShow>> {
        let comparison = if upcoming { ">" } else { "<=" };
        let query = format!(
            "SELECT s.artist_id, a.name AS artist_name, \
                    a.image_link AS artist_image_link, s.start_time \
             FROM shows s \
             JOIN artists a ON a.id = s.artist_id \
             WHERE s.venue_id = $1 AND s.start_time {comparison} now() \
             ORDER BY s.start_time"
        );
        Ok(sqlx::query_as::<_, VenueShow>(&query)
            .bind(venue_id)
            .fetch_all(pool)
            .await?)
    }

    /// Update a venue. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateVenue) -> DbResult<Option<Venue>> {
        let query = format!(
            "UPDATE venues SET \
                name = COALESCE($2, name), \
                city = COALESCE($3, city), \
                state = COALESCE($4, state), \
                address = COALESCE($5, address), \
                phone = COALESCE($6, phone), \
                genres = COALESCE($7, genres), \
                image_link = COALESCE($8, image_link), \
                facebook_link = COALESCE($9, facebook_link), \
                website = COALESCE($10, website), \
                seeking_talent = COALESCE($11, seeking_talent), \
                seeking_description = COALESCE($12, seeking_description), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await?)
    }

    /// Delete a venue by ID. Cascade deletes its shows.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
