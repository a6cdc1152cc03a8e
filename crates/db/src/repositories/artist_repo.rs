//! Repository for the `artists` table.

use medley_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::artist::{Artist, ArtistRef, ArtistShow, CreateArtist, UpdateArtist};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, city, state, phone, genres, image_link, facebook_link, \
    website, seeking_venue, seeking_description, created_at, updated_at";

/// Provides CRUD and show queries for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> DbResult<Artist> {
        let query = format!(
            "INSERT INTO artists (name, city, state, phone, genres, image_link, \
                                  facebook_link, website, seeking_venue, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, TRUE), $10) \
             RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await?)
    }

    /// Find an artist by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Artist>> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        Ok(sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    /// Flat id/name listing of every artist, ordered by id.
    pub async fn list_refs(pool: &PgPool) -> DbResult<Vec<ArtistRef>> {
        Ok(
            sqlx::query_as::<_, ArtistRef>("SELECT id, name FROM artists ORDER BY id")
                .fetch_all(pool)
                .await?,
        )
    }

    /// Case-insensitive substring search on artist name, ordered by id.
    pub async fn search(pool: &PgPool, term: &str) -> DbResult<Vec<ArtistRef>> {
        let pattern = format!("%{term}%");
        Ok(sqlx::query_as::<_, ArtistRef>(
            "SELECT id, name FROM artists WHERE name ILIKE $1 ORDER BY id",
        )
        .bind(&pattern)
        .fetch_all(pool)
        .await?)
    }

    /// Shows by an artist joined with venue info, split on `now()`.
    pub async fn shows(
        pool: &PgPool,
        artist_id: DbId,
        upcoming: bool,
    ) -> DbResult<Vec<ArtistShow>> {
        let comparison = if upcoming { ">" } else { "<=" };
        let query = format!(
            "SELECT s.venue_id, v.name AS venue_name, \
                    v.image_link AS venue_image_link, s.start_time \
             FROM shows s \
             JOIN venues v ON v.id = s.venue_id \
             WHERE s.artist_id = $1 AND s.start_time {comparison} now() \
             ORDER BY s.start_time"
        );
        Ok(sqlx::query_as::<_, ArtistShow>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await?)
    }

    /// Update an artist. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateArtist) -> DbResult<Option<Artist>> {
        let query = format!(
            "UPDATE artists SET \
                name = COALESCE($2, name), \
                city = COALESCE($3, city), \
                state = COALESCE($4, state), \
                phone = COALESCE($5, phone), \
                genres = COALESCE($6, genres), \
                image_link = COALESCE($7, image_link), \
                facebook_link = COALESCE($8, facebook_link), \
                website = COALESCE($9, website), \
                seeking_venue = COALESCE($10, seeking_venue), \
                seeking_description = COALESCE($11, seeking_description), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await?)
    }

    /// Delete an artist by ID. Cascade deletes its shows.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
