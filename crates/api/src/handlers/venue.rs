//! Handlers for the `/venues` resource.
//!
//! The listing endpoint returns venues partitioned by `(city, state)` with
//! each venue's upcoming-show count attached; the detail endpoint splits a
//! venue's shows into past and upcoming around the current time.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use medley_core::error::CoreError;
use medley_core::types::DbId;
use medley_db::models::venue::{CreateVenue, UpdateVenue, Venue, VenueHit, VenueShow, VenueShowCountRow};
use medley_db::repositories::VenueRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::SearchRequest;
use crate::response::{DeletedPayload, Success};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

/// One member of a city group in the grouped listing.
#[derive(Debug, Serialize)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// A `(city, state)` partition of the grouped listing.
#[derive(Debug, Serialize)]
pub struct CityGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Debug, Serialize)]
pub struct AreasPayload {
    pub areas: Vec<CityGroup>,
}

/// Venue detail with its shows split around `now()`.
#[derive(Debug, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Serialize)]
pub struct VenueDetailPayload {
    pub venue: VenueDetail,
}

#[derive(Debug, Serialize)]
pub struct VenuePayload {
    pub venue: Venue,
}

/// Search results: total match count plus the matching rows.
#[derive(Debug, Serialize)]
pub struct SearchPayload {
    pub count: usize,
    pub data: Vec<VenueHit>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/venues
///
/// Venues grouped by `(city, state)`, each with its upcoming-show count.
/// Venues with no shows appear with a count of zero.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Success<AreasPayload>>> {
    let rows = VenueRepo::list_grouped(&state.pool).await?;
    Ok(Json(Success::new(AreasPayload {
        areas: group_by_city(rows),
    })))
}

/// GET /api/v1/venues/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Success<VenueDetailPayload>>> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Venue", id }))?;

    let upcoming_shows = VenueRepo::shows(&state.pool, id, true).await?;
    let past_shows = VenueRepo::shows(&state.pool, id, false).await?;

    Ok(Json(Success::new(VenueDetailPayload {
        venue: VenueDetail {
            venue,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        },
    })))
}

/// POST /api/v1/venues
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVenue>,
) -> AppResult<(StatusCode, Json<Success<VenuePayload>>)> {
    let venue = VenueRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Success::new(VenuePayload { venue })),
    ))
}

/// PUT /api/v1/venues/{id}
///
/// Fields omitted from the payload are left unchanged.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVenue>,
) -> AppResult<Json<Success<VenuePayload>>> {
    let venue = VenueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Venue", id }))?;
    Ok(Json(Success::new(VenuePayload { venue })))
}

/// DELETE /api/v1/venues/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Success<DeletedPayload>>> {
    let deleted = VenueRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(Success::new(DeletedPayload { deleted: id })))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Venue", id }))
    }
}

/// POST /api/v1/venues/search
///
/// Case-insensitive substring match on venue name.
pub async fn search(
    State(state): State<AppState>,
    Json(input): Json<SearchRequest>,
) -> AppResult<Json<Success<SearchPayload>>> {
    let data = VenueRepo::search(&state.pool, &input.search_term).await?;
    Ok(Json(Success::new(SearchPayload {
        count: data.len(),
        data,
    })))
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Partition aggregate rows into city groups.
///
/// Relies on the query ordering by `(city, state, id)`: rows sharing a key
/// are adjacent, so one linear pass suffices and every row lands in exactly
/// one group.
fn group_by_city(rows: Vec<VenueShowCountRow>) -> Vec<CityGroup> {
    let mut areas: Vec<CityGroup> = Vec::new();
    for row in rows {
        let needs_new_group = areas
            .last()
            .map_or(true, |g| g.city != row.city || g.state != row.state);
        if needs_new_group {
            areas.push(CityGroup {
                city: row.city.clone(),
                state: row.state.clone(),
                venues: Vec::new(),
            });
        }
        if let Some(group) = areas.last_mut() {
            group.venues.push(VenueSummary {
                id: row.id,
                name: row.name,
                num_upcoming_shows: row.num_upcoming_shows,
            });
        }
    }
    areas
}
