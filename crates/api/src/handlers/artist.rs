//! Handlers for the `/artists` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use medley_core::error::CoreError;
use medley_core::types::DbId;
use medley_db::models::artist::{Artist, ArtistRef, ArtistShow, CreateArtist, UpdateArtist};
use medley_db::repositories::ArtistRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::SearchRequest;
use crate::response::{DeletedPayload, Success};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ArtistsPayload {
    pub artists: Vec<ArtistRef>,
}

/// Artist detail with shows split around `now()`.
#[derive(Debug, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ArtistDetailPayload {
    pub artist: ArtistDetail,
}

#[derive(Debug, Serialize)]
pub struct ArtistPayload {
    pub artist: Artist,
}

#[derive(Debug, Serialize)]
pub struct SearchPayload {
    pub count: usize,
    pub data: Vec<ArtistRef>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/artists -- flat id/name listing, ordered by id.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Success<ArtistsPayload>>> {
    let artists = ArtistRepo::list_refs(&state.pool).await?;
    Ok(Json(Success::new(ArtistsPayload { artists })))
}

/// GET /api/v1/artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Success<ArtistDetailPayload>>> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id,
        }))?;

    let upcoming_shows = ArtistRepo::shows(&state.pool, id, true).await?;
    let past_shows = ArtistRepo::shows(&state.pool, id, false).await?;

    Ok(Json(Success::new(ArtistDetailPayload {
        artist: ArtistDetail {
            artist,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        },
    })))
}

/// POST /api/v1/artists
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateArtist>,
) -> AppResult<(StatusCode, Json<Success<ArtistPayload>>)> {
    let artist = ArtistRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Success::new(ArtistPayload { artist })),
    ))
}

/// PUT /api/v1/artists/{id}
///
/// Fields omitted from the payload are left unchanged.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArtist>,
) -> AppResult<Json<Success<ArtistPayload>>> {
    let artist = ArtistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id,
        }))?;
    Ok(Json(Success::new(ArtistPayload { artist })))
}

/// DELETE /api/v1/artists/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Success<DeletedPayload>>> {
    let deleted = ArtistRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(Success::new(DeletedPayload { deleted: id })))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id,
        }))
    }
}

/// POST /api/v1/artists/search
///
/// Case-insensitive substring match on artist name.
pub async fn search(
    State(state): State<AppState>,
    Json(input): Json<SearchRequest>,
) -> AppResult<Json<Success<SearchPayload>>> {
    let data = ArtistRepo::search(&state.pool, &input.search_term).await?;
    Ok(Json(Success::new(SearchPayload {
        count: data.len(),
        data,
    })))
}
