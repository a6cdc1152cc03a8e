//! Handlers for the `/shows` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use medley_db::models::show::{CreateShow, Show, ShowListing};
use medley_db::repositories::ShowRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::query::PageParams;
use crate::response::Success;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ShowsPayload {
    pub shows: Vec<ShowListing>,
    pub total_count: i64,
}

#[derive(Debug, Serialize)]
pub struct ShowPayload {
    pub show: Show,
}

/// GET /api/v1/shows -- denormalized listing, paginated.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Success<ShowsPayload>>> {
    let shows = ShowRepo::list_page(&state.pool, params.page()).await?;
    let total_count = ShowRepo::count(&state.pool).await?;
    Ok(Json(Success::new(ShowsPayload { shows, total_count })))
}

/// POST /api/v1/shows
///
/// A dangling venue or artist id is rejected as unprocessable via the
/// foreign-key constraint.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateShow>,
) -> AppResult<(StatusCode, Json<Success<ShowPayload>>)> {
    let show = ShowRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(Success::new(ShowPayload { show }))))
}
