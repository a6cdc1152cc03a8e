//! Route definitions for trivia categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET /                 -> list (id -> label map)
/// GET /{id}/questions   -> questions_by_category (paginated)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(category::list))
        .route("/{id}/questions", get(category::questions_by_category))
}
