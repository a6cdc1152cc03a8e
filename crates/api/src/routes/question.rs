//! Route definitions for trivia questions.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::question;
use crate::state::AppState;

/// Routes mounted at `/questions`.
///
/// ```text
/// GET    /          -> list (paginated, with category map)
/// POST   /          -> create
/// POST   /search    -> search (paginated)
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(question::list).post(question::create))
        .route("/search", post(question::search))
        .route("/{id}", delete(question::delete))
}
