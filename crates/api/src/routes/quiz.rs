//! Route definition for quiz rounds.

use axum::routing::post;
use axum::Router;

use crate::handlers::quiz;
use crate::state::AppState;

/// Routes mounted at `/quizzes`.
///
/// ```text
/// POST /    -> play (next random unseen question)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(quiz::play))
}
