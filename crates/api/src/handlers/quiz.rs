//! Handler for `/quizzes`: random unseen question selection.

use axum::extract::State;
use axum::Json;
use medley_db::models::question::{Question, QuizRequest};
use medley_db::repositories::QuestionRepo;
use rand::Rng;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::Success;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuizPayload {
    /// The next question, or `null` when every question in the selected
    /// category has already been seen.
    pub question: Option<Question>,
}

/// POST /api/v1/quizzes
///
/// Picks one question uniformly at random from the complement of
/// `previous_questions`, optionally restricted to a category. Category id
/// 0 means "no filter". The selection is scoped entirely to this request;
/// an exhausted pool responds with a null question, not an error.
pub async fn play(
    State(state): State<AppState>,
    Json(input): Json<QuizRequest>,
) -> AppResult<Json<Success<QuizPayload>>> {
    let category_id = match input.quiz_category.id {
        0 => None,
        id => Some(id),
    };

    let candidates =
        QuestionRepo::quiz_candidates(&state.pool, category_id, &input.previous_questions).await?;

    Ok(Json(Success::new(QuizPayload {
        question: pick_random(candidates),
    })))
}

/// Pick one element uniformly at random, consuming the vector.
fn pick_random<T>(mut items: Vec<T>) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    let index = rand::rng().random_range(0..items.len());
    Some(items.swap_remove(index))
}
