//! Handlers for the `/questions` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use medley_core::error::CoreError;
use medley_core::types::DbId;
use medley_db::models::question::{CreateQuestion, Question, SearchQuestions};
use medley_db::repositories::{CategoryRepo, QuestionRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::category::{category_map, CategoryMap};
use crate::query::PageParams;
use crate::response::{DeletedPayload, Success};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionsPayload {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct QuestionPayload {
    pub question: Question,
}

#[derive(Debug, Serialize)]
pub struct SearchPayload {
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

/// GET /api/v1/questions
///
/// One page of all questions plus the category map. A page past the end of
/// the result set is a not-found condition.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Success<QuestionsPayload>>> {
    let page = params.page();
    let questions = QuestionRepo::list_page(&state.pool, page).await?;
    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "No questions found on page {}",
            page.number()
        )));
    }
    let total_questions = QuestionRepo::count(&state.pool).await?;
    let categories = category_map(CategoryRepo::list_all(&state.pool).await?);

    Ok(Json(Success::new(QuestionsPayload {
        questions,
        total_questions,
        categories,
    })))
}

/// POST /api/v1/questions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateQuestion>,
) -> AppResult<(StatusCode, Json<Success<QuestionPayload>>)> {
    let question_text = require_field(input.question, "question")?;
    let answer = require_field(input.answer, "answer")?;
    let category_id = input
        .category_id
        .ok_or_else(|| validation("category_id is required"))?;
    let difficulty = input
        .difficulty
        .ok_or_else(|| validation("difficulty is required"))?;

    let question =
        QuestionRepo::create(&state.pool, &question_text, &answer, category_id, difficulty)
            .await?;
    Ok((
        StatusCode::CREATED,
        Json(Success::new(QuestionPayload { question })),
    ))
}

/// DELETE /api/v1/questions/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Success<DeletedPayload>>> {
    let deleted = QuestionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(Success::new(DeletedPayload { deleted: id })))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }))
    }
}

/// POST /api/v1/questions/search
///
/// Case-insensitive substring match on question text, paginated. No
/// matches is a valid, empty result rather than an error.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    Json(input): Json<SearchQuestions>,
) -> AppResult<Json<Success<SearchPayload>>> {
    let (questions, total_questions) =
        QuestionRepo::search_page(&state.pool, &input.search_term, params.page()).await?;
    Ok(Json(Success::new(SearchPayload {
        questions,
        total_questions,
    })))
}

fn require_field(value: Option<String>, name: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| validation(&format!("{name} is required")))
}

fn validation(msg: &str) -> AppError {
    AppError::Core(CoreError::Validation(msg.to_string()))
}
