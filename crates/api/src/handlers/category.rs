//! Handlers for the `/categories` resource.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use medley_core::error::CoreError;
use medley_core::types::DbId;
use medley_db::models::category::Category;
use medley_db::models::question::Question;
use medley_db::repositories::{CategoryRepo, QuestionRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::Success;
use crate::state::AppState;

/// Categories keyed by id, as the quiz frontend expects
/// (`{"1": "Science", ...}`).
pub type CategoryMap = BTreeMap<DbId, String>;

#[derive(Debug, Serialize)]
pub struct CategoriesPayload {
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsPayload {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: String,
}

/// Fold category rows into the id -> label map.
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Success<CategoriesPayload>>> {
    let categories = CategoryRepo::list_all(&state.pool).await?;
    if categories.is_empty() {
        return Err(AppError::NotFound("No categories found".into()));
    }
    Ok(Json(Success::new(CategoriesPayload {
        categories: category_map(categories),
    })))
}

/// GET /api/v1/categories/{id}/questions
///
/// One page of a single category's questions. The category comes entirely
/// from the path; nothing is remembered between requests. An unknown
/// category or an empty page is a not-found condition.
pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Success<CategoryQuestionsPayload>>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    let page = params.page();
    let questions = QuestionRepo::list_by_category_page(&state.pool, id, page).await?;
    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "No questions found in category {} on page {}",
            category.kind,
            page.number()
        )));
    }
    let total_questions = QuestionRepo::count_by_category(&state.pool, id).await?;

    Ok(Json(Success::new(CategoryQuestionsPayload {
        questions,
        total_questions,
        current_category: category.kind,
    })))
}
