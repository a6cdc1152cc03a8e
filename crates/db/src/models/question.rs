//! Trivia question models and DTOs.

use medley_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category_id: DbId,
    pub difficulty: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a question.
///
/// All four fields are semantically required, but they arrive as options
/// so the handler can reject an incomplete payload as unprocessable
/// instead of a generic deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category_id: Option<DbId>,
    pub difficulty: Option<i32>,
}

/// Request body for `POST /questions/search`.
///
/// The field name is camelCase on the wire; the search frontend has always
/// sent it that way.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuestions {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Request body for `POST /quizzes`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<DbId>,
    pub quiz_category: QuizCategory,
}

/// Category selector for a quiz round. Id 0 means "no filter".
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    pub id: DbId,
}
