//! Repository for the `questions` table.
//!
//! Paginated listings all order by `id` so a page number maps to the same
//! rows across calls.

use medley_core::pagination::Page;
use medley_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::question::Question;

const COLUMNS: &str = "id, question, answer, category_id, difficulty, created_at, updated_at";

/// Provides CRUD, search, and quiz-candidate queries for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question, returning the created row.
    ///
    /// Fields are already validated by the handler; an out-of-range
    /// difficulty or dangling category surfaces as a constraint violation.
    pub async fn create(
        pool: &PgPool,
        question: &str,
        answer: &str,
        category_id: DbId,
        difficulty: i32,
    ) -> DbResult<Question> {
        let query = format!(
            "INSERT INTO questions (question, answer, category_id, difficulty) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Question>(&query)
            .bind(question)
            .bind(answer)
            .bind(category_id)
            .bind(difficulty)
            .fetch_one(pool)
            .await?)
    }

    /// Find a question by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Question>> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        Ok(sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    /// One page of all questions, ordered by id.
    pub async fn list_page(pool: &PgPool, page: Page) -> DbResult<Vec<Question>> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id LIMIT $1 OFFSET $2");
        Ok(sqlx::query_as::<_, Question>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await?)
    }

    /// Total number of questions.
    pub async fn count(pool: &PgPool) -> DbResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// One page of a single category's questions, ordered by id.
    pub async fn list_by_category_page(
        pool: &PgPool,
        category_id: DbId,
        page: Page,
    ) -> DbResult<Vec<Question>> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE category_id = $1 \
             ORDER BY id \
             LIMIT $2 OFFSET $3"
        );
        Ok(sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await?)
    }

    /// Number of questions in a category.
    pub async fn count_by_category(pool: &PgPool, category_id: DbId) -> DbResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM questions WHERE category_id = $1")
                .bind(category_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// One page of questions whose text contains `term`
    /// (case-insensitive), ordered by id, plus the total match count.
    pub async fn search_page(
        pool: &PgPool,
        term: &str,
        page: Page,
    ) -> DbResult<(Vec<Question>, i64)> {
        let pattern = format!("%{term}%");

        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM questions WHERE question ILIKE $1")
                .bind(&pattern)
                .fetch_one(pool)
                .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE question ILIKE $1 \
             ORDER BY id \
             LIMIT $2 OFFSET $3"
        );
        let questions = sqlx::query_as::<_, Question>(&query)
            .bind(&pattern)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        Ok((questions, total))
    }

    /// The quiz complement set: questions not in `excluded`, optionally
    /// restricted to one category. The caller picks one at random.
    pub async fn quiz_candidates(
        pool: &PgPool,
        category_id: Option<DbId>,
        excluded: &[DbId],
    ) -> DbResult<Vec<Question>> {
        let rows = match category_id {
            Some(cat) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM questions \
                     WHERE category_id = $1 AND id <> ALL($2) \
                     ORDER BY id"
                );
                sqlx::query_as::<_, Question>(&query)
                    .bind(cat)
                    .bind(excluded)
                    .fetch_all(pool)
                    .await?
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM questions \
                     WHERE id <> ALL($1) \
                     ORDER BY id"
                );
                sqlx::query_as::<_, Question>(&query)
                    .bind(excluded)
                    .fetch_all(pool)
                    .await?
            }
        };
        Ok(rows)
    }

    /// Delete a question by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
