//! HTTP-level integration tests for the trivia surface: categories,
//! paginated questions, search, and quiz rounds.
//!
//! Categories are seeded by migration (Science = 1, Art = 2, ...).

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use sqlx::PgPool;

const SCIENCE: i64 = 1;
const ART: i64 = 2;

async fn create_question(pool: &PgPool, text: &str, category_id: i64) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/questions",
        serde_json::json!({
            "question": text,
            "answer": "42",
            "category_id": category_id,
            "difficulty": 3,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["question"]["id"]
        .as_i64()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_categories_listing_returns_seeded_map(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["categories"]["1"], "Science");
    assert_eq!(json["categories"]["6"], "Sports");
}

// ---------------------------------------------------------------------------
// Question CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_question_missing_field_is_unprocessable(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/questions",
        serde_json::json!({"question": "No answer given", "category_id": SCIENCE}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 422);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_question_twice_returns_404(pool: PgPool) {
    let id = create_question(&pool, "Ephemeral?", SCIENCE).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/questions/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["deleted"], id);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/questions/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_question_pages_tile_the_collection(pool: PgPool) {
    let mut created = Vec::new();
    for n in 0..12 {
        created.push(create_question(&pool, &format!("Question {n}?"), SCIENCE).await);
    }

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/questions?page=1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let page1 = body_json(response).await;
    assert_eq!(page1["total_questions"], 12);
    assert_eq!(page1["questions"].as_array().unwrap().len(), 10);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/questions?page=2").await;
    let page2 = body_json(response).await;
    assert_eq!(page2["questions"].as_array().unwrap().len(), 2);

    // Concatenating the pages reconstructs the ordered collection.
    let mut seen: Vec<i64> = Vec::new();
    for page in [&page1, &page2] {
        for q in page["questions"].as_array().unwrap() {
            seen.push(q["id"].as_i64().unwrap());
        }
    }
    assert_eq!(seen, created);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_page_past_the_end_returns_404(pool: PgPool) {
    create_question(&pool, "Lonely question?", SCIENCE).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/questions?page=99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);
}

// ---------------------------------------------------------------------------
// Per-category listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_category_listing_is_scoped_to_the_path_category(pool: PgPool) {
    let science_q = create_question(&pool, "What is entropy?", SCIENCE).await;
    let art_q = create_question(&pool, "Who painted this?", ART).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/categories/{SCIENCE}/questions")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["current_category"], "Science");
    let ids: Vec<i64> = json["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect();
    assert!(ids.contains(&science_q));
    assert!(!ids.contains(&art_q));

    // A second request for another category is unaffected by the first.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/categories/{ART}/questions")).await;
    let json = body_json(response).await;
    assert_eq!(json["current_category"], "Art");
    assert_eq!(json["questions"][0]["id"], art_q);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/categories/999/questions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_matches_substring_case_insensitively(pool: PgPool) {
    create_question(&pool, "What is the boiling point of water?", SCIENCE).await;
    create_question(&pool, "Which planet is red?", SCIENCE).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/questions/search",
        serde_json::json!({"searchTerm": "BOILING"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total_questions"], 1);
    assert_eq!(json["questions"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_without_matches_is_empty_success(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/questions/search",
        serde_json::json!({"searchTerm": "nonexistent"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["total_questions"], 0);
}

// ---------------------------------------------------------------------------
// Quiz rounds
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_quiz_never_returns_an_excluded_question(pool: PgPool) {
    let q1 = create_question(&pool, "First?", SCIENCE).await;
    let q2 = create_question(&pool, "Second?", SCIENCE).await;

    // With q1 excluded, q2 is the only candidate; several rounds must all
    // return it.
    for _ in 0..5 {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/v1/quizzes",
            serde_json::json!({
                "previous_questions": [q1],
                "quiz_category": {"id": SCIENCE},
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["question"]["id"], q2);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_quiz_exhausted_pool_yields_null_not_an_error(pool: PgPool) {
    let q1 = create_question(&pool, "Only one?", ART).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/quizzes",
        serde_json::json!({
            "previous_questions": [q1],
            "quiz_category": {"id": ART},
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["question"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_quiz_category_zero_means_no_filter(pool: PgPool) {
    let science_q = create_question(&pool, "Science one?", SCIENCE).await;
    let art_q = create_question(&pool, "Art one?", ART).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/quizzes",
        serde_json::json!({
            "previous_questions": [science_q],
            "quiz_category": {"id": 0},
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Only the art question remains across all categories.
    let json = body_json(response).await;
    assert_eq!(json["question"]["id"], art_q);
}
