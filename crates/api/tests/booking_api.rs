//! HTTP-level integration tests for the booking surface: venues, artists,
//! shows, grouped listing, and substring search.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

async fn create_venue(pool: &PgPool, name: &str, city: &str, state_code: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/venues",
        serde_json::json!({
            "name": name,
            "city": city,
            "state": state_code,
            "genres": ["Jazz"],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["venue"]["id"].as_i64().unwrap()
}

async fn create_artist(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/artists",
        serde_json::json!({
            "name": name,
            "city": "Austin",
            "state": "TX",
            "genres": ["Rock"],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["artist"]["id"].as_i64().unwrap()
}

async fn create_show(pool: &PgPool, venue_id: i64, artist_id: i64, start_time: &str) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/shows",
        serde_json::json!({
            "venue_id": venue_id,
            "artist_id": artist_id,
            "start_time": start_time,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Venue CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_then_get_returns_same_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/venues",
        serde_json::json!({
            "name": "The Musical Hop",
            "city": "San Francisco",
            "state": "CA",
            "address": "1015 Folsom Street",
            "phone": "123-123-1234",
            "genres": ["Jazz", "Folk"],
            "seeking_talent": false,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["success"], true);
    let id = created["venue"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/venues/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let venue = &json["venue"];
    assert_eq!(venue["name"], "The Musical Hop");
    assert_eq!(venue["city"], "San Francisco");
    assert_eq!(venue["address"], "1015 Folsom Street");
    assert_eq!(venue["genres"], serde_json::json!(["Jazz", "Folk"]));
    assert_eq!(venue["seeking_talent"], false);
    assert_eq!(venue["past_shows_count"], 0);
    assert_eq!(venue["upcoming_shows_count"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_venue_returns_404_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/venues/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);
    assert!(json["message"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_with_omitted_fields_leaves_them_unchanged(pool: PgPool) {
    let id = create_venue(&pool, "Mohawk", "Austin", "TX").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/venues/{id}"),
        serde_json::json!({"phone": "512-555-0100"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["venue"]["phone"], "512-555-0100");
    // Omitted fields keep their values.
    assert_eq!(json["venue"]["name"], "Mohawk");
    assert_eq!(json["venue"]["city"], "Austin");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_then_get_returns_404(pool: PgPool) {
    let id = create_venue(&pool, "Short Lived", "Boise", "ID").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/venues/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["deleted"], id);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/venues/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Grouped listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_grouped_listing_keeps_zero_show_venues(pool: PgPool) {
    let busy = create_venue(&pool, "Busy Hall", "Austin", "TX").await;
    let quiet = create_venue(&pool, "Quiet Corner", "Austin", "TX").await;
    let coastal = create_venue(&pool, "The Fillmore", "San Francisco", "CA").await;
    let artist = create_artist(&pool, "Guns N Petals").await;

    // One upcoming and one past show for the busy venue.
    create_show(&pool, busy, artist, "2099-01-01T20:00:00Z").await;
    create_show(&pool, busy, artist, "2019-01-01T20:00:00Z").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/venues").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let areas = json["areas"].as_array().unwrap();
    assert_eq!(areas.len(), 2, "one group per (city, state)");

    // Groups are ordered by (city, state): Austin before San Francisco.
    assert_eq!(areas[0]["city"], "Austin");
    let venues = areas[0]["venues"].as_array().unwrap();
    assert_eq!(venues.len(), 2);

    let busy_entry = venues.iter().find(|v| v["id"] == busy).unwrap();
    // Only the upcoming show counts.
    assert_eq!(busy_entry["num_upcoming_shows"], 1);

    // The outer join keeps the venue with no shows at all, at zero.
    let quiet_entry = venues.iter().find(|v| v["id"] == quiet).unwrap();
    assert_eq!(quiet_entry["num_upcoming_shows"], 0);

    assert_eq!(areas[1]["city"], "San Francisco");
    assert_eq!(areas[1]["venues"][0]["id"], coastal);
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_venue_search_is_case_insensitive_substring(pool: PgPool) {
    create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    create_venue(&pool, "Park Square Live Music & Coffee", "San Francisco", "CA").await;
    create_venue(&pool, "The Dueling Pianos Bar", "New York", "NY").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/venues/search",
        serde_json::json!({"search_term": "music"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_artist_search_no_match_is_empty_success(pool: PgPool) {
    create_artist(&pool, "Matt Quevedo").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/artists/search",
        serde_json::json!({"search_term": "zzzz"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 0);
}

// ---------------------------------------------------------------------------
// Artist detail / shows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_artist_detail_splits_past_and_upcoming_shows(pool: PgPool) {
    let venue = create_venue(&pool, "Park Square", "San Francisco", "CA").await;
    let artist = create_artist(&pool, "The Wild Sax Band").await;

    create_show(&pool, venue, artist, "2099-04-01T20:00:00Z").await;
    create_show(&pool, venue, artist, "2019-06-15T23:00:00Z").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/artists/{artist}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let detail = &json["artist"];
    assert_eq!(detail["upcoming_shows_count"], 1);
    assert_eq!(detail["past_shows_count"], 1);
    assert_eq!(detail["upcoming_shows"][0]["venue_id"], venue);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_show_with_dangling_venue_is_unprocessable(pool: PgPool) {
    let artist = create_artist(&pool, "Nobody Home").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/shows",
        serde_json::json!({
            "venue_id": 424242,
            "artist_id": artist,
            "start_time": "2099-01-01T20:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 422);
}
