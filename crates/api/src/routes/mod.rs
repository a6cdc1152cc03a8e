pub mod artist;
pub mod category;
pub mod drink;
pub mod health;
pub mod question;
pub mod quiz;
pub mod shop;
pub mod show;
pub mod venue;
pub mod wallet_user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /venues                        grouped listing, create
/// /venues/search                 substring search (POST)
/// /venues/{id}                   detail, update (PUT), delete
///
/// /artists                       flat listing, create
/// /artists/search                substring search (POST)
/// /artists/{id}                  detail, update (PUT), delete
///
/// /shows                         denormalized listing (paginated), create
///
/// /categories                    id -> label map
/// /categories/{id}/questions     one category's questions (paginated)
///
/// /questions                     paginated listing, create
/// /questions/search              substring search (POST, paginated)
/// /questions/{id}                delete
///
/// /quizzes                       next random unseen question (POST)
///
/// /drinks                        public short listing, create (scoped)
/// /drinks-detail                 full listing (scoped)
/// /drinks/{id}                   patch, delete (scoped)
///
/// /users                         generic CRUD (all operations scoped)
/// /users/{id}/transactions       per-user listing, create (scoped)
///
/// /shops                         generic CRUD (all operations scoped)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Booking: venues, artists, shows.
        .nest("/venues", venue::router())
        .nest("/artists", artist::router())
        .nest("/shows", show::router())
        // Trivia: categories, questions, quiz rounds.
        .nest("/categories", category::router())
        .nest("/questions", question::router())
        .nest("/quizzes", quiz::router())
        // Menu: /drinks and /drinks-detail are sibling top-level paths, so
        // the drink router is merged rather than nested.
        .merge(drink::router())
        // Wallet: users (with nested transactions) and shops.
        .nest("/users", wallet_user::router())
        .nest("/shops", shop::router())
}
