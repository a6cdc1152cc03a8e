//! Route definitions for the drink menu.
//!
//! `/drinks` and `/drinks-detail` are sibling top-level paths (the detail
//! listing is not a sub-path of `/drinks`), so this router is merged into
//! the API tree rather than nested under a prefix.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::drink;
use crate::state::AppState;

/// Drink routes, merged at the `/api/v1` level.
///
/// ```text
/// GET    /drinks          -> list_short (public)
/// POST   /drinks          -> create (post:drinks)
/// GET    /drinks-detail   -> list_detail (get:drinks-detail)
/// PATCH  /drinks/{id}     -> update (patch:drinks)
/// DELETE /drinks/{id}     -> delete (delete:drinks)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/drinks", get(drink::list_short).post(drink::create))
        .route("/drinks-detail", get(drink::list_detail))
        .route(
            "/drinks/{id}",
            patch(drink::update).delete(drink::delete),
        )
}
