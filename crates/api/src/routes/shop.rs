//! Route definitions for shops.

use axum::Router;

use crate::handlers::shop::ShopResource;
use crate::resource;
use crate::state::AppState;

/// Routes mounted at `/shops`: the generic CRUD set.
///
/// ```text
/// GET    /       -> list (get:all-shops, paginated)
/// POST   /       -> create (post:shop)
/// GET    /{id}   -> get_by_id (get:shop)
/// PATCH  /{id}   -> update (patch:shop)
/// DELETE /{id}   -> delete (delete:shop)
/// ```
pub fn router() -> Router<AppState> {
    resource::router::<ShopResource>()
}
