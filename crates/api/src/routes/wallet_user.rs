//! Route definitions for wallet users.

use axum::routing::get;
use axum::Router;

use crate::handlers::transaction;
use crate::handlers::wallet_user::WalletUserResource;
use crate::resource;
use crate::state::AppState;

/// Routes mounted at `/users`: the generic CRUD set plus the transactions
/// sub-resource.
///
/// ```text
/// GET    /                     -> list (get:all-users, paginated)
/// POST   /                     -> create (post:user)
/// GET    /{id}                 -> get_by_id (get:user)
/// PATCH  /{id}                 -> update (patch:user)
/// DELETE /{id}                 -> delete (delete:user)
/// GET    /{id}/transactions    -> list_for_user (get:user-transactions)
/// POST   /{id}/transactions    -> create_for_user (post:user-transactions)
/// ```
pub fn router() -> Router<AppState> {
    resource::router::<WalletUserResource>().route(
        "/{id}/transactions",
        get(transaction::list_for_user).post(transaction::create_for_user),
    )
}
