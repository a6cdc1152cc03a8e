//! Wallet user resource.
//!
//! Plain CRUD: the whole surface is the generic handler set, parametrized
//! with the wallet-user repository and its permission scopes.

use medley_core::pagination::Page;
use medley_core::scopes;
use medley_core::types::DbId;
use medley_db::models::wallet_user::{CreateWalletUser, UpdateWalletUser, WalletUser};
use medley_db::repositories::WalletUserRepo;
use medley_db::DbResult;
use sqlx::PgPool;

use crate::resource::{Resource, Scopes};

pub struct WalletUserResource;

impl Resource for WalletUserResource {
    const ENTITY: &'static str = "User";
    const SCOPES: Scopes = Scopes {
        list: Some(scopes::GET_ALL_USERS),
        get: Some(scopes::GET_USER),
        create: Some(scopes::POST_USER),
        update: Some(scopes::PATCH_USER),
        delete: Some(scopes::DELETE_USER),
    };

    type Entity = WalletUser;
    type Create = CreateWalletUser;
    type Update = UpdateWalletUser;

    async fn list(pool: &PgPool, page: Page) -> DbResult<Vec<WalletUser>> {
        WalletUserRepo::list_page(pool, page).await
    }

    async fn count(pool: &PgPool) -> DbResult<i64> {
        WalletUserRepo::count(pool).await
    }

    async fn find(pool: &PgPool, id: DbId) -> DbResult<Option<WalletUser>> {
        WalletUserRepo::find_by_id(pool, id).await
    }

    async fn create(pool: &PgPool, input: CreateWalletUser) -> DbResult<WalletUser> {
        WalletUserRepo::create(pool, &input).await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        input: UpdateWalletUser,
    ) -> DbResult<Option<WalletUser>> {
        WalletUserRepo::update(pool, id, &input).await
    }

    async fn delete(pool: &PgPool, id: DbId) -> DbResult<Option<WalletUser>> {
        WalletUserRepo::delete(pool, id).await
    }
}
