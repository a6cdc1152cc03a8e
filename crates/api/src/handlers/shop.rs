//! Shop resource.
//!
//! Plain CRUD via the generic handler set. Shop deletion keeps dependent
//! transactions, nulling their `shop_id`; the delete response echoes the
//! removed row like the other wallet resources.

use medley_core::pagination::Page;
use medley_core::scopes;
use medley_core::types::DbId;
use medley_db::models::shop::{CreateShop, Shop, UpdateShop};
use medley_db::repositories::ShopRepo;
use medley_db::DbResult;
use sqlx::PgPool;

use crate::resource::{Resource, Scopes};

pub struct ShopResource;

impl Resource for ShopResource {
    const ENTITY: &'static str = "Shop";
    const SCOPES: Scopes = Scopes {
        list: Some(scopes::GET_ALL_SHOPS),
        get: Some(scopes::GET_SHOP),
        create: Some(scopes::POST_SHOP),
        update: Some(scopes::PATCH_SHOP),
        delete: Some(scopes::DELETE_SHOP),
    };

    type Entity = Shop;
    type Create = CreateShop;
    type Update = UpdateShop;

    async fn list(pool: &PgPool, page: Page) -> DbResult<Vec<Shop>> {
        ShopRepo::list_page(pool, page).await
    }

    async fn count(pool: &PgPool) -> DbResult<i64> {
        ShopRepo::count(pool).await
    }

    async fn find(pool: &PgPool, id: DbId) -> DbResult<Option<Shop>> {
        ShopRepo::find_by_id(pool, id).await
    }

    async fn create(pool: &PgPool, input: CreateShop) -> DbResult<Shop> {
        ShopRepo::create(pool, &input).await
    }

    async fn update(pool: &PgPool, id: DbId, input: UpdateShop) -> DbResult<Option<Shop>> {
        ShopRepo::update(pool, id, &input).await
    }

    async fn delete(pool: &PgPool, id: DbId) -> DbResult<Option<Shop>> {
        ShopRepo::delete(pool, id).await
    }
}
