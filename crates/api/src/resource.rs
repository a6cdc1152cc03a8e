//! Generic parametrized CRUD resource handlers.
//!
//! Most entities need the same five routes -- list, get, create, update,
//! delete -- differing only in table, DTO shapes, and which permission
//! scope (if any) gates each operation. Instead of copy-pasting a handler
//! set per entity, implement [`Resource`] once per entity and mount
//! [`router`]. Surfaces with bespoke semantics (grouped listings, quiz
//! rounds) keep hand-written handlers and can still merge extra routes
//! next to the generic ones.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use medley_core::error::CoreError;
use medley_core::pagination::Page;
use medley_core::types::DbId;
use medley_db::DbResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::PgPool;
use std::future::Future;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{authorize, MaybeUser};
use crate::query::PageParams;
use crate::response::Success;
use crate::state::AppState;

/// Permission scopes gating each CRUD operation. `None` means public.
pub struct Scopes {
    pub list: Option<&'static str>,
    pub get: Option<&'static str>,
    pub create: Option<&'static str>,
    pub update: Option<&'static str>,
    pub delete: Option<&'static str>,
}

/// A CRUD-capable entity, pluggable into the generic handler set.
///
/// Methods mirror the repository layer one-to-one; implementations are
/// thin delegations to the entity's `*Repo`.
pub trait Resource: Send + Sync + 'static {
    /// Entity name used in not-found messages.
    const ENTITY: &'static str;

    /// Per-operation permission scopes.
    const SCOPES: Scopes;

    type Entity: Serialize + Send + Sync;
    type Create: DeserializeOwned + Send;
    type Update: DeserializeOwned + Send;

    fn list(pool: &PgPool, page: Page)
        -> impl Future<Output = DbResult<Vec<Self::Entity>>> + Send;

    fn count(pool: &PgPool) -> impl Future<Output = DbResult<i64>> + Send;

    fn find(pool: &PgPool, id: DbId)
        -> impl Future<Output = DbResult<Option<Self::Entity>>> + Send;

    fn create(
        pool: &PgPool,
        input: Self::Create,
    ) -> impl Future<Output = DbResult<Self::Entity>> + Send;

    fn update(
        pool: &PgPool,
        id: DbId,
        input: Self::Update,
    ) -> impl Future<Output = DbResult<Option<Self::Entity>>> + Send;

    /// Delete by id, returning the deleted row (`None` if absent).
    fn delete(
        pool: &PgPool,
        id: DbId,
    ) -> impl Future<Output = DbResult<Option<Self::Entity>>> + Send;
}

/// Listing payload: one page of entities plus the total row count.
#[derive(Debug, Serialize)]
pub struct ListPayload<T: Serialize> {
    pub data: Vec<T>,
    pub total_count: i64,
}

/// Single-entity payload under a uniform `data` key.
#[derive(Debug, Serialize)]
pub struct EntityPayload<T: Serialize> {
    pub data: T,
}

/// Deleted-entity payload, echoing the removed row.
#[derive(Debug, Serialize)]
pub struct DeletedEntityPayload<T: Serialize> {
    pub deleted: T,
}

/// GET / -- one page of the collection.
///
/// An empty page is a not-found condition per the listing convention:
/// either the collection is empty or the page is past the end.
pub async fn list<R: Resource>(
    State(state): State<AppState>,
    user: MaybeUser,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Success<ListPayload<R::Entity>>>> {
    authorize(&user, R::SCOPES.list)?;

    let page = params.page();
    let data = R::list(&state.pool, page).await?;
    if data.is_empty() {
        return Err(AppError::NotFound(format!(
            "No {} found on page {}",
            R::ENTITY,
            page.number()
        )));
    }
    let total_count = R::count(&state.pool).await?;

    Ok(Json(Success::new(ListPayload { data, total_count })))
}

/// GET /{id}
pub async fn get_by_id<R: Resource>(
    State(state): State<AppState>,
    user: MaybeUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Success<EntityPayload<R::Entity>>>> {
    authorize(&user, R::SCOPES.get)?;

    let entity = R::find(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: R::ENTITY,
            id,
        }))?;
    Ok(Json(Success::new(EntityPayload { data: entity })))
}

/// POST /
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    user: MaybeUser,
    Json(input): Json<R::Create>,
) -> AppResult<(StatusCode, Json<Success<EntityPayload<R::Entity>>>)> {
    authorize(&user, R::SCOPES.create)?;

    let entity = R::create(&state.pool, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Success::new(EntityPayload { data: entity })),
    ))
}

/// PATCH /{id} -- partial update; omitted fields are left unchanged.
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    user: MaybeUser,
    Path(id): Path<DbId>,
    Json(input): Json<R::Update>,
) -> AppResult<Json<Success<EntityPayload<R::Entity>>>> {
    authorize(&user, R::SCOPES.update)?;

    let entity = R::update(&state.pool, id, input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: R::ENTITY,
            id,
        }))?;
    Ok(Json(Success::new(EntityPayload { data: entity })))
}

/// DELETE /{id} -- responds with the deleted row.
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    user: MaybeUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Success<DeletedEntityPayload<R::Entity>>>> {
    authorize(&user, R::SCOPES.delete)?;

    let entity = R::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: R::ENTITY,
            id,
        }))?;
    Ok(Json(Success::new(DeletedEntityPayload { deleted: entity })))
}

/// The standard route set for a [`Resource`]:
///
/// ```text
/// GET    /       -> list (paginated, ?page=)
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PATCH  /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router<R: Resource>() -> Router<AppState> {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route(
            "/{id}",
            get(get_by_id::<R>)
                .patch(update::<R>)
                .delete(delete::<R>),
        )
}
