//! Handlers for the `/users/{id}/transactions` sub-resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use medley_core::error::CoreError;
use medley_core::scopes;
use medley_core::types::DbId;
use medley_db::models::transaction::{CreateTransaction, Transaction, TRANSACTION_KINDS};
use medley_db::repositories::{TransactionRepo, WalletUserRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::Success;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TransactionsPayload {
    pub user_id: DbId,
    pub transactions: Vec<Transaction>,
    pub total_count: i64,
}

#[derive(Debug, Serialize)]
pub struct TransactionPayload {
    pub transaction: Transaction,
}

/// GET /api/v1/users/{id}/transactions -- requires `get:user-transactions`.
///
/// Paginated. A user with no transactions yields an empty page, not an
/// error; only an unknown user is 404.
pub async fn list_for_user(
    State(state): State<AppState>,
    user: AuthUser,
    Path(user_id): Path<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Success<TransactionsPayload>>> {
    user.require(scopes::GET_USER_TRANSACTIONS)?;

    WalletUserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    let transactions =
        TransactionRepo::list_by_user_page(&state.pool, user_id, params.page()).await?;
    let total_count = TransactionRepo::count_by_user(&state.pool, user_id).await?;

    Ok(Json(Success::new(TransactionsPayload {
        user_id,
        transactions,
        total_count,
    })))
}

/// POST /api/v1/users/{id}/transactions -- requires `post:user-transactions`.
///
/// `kind` must be one of the allowed transaction kinds; `entry_date`
/// defaults to today. A dangling user or shop id is unprocessable via the
/// foreign-key constraints.
pub async fn create_for_user(
    State(state): State<AppState>,
    user: AuthUser,
    Path(user_id): Path<DbId>,
    Json(input): Json<CreateTransaction>,
) -> AppResult<(StatusCode, Json<Success<TransactionPayload>>)> {
    user.require(scopes::POST_USER_TRANSACTIONS)?;

    let kind = input
        .kind
        .ok_or_else(|| validation("kind is required"))?;
    if !TRANSACTION_KINDS.contains(&kind.as_str()) {
        return Err(validation(&format!(
            "kind must be one of: {}",
            TRANSACTION_KINDS.join(", ")
        )));
    }
    let amount = input
        .amount
        .ok_or_else(|| validation("amount is required"))?;
    let category = input
        .category
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| validation("category is required"))?;
    let entry_date = input
        .entry_date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    let transaction = TransactionRepo::create(
        &state.pool,
        user_id,
        &kind,
        amount,
        &category,
        entry_date,
        input.description.as_deref(),
        input.shop_id,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(Success::new(TransactionPayload { transaction })),
    ))
}

fn validation(msg: &str) -> AppError {
    AppError::Core(CoreError::Validation(msg.to_string()))
}
