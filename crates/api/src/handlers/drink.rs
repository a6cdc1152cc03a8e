//! Handlers for the `/drinks` resource.
//!
//! The public listing exposes only the "short" recipe form (color and
//! parts); everything else is gated behind permission scopes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use medley_core::error::CoreError;
use medley_core::scopes;
use medley_core::types::DbId;
use medley_db::models::drink::{CreateDrink, Drink, DrinkShort, Ingredient, UpdateDrink};
use medley_db::repositories::DrinkRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::Success;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct DrinksShortPayload {
    pub drinks: Vec<DrinkShort>,
}

#[derive(Debug, Serialize)]
pub struct DrinksPayload {
    pub drinks: Vec<Drink>,
}

/// Single drink under the `drinks` key; the menu client has always read
/// mutation responses from that key.
#[derive(Debug, Serialize)]
pub struct DrinkPayload {
    pub drinks: Drink,
}

#[derive(Debug, Serialize)]
pub struct DeleteDrinkPayload {
    pub delete: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/drinks -- public, short recipe form.
pub async fn list_short(
    State(state): State<AppState>,
) -> AppResult<Json<Success<DrinksShortPayload>>> {
    let drinks = DrinkRepo::list_all(&state.pool).await?;
    Ok(Json(Success::new(DrinksShortPayload {
        drinks: drinks.iter().map(Drink::short).collect(),
    })))
}

/// GET /api/v1/drinks-detail -- full recipes, requires `get:drinks-detail`.
pub async fn list_detail(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Success<DrinksPayload>>> {
    user.require(scopes::GET_DRINKS_DETAIL)?;
    let drinks = DrinkRepo::list_all(&state.pool).await?;
    Ok(Json(Success::new(DrinksPayload { drinks })))
}

/// POST /api/v1/drinks -- requires `post:drinks`.
///
/// A duplicate title is rejected as unprocessable via `uq_drinks_title`.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateDrink>,
) -> AppResult<(StatusCode, Json<Success<DrinkPayload>>)> {
    user.require(scopes::POST_DRINKS)?;

    let title = input
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| validation("title is required"))?;
    let recipe = input
        .recipe
        .ok_or_else(|| validation("recipe is required"))?;
    let recipe = normalize_recipe(&recipe)?;

    let drink = DrinkRepo::create(&state.pool, &title, &recipe).await?;
    Ok((
        StatusCode::CREATED,
        Json(Success::new(DrinkPayload { drinks: drink })),
    ))
}

/// PATCH /api/v1/drinks/{id} -- requires `patch:drinks`.
///
/// Omitted fields are left unchanged.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDrink>,
) -> AppResult<Json<Success<DrinkPayload>>> {
    user.require(scopes::PATCH_DRINKS)?;

    let recipe = match &input.recipe {
        Some(value) => Some(normalize_recipe(value)?),
        None => None,
    };

    let drink = DrinkRepo::update(&state.pool, id, input.title.as_deref(), recipe.as_ref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Drink", id }))?;
    Ok(Json(Success::new(DrinkPayload { drinks: drink })))
}

/// DELETE /api/v1/drinks/{id} -- requires `delete:drinks`.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Success<DeleteDrinkPayload>>> {
    user.require(scopes::DELETE_DRINKS)?;

    let deleted = DrinkRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(Success::new(DeleteDrinkPayload { delete: id })))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Drink", id }))
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a recipe document and re-serialize it in canonical form.
///
/// The stored document must be a non-empty array of
/// `{name, color, parts}` objects; anything else is unprocessable.
fn normalize_recipe(value: &serde_json::Value) -> Result<serde_json::Value, AppError> {
    let ingredients: Vec<Ingredient> = serde_json::from_value(value.clone()).map_err(|_| {
        validation("recipe must be an array of {name, color, parts} ingredients")
    })?;
    if ingredients.is_empty() {
        return Err(validation("recipe must contain at least one ingredient"));
    }
    serde_json::to_value(&ingredients).map_err(|e| AppError::Internal(e.to_string()))
}

fn validation(msg: &str) -> AppError {
    AppError::Core(CoreError::Validation(msg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_recipe_passes() {
        let recipe = json!([{"name": "espresso", "color": "#6f4e37", "parts": 1}]);
        assert!(normalize_recipe(&recipe).is_ok());
    }

    #[test]
    fn test_non_array_recipe_is_rejected() {
        let recipe = json!({"name": "espresso", "color": "#6f4e37", "parts": 1});
        assert!(normalize_recipe(&recipe).is_err());
    }

    #[test]
    fn test_empty_recipe_is_rejected() {
        assert!(normalize_recipe(&json!([])).is_err());
    }

    #[test]
    fn test_ingredient_missing_parts_is_rejected() {
        let recipe = json!([{"name": "milk", "color": "#fff"}]);
        assert!(normalize_recipe(&recipe).is_err());
    }
}
