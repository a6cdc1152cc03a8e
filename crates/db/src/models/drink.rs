//! Drink models and DTOs.
//!
//! A drink's recipe is a JSONB array of ingredient objects. The public
//! listing strips ingredient names (the "short" form); the gated detail
//! endpoint returns the full recipe.

use medley_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `drinks` table. `recipe` holds the raw JSONB document.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Drink {
    pub id: DbId,
    pub title: String,
    pub recipe: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One recipe ingredient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: i64,
}

/// Ingredient with the name stripped, for the public short form.
#[derive(Debug, Clone, Serialize)]
pub struct IngredientShort {
    pub color: String,
    pub parts: i64,
}

impl Drink {
    /// Parse the stored recipe document into typed ingredients.
    ///
    /// Returns `None` when the stored document does not match the
    /// ingredient shape (possible only if it bypassed create validation).
    pub fn ingredients(&self) -> Option<Vec<Ingredient>> {
        serde_json::from_value(self.recipe.clone()).ok()
    }

    /// The public short form: title plus color/parts-only recipe.
    pub fn short(&self) -> DrinkShort {
        let recipe = self
            .ingredients()
            .unwrap_or_default()
            .into_iter()
            .map(|i| IngredientShort {
                color: i.color,
                parts: i.parts,
            })
            .collect();
        DrinkShort {
            id: self.id,
            title: self.title.clone(),
            recipe,
        }
    }
}

/// Drink with recipe reduced to the short ingredient form.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkShort {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<IngredientShort>,
}

/// DTO for creating a drink. Both fields are semantically required; they
/// arrive as options so the handler can reject incomplete payloads as
/// unprocessable.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDrink {
    pub title: Option<String>,
    pub recipe: Option<serde_json::Value>,
}

/// DTO for patching a drink. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDrink {
    pub title: Option<String>,
    pub recipe: Option<serde_json::Value>,
}
