//! The canonical stored shape of a custom recipe.

use recetario_types::{OwnerId, RecipeId};
use serde::{Deserialize, Serialize};

/// Image URL written when a recipe is created without one.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200?text=Sin+Imagen";

/// Category written when a recipe is created without one.
pub const DEFAULT_CATEGORY: &str = "Personalizada";

/// Area written when a recipe is created without one.
pub const DEFAULT_AREA: &str = "Personalizada";

/// Preparation time written when a recipe is created without one.
pub const DEFAULT_PREP_TIME: &str = "No especificado";

/// Servings written when a recipe is created without one.
pub const DEFAULT_SERVINGS: &str = "No especificado";

/// Difficulty written when a recipe is created without one.
pub const DEFAULT_DIFFICULTY: &str = "Media";

/// One user-submitted recipe, as stored.
///
/// The wire shape uses the original camelCase field names. Optional
/// fields are written only when present and tolerated when absent:
/// after a destructive replace (see
/// [`RecipesService::update_recipe`](crate::RecipesService::update_recipe))
/// a record carries exactly the fields its last writer supplied, plus
/// `updatedAt`.
///
/// `created_at` is stamped once at creation and never touched by this
/// layer again; `updated_at` exists iff at least one update happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    /// Store-assigned key, echoed into the record at creation.
    pub id: RecipeId,
    pub name: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// RFC 3339 creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// RFC 3339 timestamp of the last update; absent until the first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Owner whose namespace holds this record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<OwnerId>,
}

/// Input for creating a recipe.
///
/// The four text fields are required; everything else falls back to
/// the documented defaults at creation time. No validation beyond
/// presence is performed; the store accepts whatever is given.
///
/// # Example
///
/// ```
/// use recetario_service::NewRecipe;
///
/// let input = NewRecipe::new("Ajiaco", "Sopa bogotana", "pollo, papa", "Cocinar")
///     .with_category("Sopas")
///     .with_servings("4");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub name: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl NewRecipe {
    /// Creates an input with the required fields only.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        ingredients: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ingredients: ingredients.into(),
            instructions: instructions.into(),
            image: None,
            category: None,
            area: None,
            prep_time: None,
            servings: None,
            difficulty: None,
        }
    }

    /// Sets the image URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the area (cuisine).
    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    /// Sets the preparation time.
    #[must_use]
    pub fn with_prep_time(mut self, prep_time: impl Into<String>) -> Self {
        self.prep_time = Some(prep_time.into());
        self
    }

    /// Sets the servings.
    #[must_use]
    pub fn with_servings(mut self, servings: impl Into<String>) -> Self {
        self.servings = Some(servings.into());
        self
    }

    /// Sets the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// Builds the stored record: merges the documented defaults, echoes
    /// the store-assigned id, and stamps creation metadata.
    #[must_use]
    pub(crate) fn into_record(
        self,
        id: RecipeId,
        owner: OwnerId,
        created_at: String,
    ) -> RecipeRecord {
        RecipeRecord {
            id,
            name: self.name,
            description: self.description,
            ingredients: self.ingredients,
            instructions: self.instructions,
            image: Some(
                self.image
                    .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            ),
            category: Some(self.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string())),
            area: Some(self.area.unwrap_or_else(|| DEFAULT_AREA.to_string())),
            prep_time: Some(
                self.prep_time
                    .unwrap_or_else(|| DEFAULT_PREP_TIME.to_string()),
            ),
            servings: Some(
                self.servings
                    .unwrap_or_else(|| DEFAULT_SERVINGS.to_string()),
            ),
            difficulty: Some(
                self.difficulty
                    .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
            ),
            created_at: Some(created_at),
            updated_at: None,
            created_by: Some(owner),
        }
    }
}
