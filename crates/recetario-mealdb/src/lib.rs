//! Read-only client for TheMealDB, the public recipe catalog the
//! application browses alongside the user's own recipes.
//!
//! Two endpoints are consumed, both returning a `{"meals": [...]}`
//! envelope where `meals` is `null` when nothing matched:
//!
//! - `search.php?s={name}`: free-text search by meal name
//! - `lookup.php?i={id}`: full detail for one meal id
//!
//! The API encodes a meal's ingredient list as twenty numbered field
//! pairs (`strIngredient1`/`strMeasure1` …); [`Meal::ingredients`]
//! folds those back into a usable list.

mod client;
mod error;
mod meal;

pub use client::{MealDbClient, DEFAULT_BASE_URL};
pub use error::MealDbError;
pub use meal::{Meal, MealIngredient, INGREDIENT_SLOTS};
