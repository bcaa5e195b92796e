//! Custom recipe data-access layer.
//!
//! [`RecipesService`] is the sole mediator between application code and
//! the remote store for user-authored recipes. It owns the persisted
//! layout (`customRecipes/{ownerId}/{recipeId}`), fills creation
//! defaults, stamps timestamps, and normalizes store snapshots into
//! [`RecipeRecord`] collections.
//!
//! # Data flow
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Application code                        │
//! └──────────────────────────────────────────────────────────┘
//!        │ create / get / update / delete / listen
//!        ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  RecipesService                                          │
//! │  - path construction  customRecipes/{owner}/{recipe}     │
//! │  - defaulting + createdAt/updatedAt stamping             │
//! │  - snapshot → Vec<RecipeRecord> normalization            │
//! └──────────────────────────────────────────────────────────┘
//!        │ RemoteStore (read / write / delete / push_key / watch)
//!        ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Store backend (MemoryStore, RestStore, …)               │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Failure semantics
//!
//! Write-style operations surface `Err(ServiceError)` carrying the
//! store fault; read-style operations log the fault and return an
//! empty collection, the same shape as "legitimately no records".
//! Nothing is retried, nothing is fatal, each call is independent.
//!
//! # Example
//!
//! ```
//! use recetario_service::{NewRecipe, RecipesService};
//! use recetario_store::MemoryStore;
//! use recetario_types::OwnerId;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let service = RecipesService::new(MemoryStore::new());
//! let owner = OwnerId::new("u1");
//!
//! let input = NewRecipe::new("Soup", "Hot", "water,salt", "Boil");
//! let id = service.create_recipe(&owner, input).await.unwrap();
//!
//! let recipes = service.get_user_recipes(&owner).await;
//! assert_eq!(recipes.len(), 1);
//! assert_eq!(recipes[0].id, id);
//! # }
//! ```

mod error;
mod record;
mod service;
mod subscription;

pub use error::ServiceError;
pub use record::{
    NewRecipe, RecipeRecord, DEFAULT_AREA, DEFAULT_CATEGORY, DEFAULT_DIFFICULTY,
    DEFAULT_PREP_TIME, DEFAULT_SERVINGS, PLACEHOLDER_IMAGE_URL,
};
pub use service::{RecipesService, CUSTOM_RECIPES_ROOT};
pub use subscription::RecipeSubscription;
