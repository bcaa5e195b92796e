//! Core types for Recetario.
//!
//! This crate is the leaf of the workspace: identifier newtypes, the
//! store path type, and the unified error-code interface. Every other
//! crate depends on it; it depends on nothing but serde.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  recetario-cli     : binary, config, commands       │
//! ├─────────────────────────────────────────────────────┤
//! │  recetario-service : RecipesService, RecipeRecord   │
//! │  recetario-mealdb  : upstream recipe lookup/search  │
//! ├─────────────────────────────────────────────────────┤
//! │  recetario-store   : RemoteStore trait + backends   │
//! ├─────────────────────────────────────────────────────┤
//! │  recetario-types   : OwnerId, RecipeId, StorePath,  │
//! │                      ErrorCode          ◄── HERE    │
//! └─────────────────────────────────────────────────────┘
//! ```

mod error;
mod id;
mod path;

pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use id::{OwnerId, RecipeId};
pub use path::StorePath;
