//! Identifier types for Recetario.
//!
//! Both identifiers are opaque strings: an [`OwnerId`] is whatever the
//! authentication layer hands us, and a [`RecipeId`] is a store-assigned
//! push key. Neither performs validation beyond presence; the store is
//! the authority on what it accepts.

use serde::{Deserialize, Serialize};

/// Identifier for the owner of a recipe collection.
///
/// The owner id names one user's namespace in the store: all records
/// created by that user live under it, and it is the sharding key of the
/// persisted layout.
///
/// # Example
///
/// ```
/// use recetario_types::OwnerId;
///
/// let owner = OwnerId::new("u-1234");
/// assert_eq!(owner.as_str(), "u-1234");
/// assert_eq!(owner.to_string(), "u-1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    /// Creates an owner id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OwnerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for OwnerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifier for one recipe record within an owner's namespace.
///
/// Assigned by the store at creation time (a push key). Unique within
/// its owner's namespace only; global uniqueness across owners is not
/// guaranteed or required.
///
/// # Ordering
///
/// Push keys embed their creation timestamp, so the derived `Ord`
/// sorts recipe ids of one namespace in approximate creation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Wraps a store-assigned key.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_id_roundtrip() {
        let owner = OwnerId::new("u1");
        assert_eq!(owner.as_str(), "u1");
        assert_eq!(owner.clone().into_inner(), "u1");
        assert_eq!(OwnerId::from("u1"), owner);
    }

    #[test]
    fn serde_is_transparent() {
        let owner = OwnerId::new("u1");
        let json = serde_json::to_string(&owner).unwrap();
        assert_eq!(json, "\"u1\"");

        let back: OwnerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, owner);
    }

    #[test]
    fn recipe_id_orders_lexicographically() {
        let a = RecipeId::new("-Nab000");
        let b = RecipeId::new("-Nab001");
        assert!(a < b);
    }
}
