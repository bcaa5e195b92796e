//! HTTP client for the catalog endpoints.

use crate::{Meal, MealDbError};
use serde::Deserialize;
use tracing::debug;

/// Public v1 API root.
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Both endpoints answer with this envelope; `meals` is `null` when
/// nothing matched.
#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    meals: Option<Vec<Meal>>,
}

/// Client for TheMealDB lookup/search endpoints.
///
/// Cloning is cheap; clones share the HTTP connection pool.
///
/// # Example
///
/// ```no_run
/// use recetario_mealdb::MealDbClient;
///
/// # async fn demo() -> Result<(), recetario_mealdb::MealDbError> {
/// let client = MealDbClient::new();
/// for meal in client.search("soup").await? {
///     println!("{}: {}", meal.id, meal.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    /// Creates a client against the public API.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom API root (test servers,
    /// keyed tiers). A trailing slash is ignored.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Searches meals by name. An empty query lists the catalog's
    /// first page, which is how the browse screen fills itself.
    pub async fn search(&self, name: &str) -> Result<Vec<Meal>, MealDbError> {
        let envelope = self.fetch("search.php", ("s", name)).await?;
        let meals = envelope.meals.unwrap_or_default();
        debug!(query = name, hits = meals.len(), "meal search");
        Ok(meals)
    }

    /// Looks up one meal by id. Unknown ids yield `None`.
    pub async fn lookup(&self, id: &str) -> Result<Option<Meal>, MealDbError> {
        let envelope = self.fetch("lookup.php", ("i", id)).await?;
        Ok(envelope.meals.and_then(|meals| meals.into_iter().next()))
    }

    async fn fetch(
        &self,
        endpoint: &str,
        query: (&str, &str),
    ) -> Result<MealsEnvelope, MealDbError> {
        let url = format!("{}/{endpoint}", self.base_url);
        let response = self.http.get(url).query(&[query]).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MealDbError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_meals_is_an_empty_envelope() {
        let envelope: MealsEnvelope = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(envelope.meals.is_none());
    }

    #[test]
    fn envelope_carries_meals() {
        let envelope: MealsEnvelope = serde_json::from_str(
            r#"{"meals": [{"idMeal": "1", "strMeal": "Corba"}]}"#,
        )
        .unwrap();
        let meals = envelope.meals.unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Corba");
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = MealDbClient::with_base_url("http://localhost:9000/api/");
        assert_eq!(client.base_url, "http://localhost:9000/api");
    }
}
