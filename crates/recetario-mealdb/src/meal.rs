//! Meal records as served by the API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Number of numbered ingredient/measure field pairs in the API shape.
pub const INGREDIENT_SLOTS: usize = 20;

/// One meal from the catalog.
///
/// The display fields are typed; everything else, including the
/// numbered `strIngredient{n}`/`strMeasure{n}` pairs, rides in the
/// flattened catch-all and is reached through [`ingredients`].
///
/// [`ingredients`]: Self::ingredients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl Meal {
    /// Folds the numbered field pairs into an ingredient list.
    ///
    /// A slot counts only when its ingredient name is a non-blank
    /// string; the API pads unused slots with `""` or `null`. Blank
    /// measures are dropped, non-blank ones are kept verbatim
    /// (trimmed).
    #[must_use]
    pub fn ingredients(&self) -> Vec<MealIngredient> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|slot| {
                let name = self.text_field(&format!("strIngredient{slot}"))?;
                let measure = self
                    .text_field(&format!("strMeasure{slot}"))
                    .map(str::to_string);
                Some(MealIngredient {
                    name: name.to_string(),
                    measure,
                })
            })
            .collect()
    }

    fn text_field(&self, key: &str) -> Option<&str> {
        match self.extra.get(key) {
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        }
    }
}

/// One ingredient with its (optional) measure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealIngredient {
    pub name: String,
    pub measure: Option<String>,
}

impl std::fmt::Display for MealIngredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.measure {
            Some(measure) => write!(f, "{measure} {}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Meal {
        serde_json::from_value(json!({
            "idMeal": "52977",
            "strMeal": "Corba",
            "strCategory": "Side",
            "strArea": "Turkish",
            "strInstructions": "Pick through your lentils...",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/58oia61564916529.jpg",
            "strIngredient1": "Lentils",
            "strMeasure1": "1 cup",
            "strIngredient2": "Onion",
            "strMeasure2": "1 large",
            "strIngredient3": " Carrots ",
            "strMeasure3": "   ",
            "strIngredient4": "",
            "strMeasure4": "",
            "strIngredient5": null,
            "strMeasure5": null,
        }))
        .unwrap()
    }

    #[test]
    fn typed_fields_deserialize() {
        let meal = fixture();
        assert_eq!(meal.id, "52977");
        assert_eq!(meal.name, "Corba");
        assert_eq!(meal.category.as_deref(), Some("Side"));
        assert_eq!(meal.area.as_deref(), Some("Turkish"));
    }

    #[test]
    fn ingredients_skip_blank_and_null_slots() {
        let ingredients = fixture().ingredients();
        assert_eq!(ingredients.len(), 3);
        assert_eq!(ingredients[0].name, "Lentils");
        assert_eq!(ingredients[0].measure.as_deref(), Some("1 cup"));
        // Whitespace-only measure is dropped, name is trimmed.
        assert_eq!(ingredients[2].name, "Carrots");
        assert_eq!(ingredients[2].measure, None);
    }

    #[test]
    fn ingredient_display_joins_measure_and_name() {
        let with_measure = MealIngredient {
            name: "Lentils".into(),
            measure: Some("1 cup".into()),
        };
        assert_eq!(with_measure.to_string(), "1 cup Lentils");

        let bare = MealIngredient {
            name: "Salt".into(),
            measure: None,
        };
        assert_eq!(bare.to_string(), "Salt");
    }

    #[test]
    fn missing_optional_fields_tolerated() {
        let meal: Meal =
            serde_json::from_value(json!({"idMeal": "1", "strMeal": "Bare"})).unwrap();
        assert_eq!(meal.category, None);
        assert!(meal.ingredients().is_empty());
    }
}
