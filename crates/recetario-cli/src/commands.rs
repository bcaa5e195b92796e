//! Subcommand implementations.
//!
//! Each function drives the service or the catalog client and prints
//! to stdout; logging stays on stderr via tracing.

use anyhow::Result;
use recetario_mealdb::MealDbClient;
use recetario_service::{NewRecipe, RecipeRecord, RecipesService};
use recetario_store::RemoteStore;
use recetario_types::{OwnerId, RecipeId};

pub async fn add<S: RemoteStore>(
    service: &RecipesService<S>,
    owner: &OwnerId,
    input: NewRecipe,
) -> Result<()> {
    let id = service.create_recipe(owner, input).await?;
    println!("created {id}");
    Ok(())
}

pub async fn list<S: RemoteStore>(service: &RecipesService<S>, owner: &OwnerId) -> Result<()> {
    let recipes = service.get_user_recipes(owner).await;
    if recipes.is_empty() {
        println!("no recipes for {owner}");
    }
    for recipe in &recipes {
        println!("{}", summary(recipe));
    }
    Ok(())
}

pub async fn all<S: RemoteStore>(service: &RecipesService<S>) -> Result<()> {
    let recipes = service.get_all_custom_recipes().await;
    if recipes.is_empty() {
        println!("no recipes yet");
    }
    for recipe in &recipes {
        let owner = recipe
            .created_by
            .as_ref()
            .map_or("?", |owner| owner.as_str());
        println!("[{owner}] {}", summary(recipe));
    }
    Ok(())
}

pub async fn update<S: RemoteStore>(
    service: &RecipesService<S>,
    owner: &OwnerId,
    id: &RecipeId,
    data: RecipeRecord,
) -> Result<()> {
    service.update_recipe(owner, id, data).await?;
    println!("updated {id}");
    Ok(())
}

pub async fn delete<S: RemoteStore>(
    service: &RecipesService<S>,
    owner: &OwnerId,
    id: &RecipeId,
) -> Result<()> {
    service.delete_recipe(owner, id).await?;
    println!("deleted {id}");
    Ok(())
}

/// Streams an owner's recipe list until Ctrl-C.
pub async fn watch<S: RemoteStore>(service: &RecipesService<S>, owner: &OwnerId) -> Result<()> {
    let subscription = service.listen_to_user_recipes(owner, |recipes| {
        println!("── {} recipe(s)", recipes.len());
        for recipe in &recipes {
            println!("{}", summary(recipe));
        }
    });

    eprintln!("watching {owner}; Ctrl-C to stop");
    tokio::signal::ctrl_c().await?;
    subscription.unsubscribe();
    Ok(())
}

pub async fn search(client: &MealDbClient, query: &str) -> Result<()> {
    let meals = client.search(query).await?;
    if meals.is_empty() {
        println!("no meals match '{query}'");
    }
    for meal in &meals {
        let category = meal.category.as_deref().unwrap_or("-");
        let area = meal.area.as_deref().unwrap_or("-");
        println!("{}  {} ({category}, {area})", meal.id, meal.name);
    }
    Ok(())
}

pub async fn lookup(client: &MealDbClient, id: &str) -> Result<()> {
    match client.lookup(id).await? {
        None => println!("no meal with id '{id}'"),
        Some(meal) => {
            println!("{} ({})", meal.name, meal.id);
            for ingredient in meal.ingredients() {
                println!("  - {ingredient}");
            }
            if let Some(instructions) = &meal.instructions {
                println!("\n{instructions}");
            }
        }
    }
    Ok(())
}

fn summary(recipe: &RecipeRecord) -> String {
    let category = recipe.category.as_deref().unwrap_or("-");
    let difficulty = recipe.difficulty.as_deref().unwrap_or("-");
    format!(
        "{}  {} ({category}, {difficulty})",
        recipe.id, recipe.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_tolerates_sparse_records() {
        let recipe = RecipeRecord {
            id: RecipeId::new("r1"),
            name: "Soup v2".into(),
            description: "d".into(),
            ingredients: "i".into(),
            instructions: "s".into(),
            image: None,
            category: None,
            area: None,
            prep_time: None,
            servings: None,
            difficulty: None,
            created_at: None,
            updated_at: None,
            created_by: None,
        };
        assert_eq!(summary(&recipe), "r1  Soup v2 (-, -)");
    }
}
