//! Recetario CLI: browse the public meal catalog and manage your own
//! recipe collection.
//!
//! # Configuration
//!
//! Configuration is loaded from multiple sources with priority:
//!
//! 1. CLI flags (highest priority)
//! 2. Environment variables (`RECETARIO_*`)
//! 3. Config file (`~/.recetario/config.toml`)
//! 4. Default values (lowest priority)
//!
//! # Environment Variables
//!
//! - `RECETARIO_DATABASE_URL`: base URL of the recipe database
//! - `RECETARIO_AUTH_TOKEN`: ID token attached to store requests
//! - `RECETARIO_POLL_INTERVAL_MS`: interval between watch polls
//! - `RECETARIO_MEALDB_BASE_URL`: override the catalog API root
//! - `RECETARIO_LOG`: tracing filter (default: `info`)

mod commands;
mod config;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use config::{default_config_path, ConfigLoader, RecetarioConfig};
use recetario_mealdb::MealDbClient;
use recetario_service::{NewRecipe, RecipeRecord, RecipesService};
use recetario_store::RestStore;
use recetario_types::{OwnerId, RecipeId};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Recetario: recipes of your own, plus the public catalog.
#[derive(Parser, Debug)]
#[command(name = "recetario")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Custom config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Database base URL (also: RECETARIO_DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    /// ID token for store requests (also: RECETARIO_AUTH_TOKEN)
    #[arg(long)]
    auth_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

/// Recipe fields shared by `add` and `update`.
#[derive(Args, Debug, Clone)]
struct RecipeFields {
    #[arg(long)]
    name: String,

    #[arg(long)]
    description: String,

    #[arg(long)]
    ingredients: String,

    #[arg(long)]
    instructions: String,

    #[arg(long)]
    image: Option<String>,

    #[arg(long)]
    category: Option<String>,

    #[arg(long)]
    area: Option<String>,

    #[arg(long)]
    prep_time: Option<String>,

    #[arg(long)]
    servings: Option<String>,

    #[arg(long)]
    difficulty: Option<String>,
}

impl RecipeFields {
    fn into_new_recipe(self) -> NewRecipe {
        let mut input = NewRecipe::new(
            self.name,
            self.description,
            self.ingredients,
            self.instructions,
        );
        if let Some(image) = self.image {
            input = input.with_image(image);
        }
        if let Some(category) = self.category {
            input = input.with_category(category);
        }
        if let Some(area) = self.area {
            input = input.with_area(area);
        }
        if let Some(prep_time) = self.prep_time {
            input = input.with_prep_time(prep_time);
        }
        if let Some(servings) = self.servings {
            input = input.with_servings(servings);
        }
        if let Some(difficulty) = self.difficulty {
            input = input.with_difficulty(difficulty);
        }
        input
    }

    /// Builds the replacement record for `update`. Only what is given
    /// here ends up stored; `update` is a full replace.
    fn into_record(self, id: RecipeId, owner: OwnerId) -> RecipeRecord {
        RecipeRecord {
            id,
            name: self.name,
            description: self.description,
            ingredients: self.ingredients,
            instructions: self.instructions,
            image: self.image,
            category: self.category,
            area: self.area,
            prep_time: self.prep_time,
            servings: self.servings,
            difficulty: self.difficulty,
            created_at: None,
            updated_at: None,
            created_by: Some(owner),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a recipe in an owner's collection
    Add {
        #[arg(long)]
        owner: String,

        #[command(flatten)]
        fields: RecipeFields,
    },

    /// List one owner's recipes
    List {
        #[arg(long)]
        owner: String,
    },

    /// List every owner's recipes (the global feed)
    All,

    /// Replace a recipe wholesale (omitted fields are removed)
    Update {
        #[arg(long)]
        owner: String,

        #[arg(long)]
        id: String,

        #[command(flatten)]
        fields: RecipeFields,
    },

    /// Delete a recipe
    Delete {
        #[arg(long)]
        owner: String,

        #[arg(long)]
        id: String,
    },

    /// Stream an owner's recipes until Ctrl-C
    Watch {
        #[arg(long)]
        owner: String,
    },

    /// Search the public catalog by meal name
    Search { query: String },

    /// Show one catalog meal with its ingredients
    Lookup { id: String },
}

fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_env("RECETARIO_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<RecetarioConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }

    let mut config = loader.load()?;

    // CLI flags are the highest-priority layer.
    if let Some(url) = &cli.database_url {
        config.database_url = Some(url.clone());
    }
    if let Some(token) = &cli.auth_token {
        config.auth_token = Some(token.clone());
    }
    Ok(config)
}

fn build_service(config: &RecetarioConfig) -> Result<RecipesService<RestStore>> {
    let Some(url) = &config.database_url else {
        bail!(
            "no database URL configured; set database_url in {}, \
             RECETARIO_DATABASE_URL, or --database-url",
            default_config_path().display()
        );
    };

    let mut store = RestStore::new(url)
        .with_poll_interval(Duration::from_millis(config.poll_interval_ms));
    if let Some(token) = &config.auth_token {
        store = store.with_auth_token(token);
    }
    Ok(RecipesService::new(store))
}

fn build_catalog(config: &RecetarioConfig) -> MealDbClient {
    match &config.mealdb_base_url {
        Some(base) => MealDbClient::with_base_url(base),
        None => MealDbClient::new(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = resolve_config(&cli)?;

    match cli.command {
        Command::Add { owner, fields } => {
            let service = build_service(&config)?;
            commands::add(&service, &OwnerId::new(owner), fields.into_new_recipe()).await
        }
        Command::List { owner } => {
            let service = build_service(&config)?;
            commands::list(&service, &OwnerId::new(owner)).await
        }
        Command::All => {
            let service = build_service(&config)?;
            commands::all(&service).await
        }
        Command::Update { owner, id, fields } => {
            let service = build_service(&config)?;
            let owner = OwnerId::new(owner);
            let id = RecipeId::new(id);
            let record = fields.into_record(id.clone(), owner.clone());
            commands::update(&service, &owner, &id, record).await
        }
        Command::Delete { owner, id } => {
            let service = build_service(&config)?;
            commands::delete(&service, &OwnerId::new(owner), &RecipeId::new(id)).await
        }
        Command::Watch { owner } => {
            let service = build_service(&config)?;
            commands::watch(&service, &OwnerId::new(owner)).await
        }
        Command::Search { query } => commands::search(&build_catalog(&config), &query).await,
        Command::Lookup { id } => commands::lookup(&build_catalog(&config), &id).await,
    }
}
