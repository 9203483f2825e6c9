//! Pantry CLI - recommend a recipe for a diet

mod config;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pantry_core::{RecipeSelector, StaticReadiness};
use pantry_recipe::{Diet, JsonRecipeStore, RecipeStore, StoreError};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::PantryConfig;

#[derive(Parser)]
#[command(name = "pantry")]
#[command(about = "Recommend a recipe you can cook for a given diet")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select one recipe for a diet
    Select {
        /// Diet to select for (vegan, vegetarian, normal)
        #[arg(short, long)]
        diet: Diet,

        /// Pick the most ready recipe
        #[arg(long, conflicts_with = "first")]
        best: bool,

        /// Pick the first ready recipe in collection order
        #[arg(long)]
        first: bool,

        /// Path to the recipes JSON file
        #[arg(short, long)]
        recipes: Option<PathBuf>,

        /// Path to the readiness scores JSON file
        #[arg(long)]
        readiness: Option<PathBuf>,
    },

    /// Validate a recipes file
    Validate {
        /// Path to the recipes JSON file
        #[arg(short, long)]
        recipes: Option<PathBuf>,
    },

    /// List recipes, optionally only those suiting a diet
    List {
        #[arg(short, long)]
        diet: Option<Diet>,

        /// Path to the recipes JSON file
        #[arg(short, long)]
        recipes: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries results only.
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = PantryConfig::from_env()?;
    run(cli.command, &config, &mut std::io::stdout().lock())
}

fn run(command: Commands, config: &PantryConfig, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Select {
            diet,
            best,
            first,
            recipes,
            readiness,
        } => {
            let take_best = resolve_take_best(best, first, config)?;
            let recipes = recipes.unwrap_or_else(|| config.recipes_path.clone());
            let readiness = readiness.unwrap_or_else(|| config.readiness_path.clone());
            select_recipe(diet, take_best, &recipes, &readiness, out)
        }
        Commands::Validate { recipes } => {
            let recipes = recipes.unwrap_or_else(|| config.recipes_path.clone());
            validate_recipes_file(&recipes, out)
        }
        Commands::List { diet, recipes } => {
            let recipes = recipes.unwrap_or_else(|| config.recipes_path.clone());
            list_recipes(diet, &recipes, out)
        }
    }
}

/// Flags win over `PANTRY_TAKE_BEST`, which is only consulted when neither is set.
fn resolve_take_best(best: bool, first: bool, config: &PantryConfig) -> Result<bool> {
    if best {
        Ok(true)
    } else if first {
        Ok(false)
    } else {
        config.take_best()
    }
}

fn select_recipe(
    diet: Diet,
    take_best: bool,
    recipes: &Path,
    readiness: &Path,
    out: &mut impl Write,
) -> Result<()> {
    let selector = RecipeSelector::from_store(&JsonRecipeStore::new(recipes))
        .with_context(|| format!("Failed to load recipes from {:?}", recipes))?;
    let readiness = StaticReadiness::from_path(readiness)
        .with_context(|| format!("Failed to load readiness scores from {:?}", readiness))?;

    info!(
        "Selecting among {} recipes for diet {} ({} readiness scores)",
        selector.recipes().len(),
        diet,
        readiness.len()
    );

    match selector.select(diet, take_best, &readiness) {
        Some(name) => writeln!(out, "{}", name)?,
        None => writeln!(out, "no eligible recipe")?,
    }

    Ok(())
}

fn validate_recipes_file(path: &Path, out: &mut impl Write) -> Result<()> {
    info!("Validating recipes in {:?}", path);

    match JsonRecipeStore::new(path).load_recipes() {
        Ok(recipes) => {
            writeln!(out, "Recipes are valid ({} recipes)", recipes.len())?;
            Ok(())
        }
        Err(StoreError::Invalid(errors)) => {
            for error in &errors {
                eprintln!("Validation error: {}", error);
            }
            anyhow::bail!("Recipe validation failed with {} errors", errors.len());
        }
        Err(e) => Err(e.into()),
    }
}

fn list_recipes(diet: Option<Diet>, path: &Path, out: &mut impl Write) -> Result<()> {
    let selector = RecipeSelector::from_store(&JsonRecipeStore::new(path))
        .with_context(|| format!("Failed to load recipes from {:?}", path))?;

    let recipes = match diet {
        Some(diet) => selector.compatible(diet),
        None => selector.recipes().iter().collect(),
    };

    for recipe in recipes {
        let diets: Vec<&str> = recipe.diets.iter().map(Diet::as_str).collect();
        writeln!(
            out,
            "{} [{}] ({} ingredients)",
            recipe.name,
            diets.join(", "),
            recipe.ingredients.len()
        )?;
    }

    Ok(())
}
