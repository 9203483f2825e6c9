//! Recipe stores — where recipe collections come from

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::schema::Recipe;
use crate::validation::{validate_collection, ValidationError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read recipes from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse recipes in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("recipe collection failed validation with {} errors", .0.len())]
    Invalid(Vec<ValidationError>),
}

/// Supplies a recipe collection, in the order the backing source holds it.
pub trait RecipeStore {
    fn load_recipes(&self) -> Result<Vec<Recipe>, StoreError>;
}

impl RecipeStore for Vec<Recipe> {
    fn load_recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        validate_collection(self).map_err(StoreError::Invalid)?;
        Ok(self.clone())
    }
}

/// Recipe collection kept as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonRecipeStore {
    path: PathBuf,
}

impl JsonRecipeStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecipeStore for JsonRecipeStore {
    fn load_recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        debug!("Reading recipes from {:?}", self.path);
        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let recipes: Vec<Recipe> =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        validate_collection(&recipes).map_err(StoreError::Invalid)?;

        info!("Loaded {} recipes from {:?}", recipes.len(), self.path);
        Ok(recipes)
    }
}
