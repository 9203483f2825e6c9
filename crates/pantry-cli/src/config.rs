//! CLI configuration from environment variables.

use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct PantryConfig {
    /// JSON array of recipes.
    pub recipes_path: PathBuf,
    /// JSON object of recipe name to readiness score.
    pub readiness_path: PathBuf,
    /// Raw `PANTRY_TAKE_BEST`; only `select` parses it.
    take_best: Option<String>,
}

impl PantryConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            recipes_path: std::env::var("PANTRY_RECIPES_PATH")
                .unwrap_or_else(|_| "./recipes.json".to_string())
                .into(),
            readiness_path: std::env::var("PANTRY_READINESS_PATH")
                .unwrap_or_else(|_| "./readiness.json".to_string())
                .into(),
            take_best: std::env::var("PANTRY_TAKE_BEST").ok(),
        })
    }

    /// Default selection mode when neither `--best` nor `--first` is given.
    pub fn take_best(&self) -> Result<bool> {
        match &self.take_best {
            Some(raw) => raw.trim().parse().context("Invalid PANTRY_TAKE_BEST"),
            None => Ok(true),
        }
    }
}

#[cfg(test)]
impl PantryConfig {
    pub fn for_paths(recipes_path: PathBuf, readiness_path: PathBuf, take_best: Option<&str>) -> Self {
        Self {
            recipes_path,
            readiness_path,
            take_best: take_best.map(str::to_string),
        }
    }
}
