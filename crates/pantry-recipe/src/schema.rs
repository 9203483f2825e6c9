//! Recipe schema — a named dish, the diets it suits, and what it needs

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dietary category a recipe can be served under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Vegan,
    Vegetarian,
    /// No dietary restriction
    Normal,
}

impl Diet {
    pub const ALL: [Diet; 3] = [Diet::Vegan, Diet::Vegetarian, Diet::Normal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Diet::Vegan => "vegan",
            Diet::Vegetarian => "vegetarian",
            Diet::Normal => "normal",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown diet '{0}' (expected one of: vegan, vegetarian, normal)")]
pub struct ParseDietError(pub String);

impl FromStr for Diet {
    type Err = ParseDietError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Diet::ALL
            .into_iter()
            .find(|diet| diet.as_str() == normalized)
            .ok_or_else(|| ParseDietError(s.to_string()))
    }
}

/// A recipe as stored in a recipe collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Unique within a collection; selection results refer to recipes by name.
    pub name: String,
    pub diets: BTreeSet<Diet>,
    /// Ingredient name to required quantity.
    #[serde(default)]
    pub ingredients: BTreeMap<String, f64>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, diets: impl IntoIterator<Item = Diet>) -> Self {
        Self {
            name: name.into(),
            diets: diets.into_iter().collect(),
            ingredients: BTreeMap::new(),
        }
    }

    pub fn with_ingredient(mut self, name: impl Into<String>, quantity: f64) -> Self {
        self.ingredients.insert(name.into(), quantity);
        self
    }

    /// Whether this recipe may be served to someone on `diet`.
    pub fn supports(&self, diet: Diet) -> bool {
        self.diets.contains(&diet)
    }
}
