//! Recipe selection — pick one recipe to recommend for a diet

use pantry_recipe::{Diet, Recipe, RecipeStore, StoreError};
use tracing::{debug, info};

use crate::readiness::ReadinessSource;

/// Recipes scoring at or below this readiness are never recommended.
pub const READINESS_THRESHOLD: f64 = 0.1;

/// Holds a recipe collection and selects recommendations from it.
#[derive(Debug, Clone, Default)]
pub struct RecipeSelector {
    recipes: Vec<Recipe>,
}

impl RecipeSelector {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Create a selector over everything the store currently holds.
    pub fn from_store(store: &impl RecipeStore) -> Result<Self, StoreError> {
        Ok(Self::new(store.load_recipes()?))
    }

    /// Replace the collection with a fresh load from `store`.
    ///
    /// The current collection is kept if loading fails.
    pub fn refresh(&mut self, store: &impl RecipeStore) -> Result<usize, StoreError> {
        self.recipes = store.load_recipes()?;
        info!("Recipe collection refreshed ({} recipes)", self.recipes.len());
        Ok(self.recipes.len())
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipes servable under `diet`, in collection order.
    pub fn compatible(&self, diet: Diet) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.supports(diet)).collect()
    }

    /// Select a recipe for `diet`.
    ///
    /// Candidates are the recipes supporting `diet`; `readiness` is asked to
    /// score exactly those, once. A candidate is eligible when its score is
    /// strictly above [`READINESS_THRESHOLD`]. With `take_best` the highest
    /// scoring eligible recipe is returned, ties going to the one listed
    /// first; otherwise the first eligible recipe in collection order is.
    ///
    /// Returns `None` when nothing is eligible. That is an expected outcome,
    /// not an error.
    pub fn select(
        &self,
        diet: Diet,
        take_best: bool,
        readiness: &impl ReadinessSource,
    ) -> Option<String> {
        let compatible = self.compatible(diet);
        if compatible.is_empty() {
            debug!("No recipes support diet {}", diet);
            return None;
        }

        let scores = readiness.readiness(&compatible);
        let mut eligible = compatible.iter().copied().filter_map(|recipe| {
            scores
                .get(&recipe.name)
                .copied()
                .filter(|&score| score > READINESS_THRESHOLD)
                .map(|score| (recipe, score))
        });

        let selected = if take_best {
            let mut best: Option<(&Recipe, f64)> = None;
            for (recipe, score) in eligible {
                // Strictly greater, so the earliest of tied recipes stays.
                if best.is_none_or(|(_, best_score)| score > best_score) {
                    best = Some((recipe, score));
                }
            }
            best
        } else {
            eligible.next()
        };

        match selected {
            Some((recipe, score)) => {
                debug!(
                    "Selected '{}' for diet {} (readiness {:.2}, take_best={})",
                    recipe.name, diet, score, take_best
                );
                Some(recipe.name.clone())
            }
            None => {
                debug!(
                    "None of {} candidates for diet {} is above readiness {}",
                    compatible.len(),
                    diet,
                    READINESS_THRESHOLD
                );
                None
            }
        }
    }

    /// Highest readiness eligible recipe for `diet`.
    pub fn select_best(&self, diet: Diet, readiness: &impl ReadinessSource) -> Option<String> {
        self.select(diet, true, readiness)
    }

    /// First eligible recipe for `diet`, in collection order.
    pub fn select_first(&self, diet: Diet, readiness: &impl ReadinessSource) -> Option<String> {
        self.select(diet, false, readiness)
    }
}
