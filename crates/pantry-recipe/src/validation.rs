//! Recipe and collection validation

use std::collections::HashSet;

use crate::schema::Recipe;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Recipe name cannot be empty")]
    EmptyName,

    #[error("Recipe '{0}' must list at least one diet")]
    NoDiets(String),

    #[error("Recipe '{0}' has an ingredient with an empty name")]
    EmptyIngredientName(String),

    #[error("Recipe '{recipe}' needs a positive quantity of '{ingredient}', got {quantity}")]
    InvalidQuantity {
        recipe: String,
        ingredient: String,
        quantity: f64,
    },

    #[error("Recipe name '{0}' appears more than once in the collection")]
    DuplicateName(String),
}

/// Validate a single recipe, collecting every problem found.
pub fn validate_recipe(recipe: &Recipe) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    check_recipe(recipe, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a whole collection: each recipe, plus name uniqueness.
pub fn validate_collection(recipes: &[Recipe]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for recipe in recipes {
        check_recipe(recipe, &mut errors);
        if !seen.insert(recipe.name.as_str()) {
            errors.push(ValidationError::DuplicateName(recipe.name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_recipe(recipe: &Recipe, errors: &mut Vec<ValidationError>) {
    if recipe.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName);
    }

    if recipe.diets.is_empty() {
        errors.push(ValidationError::NoDiets(recipe.name.clone()));
    }

    for (ingredient, &quantity) in &recipe.ingredients {
        if ingredient.trim().is_empty() {
            errors.push(ValidationError::EmptyIngredientName(recipe.name.clone()));
        }
        if !quantity.is_finite() || quantity <= 0.0 {
            errors.push(ValidationError::InvalidQuantity {
                recipe: recipe.name.clone(),
                ingredient: ingredient.clone(),
                quantity,
            });
        }
    }
}
