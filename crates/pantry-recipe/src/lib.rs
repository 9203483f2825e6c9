//! Pantry Recipe - recipe schema, validation and stores
//!
//! This crate defines the recipe JSON schema, validates recipe collections,
//! and provides the data-access side that hands collections to the selector.

pub mod schema;
pub mod store;
pub mod validation;

pub use schema::{Diet, ParseDietError, Recipe};
pub use store::{JsonRecipeStore, RecipeStore, StoreError};
pub use validation::{validate_collection, validate_recipe, ValidationError};
