//! Pantry Core - diet-aware recipe selection
//!
//! This crate picks one recipe to recommend from a collection, given a diet
//! and readiness scores supplied by an external collaborator.

pub mod readiness;
pub mod selector;

pub use readiness::{ReadinessError, ReadinessMap, ReadinessSource, StaticReadiness};
pub use selector::{RecipeSelector, READINESS_THRESHOLD};

// Re-export for downstream consumers
pub use pantry_recipe::{Diet, Recipe};
