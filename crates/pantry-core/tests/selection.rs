//! Integration tests for selecting recipes from file-backed collections

use std::cell::Cell;
use std::io::Write;

use pantry_core::{Diet, ReadinessMap, Recipe, RecipeSelector, StaticReadiness};
use pantry_recipe::JsonRecipeStore;
use tempfile::NamedTempFile;

const RECIPES_JSON: &str = r#"[
    {"name": "First", "diets": ["vegan"], "ingredients": {"a": 1, "b": 2, "c": 3}},
    {"name": "Second", "diets": ["vegetarian", "normal"], "ingredients": {"x": 10, "y": 20, "z": 30}}
]"#;

fn write_json(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn sample_selector() -> RecipeSelector {
    let file = write_json(RECIPES_JSON);
    RecipeSelector::from_store(&JsonRecipeStore::new(file.path())).unwrap()
}

fn static_readiness(json: &str) -> StaticReadiness {
    let file = write_json(json);
    StaticReadiness::from_path(file.path()).unwrap()
}

#[test]
fn test_first_match_for_vegan() {
    let selector = sample_selector();
    let readiness = static_readiness(r#"{"First": 0.9, "Second": 0.8}"#);
    assert_eq!(
        selector.select(Diet::Vegan, false, &readiness).as_deref(),
        Some("First")
    );
}

#[test]
fn test_best_match_for_normal() {
    let selector = sample_selector();
    let readiness = static_readiness(r#"{"First": 0.9, "Second": 0.8}"#);
    assert_eq!(
        selector.select(Diet::Normal, true, &readiness).as_deref(),
        Some("Second")
    );
}

#[test]
fn test_low_readiness_selects_nothing() {
    let selector = sample_selector();
    let readiness = static_readiness(r#"{"First": 0.05, "Second": 0.04}"#);
    assert_eq!(selector.select(Diet::Vegan, true, &readiness), None);
}

#[test]
fn test_empty_collection_selects_nothing() {
    let file = write_json("[]");
    let selector = RecipeSelector::from_store(&JsonRecipeStore::new(file.path())).unwrap();
    let readiness = static_readiness("{}");
    assert_eq!(selector.select(Diet::Vegan, true, &readiness), None);
}

#[test]
fn test_single_eligible_candidate_ignores_mode() {
    let selector = RecipeSelector::new(vec![
        Recipe::new("Tofu Bowl", [Diet::Vegan]),
        Recipe::new("Lentil Soup", [Diet::Vegan, Diet::Vegetarian]),
        Recipe::new("Hummus", [Diet::Vegan]),
    ]);
    let readiness = |_: &[&Recipe]| -> ReadinessMap {
        ReadinessMap::from([
            ("Tofu Bowl".to_string(), 0.02),
            ("Lentil Soup".to_string(), 0.7),
            ("Hummus".to_string(), 0.1),
        ])
    };
    for take_best in [true, false] {
        assert_eq!(
            selector.select(Diet::Vegan, take_best, &readiness).as_deref(),
            Some("Lentil Soup")
        );
    }
}

#[test]
fn test_no_compatible_recipes_for_any_readiness() {
    let selector = RecipeSelector::new(vec![Recipe::new("Steak", [Diet::Normal])]);
    let readiness = |candidates: &[&Recipe]| -> ReadinessMap {
        candidates
            .iter()
            .map(|recipe| (recipe.name.clone(), 1.0))
            .collect()
    };
    assert_eq!(selector.select(Diet::Vegan, true, &readiness), None);
    assert_eq!(selector.select(Diet::Vegetarian, false, &readiness), None);
}

#[test]
fn test_tied_best_is_one_of_the_tied() {
    let selector = RecipeSelector::new(vec![
        Recipe::new("Chickpea Curry", [Diet::Vegan, Diet::Normal]),
        Recipe::new("Omelette", [Diet::Vegetarian]),
        Recipe::new("Falafel Wrap", [Diet::Vegan]),
    ]);
    let seen = Cell::new(0);
    let readiness = |candidates: &[&Recipe]| -> ReadinessMap {
        seen.set(candidates.len());
        ReadinessMap::from([
            ("Chickpea Curry".to_string(), 0.9),
            ("Falafel Wrap".to_string(), 0.9),
        ])
    };

    let result = selector.select(Diet::Vegan, true, &readiness).unwrap();
    assert_eq!(seen.get(), 2);
    assert!(["Chickpea Curry", "Falafel Wrap"].contains(&result.as_str()));
    // Ties go to the recipe listed first.
    assert_eq!(result, "Chickpea Curry");
}
