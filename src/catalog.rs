//! The static recipe catalog.
//!
//! Recipes are immutable records loaded once (from embedded JSON by default)
//! and read-only for the lifetime of the process. Legacy catalog data mixes
//! plain-string and structured ingredient/step entries; both shapes are
//! accepted at load time through untagged raw enums and resolved into a
//! single tagged form, so nothing downstream ever inspects shapes again.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    It,
    En,
}

/// A per-language pair. Catalog text is authored in both supported languages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Localized<T> {
    pub it: T,
    pub en: T,
}

impl<T> Localized<T> {
    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::It => &self.it,
            Language::En => &self.en,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Nutrition {
    pub kcal: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

/// The three key-ingredient slots. Values are canonical vocabulary keys,
/// shared with the synonym table's targets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyIngredients {
    pub base: String,
    pub vegetable: String,
    pub protein: String,
}

impl KeyIngredients {
    pub fn as_array(&self) -> [&str; 3] {
        [&self.base, &self.vegetable, &self.protein]
    }
}

/// An ingredient line, resolved at load time. `quantity` is `None` for
/// entries authored as plain text without structured amounts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: Option<String>,
}

/// A preparation step, resolved at load time.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Step {
    pub text: String,
    pub time_minutes: Option<u32>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recipe {
    pub id: u32,
    pub name: Localized<String>,
    pub description: Localized<String>,
    pub emoji: String,
    pub prep_time_minutes: u32,
    pub difficulty: Difficulty,
    pub portions: u32,
    pub tags: Vec<String>,
    pub nutrition: Nutrition,
    pub key_ingredients: KeyIngredients,
    pub ingredients: Localized<Vec<Ingredient>>,
    pub steps: Localized<Vec<Step>>,
}

/// Tag-based filter over the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagFilter {
    All,
    Tag(String),
}

impl TagFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => recipe.tags.iter().any(|t| t == tag),
        }
    }
}

// Raw (wire) shapes. Legacy entries are plain strings; newer entries carry
// structured quantity/time metadata.

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIngredient {
    Structured {
        name: String,
        #[serde(default)]
        quantity: Option<String>,
    },
    Text(String),
}

impl From<RawIngredient> for Ingredient {
    fn from(raw: RawIngredient) -> Self {
        match raw {
            RawIngredient::Text(name) => Ingredient {
                name,
                quantity: None,
            },
            RawIngredient::Structured { name, quantity } => Ingredient { name, quantity },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStep {
    Structured {
        text: String,
        #[serde(default)]
        time_minutes: Option<u32>,
    },
    Text(String),
}

impl From<RawStep> for Step {
    fn from(raw: RawStep) -> Self {
        match raw {
            RawStep::Text(text) => Step {
                text,
                time_minutes: None,
            },
            RawStep::Structured { text, time_minutes } => Step { text, time_minutes },
        }
    }
}

#[derive(Deserialize)]
struct RawRecipe {
    id: u32,
    name: Localized<String>,
    description: Localized<String>,
    emoji: String,
    prep_time_minutes: u32,
    difficulty: Difficulty,
    portions: u32,
    #[serde(default)]
    tags: Vec<String>,
    nutrition: Nutrition,
    key_ingredients: KeyIngredients,
    ingredients: Localized<Vec<RawIngredient>>,
    steps: Localized<Vec<RawStep>>,
}

impl From<RawRecipe> for Recipe {
    fn from(raw: RawRecipe) -> Self {
        let resolve_ingredients =
            |v: Vec<RawIngredient>| v.into_iter().map(Ingredient::from).collect();
        let resolve_steps = |v: Vec<RawStep>| v.into_iter().map(Step::from).collect();
        Recipe {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            emoji: raw.emoji,
            prep_time_minutes: raw.prep_time_minutes,
            difficulty: raw.difficulty,
            portions: raw.portions,
            tags: raw.tags,
            nutrition: raw.nutrition,
            key_ingredients: raw.key_ingredients,
            ingredients: Localized {
                it: resolve_ingredients(raw.ingredients.it),
                en: resolve_ingredients(raw.ingredients.en),
            },
            steps: Localized {
                it: resolve_steps(raw.steps.it),
                en: resolve_steps(raw.steps.en),
            },
        }
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    recipes: Vec<RawRecipe>,
}

/// Parse a catalog from JSON, resolving legacy dual-shape entries once.
pub fn load_catalog(json: &str) -> Result<Vec<Recipe>, CatalogError> {
    let file: CatalogFile = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    let recipes: Vec<Recipe> = file.recipes.into_iter().map(Recipe::from).collect();
    for recipe in &recipes {
        if !seen.insert(recipe.id) {
            return Err(CatalogError::DuplicateId(recipe.id));
        }
    }
    debug!(count = recipes.len(), "catalog loaded");
    Ok(recipes)
}

static BUILTIN: LazyLock<Vec<Recipe>> = LazyLock::new(|| {
    let json = include_str!("../data/recipes.json");
    load_catalog(json).expect("recipes.json should be a valid catalog")
});

/// The catalog embedded in the crate.
pub fn builtin_catalog() -> &'static [Recipe] {
    &BUILTIN
}

/// Look up a recipe by id.
pub fn find_recipe(catalog: &[Recipe], id: u32) -> Option<&Recipe> {
    catalog.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = builtin_catalog();
        assert!(!catalog.is_empty());
        // Ids are unique and every recipe has both languages populated.
        for recipe in catalog {
            assert!(!recipe.name.it.is_empty());
            assert!(!recipe.name.en.is_empty());
            assert!(!recipe.ingredients.it.is_empty());
            assert!(!recipe.steps.en.is_empty());
        }
    }

    #[test]
    fn test_dual_shape_entries_resolve_identically() {
        let json = r#"{
            "recipes": [{
                "id": 1,
                "name": {"it": "Prova", "en": "Test"},
                "description": {"it": "d", "en": "d"},
                "emoji": "x",
                "prep_time_minutes": 5,
                "difficulty": "easy",
                "portions": 1,
                "tags": [],
                "nutrition": {"kcal": 1, "protein": 1, "carbs": 1, "fat": 1},
                "key_ingredients": {"base": "rice", "vegetable": "peas", "protein": "eggs"},
                "ingredients": {
                    "it": ["riso", {"name": "riso"}],
                    "en": [{"name": "rice", "quantity": "100 g"}, "rice"]
                },
                "steps": {
                    "it": ["cuoci", {"text": "cuoci"}],
                    "en": [{"text": "cook", "time_minutes": 10}, "cook"]
                }
            }]
        }"#;
        let catalog = load_catalog(json).expect("catalog should load");
        let recipe = &catalog[0];

        // Plain text and structured-without-quantity produce the same record.
        assert_eq!(recipe.ingredients.it[0], recipe.ingredients.it[1]);
        assert_eq!(recipe.ingredients.en[0].quantity, Some("100 g".to_string()));
        assert_eq!(recipe.steps.it[0], recipe.steps.it[1]);
        assert_eq!(recipe.steps.en[0].time_minutes, Some(10));
        assert_eq!(recipe.steps.en[1].time_minutes, None);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{
            "recipes": [
                {"id": 1, "name": {"it": "a", "en": "a"}, "description": {"it": "d", "en": "d"},
                 "emoji": "x", "prep_time_minutes": 5, "difficulty": "easy", "portions": 1,
                 "nutrition": {"kcal": 1, "protein": 1, "carbs": 1, "fat": 1},
                 "key_ingredients": {"base": "rice", "vegetable": "peas", "protein": "eggs"},
                 "ingredients": {"it": [], "en": []}, "steps": {"it": [], "en": []}},
                {"id": 1, "name": {"it": "b", "en": "b"}, "description": {"it": "d", "en": "d"},
                 "emoji": "x", "prep_time_minutes": 5, "difficulty": "easy", "portions": 1,
                 "nutrition": {"kcal": 1, "protein": 1, "carbs": 1, "fat": 1},
                 "key_ingredients": {"base": "rice", "vegetable": "peas", "protein": "eggs"},
                 "ingredients": {"it": [], "en": []}, "steps": {"it": [], "en": []}}
            ]
        }"#;
        assert!(matches!(
            load_catalog(json),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn test_tag_filter() {
        let catalog = builtin_catalog();
        let veg = TagFilter::Tag("vegetarian".to_string());
        assert!(catalog.iter().any(|r| veg.matches(r)));
        assert!(catalog.iter().any(|r| !veg.matches(r)));
        assert!(catalog.iter().all(|r| TagFilter::All.matches(r)));
    }

    #[test]
    fn test_find_recipe() {
        let catalog = builtin_catalog();
        assert!(find_recipe(catalog, 1).is_some());
        assert!(find_recipe(catalog, 9999).is_none());
    }
}
