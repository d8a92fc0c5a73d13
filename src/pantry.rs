//! Pantry staple detection and per-ingredient status for the detail view.
//!
//! Every recipe ingredient line gets one of three statuses: `pantry`
//! (assumed always available, wins over everything), `inFridge`, or
//! `missing`. Pantry keywords deliberately mix Italian and English and are
//! matched against all of them regardless of UI language.

use crate::catalog::{Language, Recipe};
use crate::i18n::Translator;
use crate::matching::ingredients_match;
use crate::normalize::normalize;
use crate::profile::FridgeInventory;
use crate::ranker::evaluate_recipe;
use crate::synonyms::SynonymTable;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Staple keywords, both languages. Matched longest-first with word
/// boundaries: "pepe" and "pepper" must not fire inside "peperoni" or
/// "peppers".
const PANTRY_KEYWORDS: &[&str] = &[
    "sale", "salt", "olio", "oil", "pepe", "pepper", "acqua", "water", "aglio", "garlic",
    "zucchero", "sugar",
];

static PANTRY_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let mut keywords = PANTRY_KEYWORDS.to_vec();
    keywords.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    keywords
        .into_iter()
        .map(|k| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(k)))
                .expect("pantry keyword regex should compile")
        })
        .collect()
});

/// Status of one recipe ingredient line for the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IngredientStatus {
    Pantry,
    InFridge,
    Missing,
}

/// An ingredient name plus its display aliases (localized labels), so
/// matching sees what the user sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasedItem {
    pub name: String,
    pub aliases: Vec<String>,
}

impl AliasedItem {
    fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// True if the line mentions an always-available staple.
pub fn is_pantry_staple(line: &str) -> bool {
    PANTRY_RES.iter().any(|re| re.is_match(line))
}

/// Build aliased records for canonical key-ingredient names.
pub fn key_aliases(keys: &[String], translator: &dyn Translator) -> Vec<AliasedItem> {
    keys.iter()
        .map(|key| {
            let label = translator.translate(&format!("ingredients.{key}"), key);
            let aliases = if label == *key { vec![] } else { vec![label] };
            AliasedItem {
                name: key.clone(),
                aliases,
            }
        })
        .collect()
}

/// Build aliased records for fridge items.
pub fn fridge_aliases(items: &[&str], translator: &dyn Translator) -> Vec<AliasedItem> {
    items
        .iter()
        .map(|item| {
            let label = translator.translate(&format!("ingredients.{item}"), item);
            let aliases = if label == *item { vec![] } else { vec![label] };
            AliasedItem {
                name: item.to_string(),
                aliases,
            }
        })
        .collect()
}

/// Containment check used for the alias passes: raw both ways, then
/// normalized both ways, only between non-empty strings.
fn loosely_contains(candidate: &str, line_raw: &str, line_norm: &str) -> bool {
    let c = candidate.trim().to_lowercase();
    if c.is_empty() || line_raw.is_empty() {
        return false;
    }
    if c.contains(line_raw) || line_raw.contains(&c) {
        return true;
    }
    let nc = normalize(&c);
    !nc.is_empty()
        && !line_norm.is_empty()
        && (nc.contains(line_norm) || line_norm.contains(&nc))
}

/// Classify one recipe ingredient line.
///
/// Pantry always wins. Otherwise the line is checked, in order, against the
/// matched key-ingredient aliases, the fridge items (with their localized
/// aliases), and finally the fuzzy `ingredients_match` contract; the first
/// positive result wins, else `missing`. Total: any input degrades to
/// `missing`, never an error.
pub fn classify_ingredient(
    line: &str,
    matched_keys: &[AliasedItem],
    fridge_items: &[AliasedItem],
    synonyms: &SynonymTable,
) -> IngredientStatus {
    if is_pantry_staple(line) {
        return IngredientStatus::Pantry;
    }

    let raw = line.trim().to_lowercase();
    let norm = normalize(&raw);

    for item in matched_keys.iter().chain(fridge_items) {
        if item.names().any(|name| loosely_contains(name, &raw, &norm)) {
            return IngredientStatus::InFridge;
        }
    }

    for item in fridge_items {
        if item
            .names()
            .any(|name| ingredients_match(name, line, synonyms))
        {
            return IngredientStatus::InFridge;
        }
    }

    IngredientStatus::Missing
}

/// One line of the detail view's ingredient list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClassifiedIngredient {
    pub text: String,
    pub status: IngredientStatus,
}

/// Classify a recipe's full ingredient list for the detail view.
///
/// Key-ingredient aliases are built only for keys the fridge actually
/// covers, so a missing key ingredient shows as `missing`, not `inFridge`.
pub fn classify_recipe_ingredients(
    recipe: &Recipe,
    lang: Language,
    fridge: &FridgeInventory,
    translator: &dyn Translator,
    synonyms: &SynonymTable,
) -> Vec<ClassifiedIngredient> {
    let items = fridge.flatten();
    let matches = evaluate_recipe(recipe, &items, synonyms);
    let matched_keys = key_aliases(&matches.in_fridge, translator);
    let fridge_items = fridge_aliases(&items, translator);

    recipe
        .ingredients
        .get(lang)
        .iter()
        .map(|ingredient| ClassifiedIngredient {
            text: ingredient.name.clone(),
            status: classify_ingredient(&ingredient.name, &matched_keys, &fridge_items, synonyms),
        })
        .collect()
}

/// The lines the user still needs to buy.
pub fn shopping_list(classified: &[ClassifiedIngredient]) -> Vec<&str> {
    classified
        .iter()
        .filter(|c| c.status == IngredientStatus::Missing)
        .map(|c| c.text.as_str())
        .collect()
}
