//! Tiered, reproducibly-shuffled recipe suggestions.
//!
//! Recipes are tiered by how many key ingredients the fridge is missing
//! (perfect: 0, almost: 1, rest: 2+). Tier membership depends only on
//! fridge, catalog, and filter; order inside a tier comes from one seeded
//! generator, so identical seed tuples reproduce the list byte for byte and
//! bumping the refresh counter reshuffles without moving anything across
//! tiers.

use crate::catalog::{Recipe, TagFilter};
use crate::matching::matches_key_ingredient;
use crate::profile::FridgeInventory;
use crate::shuffle::Mulberry32;
use crate::synonyms::SynonymTable;
use serde::Serialize;
use tracing::debug;

/// How many suggestions the dashboard shows.
pub const SUGGESTION_COUNT: usize = 3;

/// Seed component for users that are not signed in.
pub const ANONYMOUS_USER: &str = "anonymous";

/// Which of a recipe's key ingredients the fridge covers.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MatchResult {
    pub in_fridge: Vec<String>,
    pub missing: Vec<String>,
}

impl MatchResult {
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }
}

/// Evaluate one recipe's three key slots against the flattened fridge.
pub fn evaluate_recipe(
    recipe: &Recipe,
    fridge_items: &[&str],
    synonyms: &SynonymTable,
) -> MatchResult {
    let mut in_fridge = Vec::new();
    let mut missing = Vec::new();
    for key in recipe.key_ingredients.as_array() {
        if fridge_items
            .iter()
            .any(|item| matches_key_ingredient(item, key, synonyms))
        {
            in_fridge.push(key.to_string());
        } else {
            missing.push(key.to_string());
        }
    }
    MatchResult { in_fridge, missing }
}

/// The reproducibility tuple. Same date, user, and refresh counter → same
/// suggestion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionSeed {
    pub date_key: String,
    pub user_id: Option<String>,
    pub refresh_counter: u32,
}

impl SuggestionSeed {
    pub fn new(date_key: impl Into<String>, user_id: Option<String>, refresh_counter: u32) -> Self {
        Self {
            date_key: date_key.into(),
            user_id,
            refresh_counter,
        }
    }

    /// The string fed to the seed hash.
    pub fn seed_string(&self) -> String {
        format!(
            "{}|{}|{}",
            self.date_key,
            self.user_id.as_deref().unwrap_or(ANONYMOUS_USER),
            self.refresh_counter
        )
    }
}

/// A suggested recipe with its match breakdown attached.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedSuggestion<'a> {
    pub recipe: &'a Recipe,
    pub matches: MatchResult,
}

/// Build the suggestion list.
///
/// Filters the catalog, evaluates key-ingredient matches, partitions into
/// perfect/almost/rest tiers, shuffles each tier with a generator seeded
/// from the tuple, concatenates perfect → almost → rest, and truncates to
/// `count`.
///
/// `yesterday` is the previous day's chosen recipe id. It is accepted for
/// the callers that track it, but it does not exclude or demote anything;
/// that mirrors the app's observed behavior.
pub fn suggest<'a>(
    catalog: &'a [Recipe],
    fridge: &FridgeInventory,
    filter: &TagFilter,
    seed: &SuggestionSeed,
    yesterday: Option<u32>,
    count: usize,
) -> Vec<RankedSuggestion<'a>> {
    let fridge_items = fridge.flatten();
    let synonyms = SynonymTable::builtin();

    let mut perfect = Vec::new();
    let mut almost = Vec::new();
    let mut rest = Vec::new();

    for recipe in catalog.iter().filter(|r| filter.matches(r)) {
        let matches = evaluate_recipe(recipe, &fridge_items, synonyms);
        let suggestion = RankedSuggestion { recipe, matches };
        match suggestion.matches.missing_count() {
            0 => perfect.push(suggestion),
            1 => almost.push(suggestion),
            _ => rest.push(suggestion),
        }
    }

    debug!(
        seed = %seed.seed_string(),
        perfect = perfect.len(),
        almost = almost.len(),
        rest = rest.len(),
        ?yesterday,
        "ranking recipes"
    );

    let mut rng = Mulberry32::from_seed_str(&seed.seed_string());
    rng.shuffle(&mut perfect);
    rng.shuffle(&mut almost);
    rng.shuffle(&mut rest);

    let mut out = perfect;
    out.append(&mut almost);
    out.append(&mut rest);
    out.truncate(count);
    out
}
