//! The two fridge↔recipe match contracts.
//!
//! Both functions are pure, total, and binary: they never fail and never
//! return partial-credit scores. `matches_key_ingredient` compares a fridge
//! entry against a recipe's canonical key-ingredient slot;
//! `ingredients_match` compares it against a free-text recipe ingredient
//! line, which needs broader heuristics up to word-level synonym matching.

use crate::normalize::normalize;
use crate::synonyms::SynonymTable;

/// True if the fridge item satisfies a recipe key-ingredient slot.
///
/// Checks, in priority order: exact equality, raw substring containment in
/// either direction, normalized containment, synonym-canonical equality, and
/// finally containment against any synonym phrase sharing the key's
/// canonical target.
pub fn matches_key_ingredient(fridge_item: &str, key_ingredient: &str, synonyms: &SynonymTable) -> bool {
    let fi = fridge_item.trim().to_lowercase();
    let key = key_ingredient.trim().to_lowercase();
    if fi.is_empty() || key.is_empty() {
        return false;
    }

    if fi == key {
        return true;
    }
    if fi.contains(&key) || key.contains(&fi) {
        return true;
    }

    let nfi = normalize(&fi);
    if !nfi.is_empty() && (nfi == key || nfi.contains(&key) || key.contains(&nfi)) {
        return true;
    }

    // Does the fridge item map to the same canonical key?
    let fi_canonical = synonyms.lookup(&fi).or_else(|| synonyms.lookup(&nfi));
    if fi_canonical == Some(key.as_str()) {
        return true;
    }

    // Does any phrase with the key's canonical target substring-match?
    let matched = synonyms.phrases_for(&key).any(|phrase| {
        fi.contains(phrase)
            || phrase.contains(&fi)
            || (!nfi.is_empty() && (nfi.contains(phrase) || phrase.contains(&nfi)))
    });
    matched
}

/// True if the fridge item matches a free-text recipe ingredient line.
///
/// Recipe lines are full phrases ("2 foglie di basilico fresco"), so after
/// the containment and canonical checks this falls back to word-level
/// decomposition: both normalized strings are split into tokens longer than
/// two characters, each token is resolved through the synonym table, and any
/// shared canonical form is a match.
pub fn ingredients_match(fridge_item: &str, recipe_line: &str, synonyms: &SynonymTable) -> bool {
    let fi = fridge_item.trim().to_lowercase();
    let ri = recipe_line.trim().to_lowercase();
    if fi.is_empty() || ri.is_empty() {
        return false;
    }

    if fi.contains(&ri) || ri.contains(&fi) {
        return true;
    }

    let nfi = normalize(&fi);
    let nri = normalize(&ri);
    if !nfi.is_empty() && !nri.is_empty() && (nfi.contains(&nri) || nri.contains(&nfi)) {
        return true;
    }

    // Resolve both sides independently and compare canonical forms.
    let fi_canonical = synonyms.resolve(&fi);
    let ri_canonical = synonyms.resolve(&ri);
    if fi_canonical == ri_canonical {
        return true;
    }

    if ri.contains(&fi_canonical) || (!nri.is_empty() && fi_canonical.contains(&nri)) {
        return true;
    }
    if fi.contains(&ri_canonical) || (!nfi.is_empty() && ri_canonical.contains(&nfi)) {
        return true;
    }

    // Word-level fallback.
    for fw in nfi.split_whitespace().filter(|w| w.chars().count() > 2) {
        let fw_canonical = synonyms.lookup(fw).unwrap_or(fw);
        if fw_canonical.chars().count() <= 2 {
            continue;
        }
        for rw in nri.split_whitespace().filter(|w| w.chars().count() > 2) {
            let rw_canonical = synonyms.lookup(rw).unwrap_or(rw);
            if fw_canonical == rw_canonical {
                return true;
            }
        }
    }

    false
}
