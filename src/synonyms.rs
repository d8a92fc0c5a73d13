//! Synonym resolution for ingredient names.
//!
//! Maps informal or localized phrases ("petto di pollo", "spaghetti") to the
//! canonical vocabulary keys used by recipe key-ingredient slots ("chicken",
//! "pasta"). The table is many-to-one and non-transitive: canonical keys are
//! never themselves lookup keys. The builtin table is loaded from
//! `data/synonyms.json` at compile time.

use crate::error::CatalogError;
use crate::normalize::normalize;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// The raw JSON structure for the synonyms data file.
#[derive(Deserialize)]
struct SynonymData {
    phrases: HashMap<String, String>,
}

/// Immutable phrase → canonical key table. Loaded once and injected where
/// matching needs it; never mutated.
pub struct SynonymTable {
    phrases: HashMap<String, String>,
}

static BUILTIN: LazyLock<SynonymTable> = LazyLock::new(|| {
    let json = include_str!("../data/synonyms.json");
    SynonymTable::from_json(json).expect("synonyms.json should be valid JSON")
});

impl SynonymTable {
    /// Parse a table from JSON. Used by tests and by callers that ship
    /// their own vocabulary.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: SynonymData = serde_json::from_str(json)?;
        Ok(Self {
            phrases: data.phrases,
        })
    }

    /// The table embedded in the crate.
    pub fn builtin() -> &'static SynonymTable {
        &BUILTIN
    }

    /// Exact phrase lookup, no fallback.
    pub fn lookup(&self, phrase: &str) -> Option<&str> {
        self.phrases.get(phrase).map(String::as_str)
    }

    /// Resolve a phrase to its canonical key.
    ///
    /// The raw (lowercased, trimmed) phrase is checked first, then its
    /// normalized form. Unmapped input resolves to itself: that is a
    /// legitimate identity, not a failure.
    pub fn resolve(&self, text: &str) -> String {
        let raw = text.trim().to_lowercase();
        if let Some(canonical) = self.phrases.get(&raw) {
            return canonical.clone();
        }
        let normalized = normalize(&raw);
        if let Some(canonical) = self.phrases.get(&normalized) {
            return canonical.clone();
        }
        raw
    }

    /// All phrases mapping to the given canonical key.
    pub fn phrases_for<'a>(&'a self, canonical: &'a str) -> impl Iterator<Item = &'a str> {
        self.phrases
            .iter()
            .filter(move |(_, c)| c.as_str() == canonical)
            .map(|(p, _)| p.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_raw_phrase() {
        let table = SynonymTable::builtin();
        assert_eq!(table.resolve("petto di pollo"), "chicken");
        assert_eq!(table.resolve("spaghetti"), "pasta");
        assert_eq!(table.resolve("  Pomodorini "), "tomatoes");
    }

    #[test]
    fn test_resolves_after_normalization() {
        let table = SynonymTable::builtin();
        // "pomodorini freschi" is not in the table; "pomodorini" is.
        assert_eq!(table.resolve("pomodorini freschi"), "tomatoes");
        assert_eq!(table.resolve("250 g mozzarella"), "cheese");
    }

    #[test]
    fn test_unmapped_input_is_its_own_identity() {
        let table = SynonymTable::builtin();
        assert_eq!(table.resolve("tofu"), "tofu");
        assert_eq!(table.resolve("Tofu Affumicato"), "tofu affumicato");
    }

    #[test]
    fn test_not_transitive() {
        // "chicken" is a canonical key, never a lookup key.
        let table = SynonymTable::builtin();
        assert_eq!(table.lookup("chicken"), None);
        assert_eq!(table.resolve("chicken"), "chicken");
    }

    #[test]
    fn test_phrases_for_canonical() {
        let table = SynonymTable::builtin();
        let phrases: Vec<&str> = table.phrases_for("chicken").collect();
        assert!(phrases.contains(&"pollo"));
        assert!(phrases.contains(&"petto di pollo"));
        assert!(!phrases.contains(&"tofu"));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(SynonymTable::from_json("not json").is_err());
    }
}
