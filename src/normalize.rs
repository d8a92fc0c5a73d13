//! Ingredient text normalization.
//!
//! Strips the noise that keeps two spellings of the same ingredient from
//! comparing equal: quantities ("250 g", "½"), measurement units (IT + EN),
//! and qualifier words ("fresco", "chopped"). The stripping order matters:
//! quantities first, then units, then qualifiers, so a qualifier regex never
//! runs against leftover numeric fragments.

use regex::Regex;
use std::sync::LazyLock;

/// Words stripped during normalization. Purely destructive, not reversible.
/// Matched longest-first so that "a cubetti" is removed as a phrase before
/// a shorter entry could split it.
const QUALIFIER_WORDS: &[&str] = &[
    "in scatola",
    "sott'olio",
    "sott'aceto",
    "al naturale",
    "fresco",
    "fresca",
    "freschi",
    "fresche",
    "surgelato",
    "surgelata",
    "surgelati",
    "surgelate",
    "secco",
    "secca",
    "secchi",
    "secche",
    "biologico",
    "biologica",
    "bio",
    "integrale",
    "integrali",
    "affumicato",
    "affumicata",
    "macinato",
    "macinata",
    "tritato",
    "tritata",
    "tritati",
    "grattugiato",
    "grattugiata",
    "a cubetti",
    "a fette",
    "a rondelle",
    "a listarelle",
    "a pezzetti",
    "canned",
    "frozen",
    "fresh",
    "dried",
    "organic",
    "smoked",
    "diced",
    "sliced",
    "chopped",
    "grated",
    "minced",
    "di",
    "del",
    "della",
    "delle",
    "dei",
    "degli",
];

/// Numeric quantities, decimals, and unicode fractions.
static QUANTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d½¼¾⅓⅔.,]+\s*").expect("quantity regex should compile"));

/// Measurement units, Italian and English, on word boundaries.
static UNITS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(g|gr|kg|ml|l|cl|dl|cucchiai[oa]?|cucchiaino|cucchiaini|tazzina|tazza|fett[ae]|spicchi[o]?|pizzico|q\.?\s?b\.?|tbsp|tsp|cups?|oz|lb|pieces?|slices?|cloves?|pinch|handful)\b",
    )
    .expect("units regex should compile")
});

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex should compile"));

/// Qualifier word regexes, compiled once and sorted longest-first.
static QUALIFIER_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let mut words = QUALIFIER_WORDS.to_vec();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    words
        .into_iter()
        .map(|w| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(w)))
                .expect("qualifier regex should compile")
        })
        .collect()
});

/// Normalize an ingredient phrase for matching.
///
/// Lowercases, then removes quantities, units, and qualifier words in that
/// order, and collapses whitespace. Idempotent. An empty result is valid:
/// it means the phrase carried no ingredient identity ("2 cucchiai").
pub fn normalize(text: &str) -> String {
    let mut normalized = text.trim().to_lowercase();
    normalized = QUANTITY_RE.replace_all(&normalized, "").into_owned();
    normalized = UNITS_RE.replace_all(&normalized, "").into_owned();
    for re in QUALIFIER_RES.iter() {
        normalized = re.replace_all(&normalized, "").into_owned();
    }
    WHITESPACE_RE.replace_all(&normalized, " ").trim().to_string()
}
