//! Localization collaborator boundary.
//!
//! Translation strings live in the surrounding application; the engine only
//! needs `translate(key, fallback)` to build display aliases for matching.

pub trait Translator {
    /// Translate a key, returning the fallback when no translation exists.
    fn translate(&self, key: &str, fallback: &str) -> String;
}

/// Identity translator: every key resolves to its fallback. Useful in tests
/// and wherever matching should see only the stored names.
pub struct NoTranslations;

impl Translator for NoTranslations {
    fn translate(&self, _key: &str, fallback: &str) -> String {
        fallback.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_translations_returns_fallback() {
        assert_eq!(NoTranslations.translate("ingredients.pollo", "pollo"), "pollo");
    }
}
