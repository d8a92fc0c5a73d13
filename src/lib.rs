//! Fridge-to-recipe matching and recommendation engine.
//!
//! Given a user's on-hand ingredients and a static recipe catalog, this
//! crate classifies ingredient compatibility, partitions recipes into
//! match-quality tiers, and produces a reproducible, deterministically
//! shuffled suggestion list. The whole engine is a pure function of its
//! inputs: the only long-lived data are the immutable synonym, qualifier,
//! and catalog tables, loaded once at startup. Persistence and translation
//! are external collaborators behind traits.

pub mod catalog;
pub mod date_key;
pub mod error;
pub mod i18n;
pub mod matching;
pub mod normalize;
pub mod pantry;
pub mod profile;
pub mod ranker;
pub mod shuffle;
pub mod synonyms;

pub use catalog::{
    builtin_catalog, find_recipe, load_catalog, Difficulty, Ingredient, KeyIngredients, Language,
    Localized, Nutrition, Recipe, Step, TagFilter,
};
pub use date_key::{local_date_key, today_local_date_key};
pub use error::{CatalogError, ProfileError};
pub use i18n::{NoTranslations, Translator};
pub use matching::{ingredients_match, matches_key_ingredient};
pub use normalize::normalize;
pub use pantry::{
    classify_ingredient, classify_recipe_ingredients, is_pantry_staple, shopping_list,
    AliasedItem, ClassifiedIngredient, IngredientStatus,
};
pub use profile::{
    update_fridge, FridgeCategory, FridgeInventory, InMemoryProfileStore, MealRecord, MealType,
    ProfileStore, UserProfile,
};
pub use ranker::{
    evaluate_recipe, suggest, MatchResult, RankedSuggestion, SuggestionSeed, ANONYMOUS_USER,
    SUGGESTION_COUNT,
};
pub use shuffle::{hash_seed, seeded_pick, seeded_shuffle, Mulberry32};
pub use synonyms::SynonymTable;
