//! Profile and fridge data, and the external persistence boundary.
//!
//! The engine itself is stateless; the profile store owns storage and is
//! modeled as an async trait so the surrounding application can back it with
//! whatever it likes. The in-memory implementation exists for tests.

use crate::error::ProfileError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FridgeCategory {
    Base,
    Vegetable,
    Protein,
    Spice,
    Other,
}

/// Categorized ingredients the user has on hand. Entries are lowercased and
/// trimmed on write; uniqueness across categories is not enforced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FridgeInventory {
    #[serde(default)]
    pub base: Vec<String>,
    #[serde(default)]
    pub vegetable: Vec<String>,
    #[serde(default)]
    pub protein: Vec<String>,
    #[serde(default)]
    pub spice: Vec<String>,
    #[serde(default)]
    pub other: Vec<String>,
}

impl FridgeInventory {
    pub fn add(&mut self, category: FridgeCategory, name: &str) {
        let cleaned = name.trim().to_lowercase();
        if cleaned.is_empty() {
            return;
        }
        self.list_mut(category).push(cleaned);
    }

    fn list_mut(&mut self, category: FridgeCategory) -> &mut Vec<String> {
        match category {
            FridgeCategory::Base => &mut self.base,
            FridgeCategory::Vegetable => &mut self.vegetable,
            FridgeCategory::Protein => &mut self.protein,
            FridgeCategory::Spice => &mut self.spice,
            FridgeCategory::Other => &mut self.other,
        }
    }

    /// All items, categories merged in declaration order.
    pub fn flatten(&self) -> Vec<&str> {
        self.base
            .iter()
            .chain(&self.vegetable)
            .chain(&self.protein)
            .chain(&self.spice)
            .chain(&self.other)
            .map(String::as_str)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
            && self.vegetable.is_empty()
            && self.protein.is_empty()
            && self.spice.is_empty()
            && self.other.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Lunch,
    Dinner,
}

impl MealType {
    /// Dinner from 19:00 local, lunch otherwise.
    pub fn for_hour(hour: u32) -> Self {
        if hour >= 19 {
            MealType::Dinner
        } else {
            MealType::Lunch
        }
    }
}

/// One logged meal, indexed in history by local date key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealRecord {
    pub recipe_id: u32,
    pub recipe_name: String,
    pub emoji: String,
    pub meal_type: MealType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub user_id: String,
    #[serde(default)]
    pub fridge: FridgeInventory,
    /// Local date key (`YYYY-MM-DD`) → logged meal.
    #[serde(default)]
    pub meal_history: HashMap<String, MealRecord>,
}

impl UserProfile {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            fridge: FridgeInventory::default(),
            meal_history: HashMap::new(),
        }
    }

    /// Log a meal for a day, replacing any earlier entry for that day.
    pub fn record_meal(&mut self, date_key: &str, record: MealRecord) {
        self.meal_history.insert(date_key.to_string(), record);
    }

    /// The recipe chosen on the given day, if any.
    pub fn meal_on(&self, date_key: &str) -> Option<&MealRecord> {
        self.meal_history.get(date_key)
    }
}

/// Persistence boundary owned by the surrounding application.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn load_profile(&self, user_id: &str) -> Result<UserProfile, ProfileError>;
    async fn save_profile(&self, profile: &UserProfile) -> Result<(), ProfileError>;
}

/// Replace the profile's fridge and persist it optimistically.
///
/// On save failure the previous fridge is restored, so a failed save never
/// leaves the in-memory profile ahead of the store. The error is returned
/// to the caller as a recoverable condition.
pub async fn update_fridge(
    store: &dyn ProfileStore,
    profile: &mut UserProfile,
    new_fridge: FridgeInventory,
) -> Result<(), ProfileError> {
    let previous = std::mem::replace(&mut profile.fridge, new_fridge);
    if let Err(err) = store.save_profile(profile).await {
        warn!(user_id = %profile.user_id, error = %err, "fridge save failed, rolling back");
        profile.fridge = previous;
        return Err(err);
    }
    Ok(())
}

/// In-memory store for tests, with a toggle to make saves fail.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: Mutex<HashMap<String, UserProfile>>,
    fail_saves: AtomicBool,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn load_profile(&self, user_id: &str) -> Result<UserProfile, ProfileError> {
        let profiles = self.profiles.lock().expect("profiles lock");
        profiles
            .get(user_id)
            .cloned()
            .ok_or_else(|| ProfileError::NotFound(user_id.to_string()))
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(ProfileError::SaveFailed("simulated failure".to_string()));
        }
        let mut profiles = self.profiles.lock().expect("profiles lock");
        profiles.insert(profile.user_id.clone(), profile.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_normalizes_on_write() {
        let mut fridge = FridgeInventory::default();
        fridge.add(FridgeCategory::Protein, "  Petto di Pollo ");
        fridge.add(FridgeCategory::Base, "");
        assert_eq!(fridge.protein, vec!["petto di pollo"]);
        assert!(fridge.base.is_empty());
    }

    #[test]
    fn test_flatten_preserves_category_order() {
        let mut fridge = FridgeInventory::default();
        fridge.add(FridgeCategory::Other, "senape");
        fridge.add(FridgeCategory::Base, "riso");
        fridge.add(FridgeCategory::Protein, "uova");
        assert_eq!(fridge.flatten(), vec!["riso", "uova", "senape"]);
    }

    #[test]
    fn test_is_empty() {
        let mut fridge = FridgeInventory::default();
        assert!(fridge.is_empty());
        fridge.add(FridgeCategory::Spice, "origano");
        assert!(!fridge.is_empty());
    }

    #[test]
    fn test_meal_type_for_hour() {
        assert_eq!(MealType::for_hour(12), MealType::Lunch);
        assert_eq!(MealType::for_hour(18), MealType::Lunch);
        assert_eq!(MealType::for_hour(19), MealType::Dinner);
        assert_eq!(MealType::for_hour(23), MealType::Dinner);
    }

    #[test]
    fn test_record_meal_replaces_same_day() {
        let mut profile = UserProfile::new("u1");
        let lunch = MealRecord {
            recipe_id: 1,
            recipe_name: "a".to_string(),
            emoji: "x".to_string(),
            meal_type: MealType::Lunch,
        };
        let dinner = MealRecord {
            recipe_id: 2,
            recipe_name: "b".to_string(),
            emoji: "y".to_string(),
            meal_type: MealType::Dinner,
        };
        profile.record_meal("2024-01-05", lunch);
        profile.record_meal("2024-01-05", dinner.clone());
        assert_eq!(profile.meal_on("2024-01-05"), Some(&dinner));
        assert_eq!(profile.meal_on("2024-01-04"), None);
    }

    #[tokio::test]
    async fn test_store_round_trip() {
        let store = InMemoryProfileStore::new();
        let mut profile = UserProfile::new("u1");
        profile.fridge.add(FridgeCategory::Base, "riso");
        store.save_profile(&profile).await.expect("save");

        let loaded = store.load_profile("u1").await.expect("load");
        assert_eq!(loaded, profile);
        assert!(matches!(
            store.load_profile("nobody").await,
            Err(ProfileError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_fridge_rolls_back_on_failure() {
        let store = InMemoryProfileStore::new();
        let mut profile = UserProfile::new("u1");
        profile.fridge.add(FridgeCategory::Base, "riso");
        store.save_profile(&profile).await.expect("save");
        let known_good = profile.fridge.clone();

        let mut new_fridge = FridgeInventory::default();
        new_fridge.add(FridgeCategory::Base, "pasta");

        store.set_fail_saves(true);
        let result = update_fridge(&store, &mut profile, new_fridge.clone()).await;
        assert!(matches!(result, Err(ProfileError::SaveFailed(_))));
        assert_eq!(profile.fridge, known_good);

        store.set_fail_saves(false);
        update_fridge(&store, &mut profile, new_fridge.clone())
            .await
            .expect("save");
        assert_eq!(profile.fridge, new_fridge);
        let loaded = store.load_profile("u1").await.expect("load");
        assert_eq!(loaded.fridge, new_fridge);
    }
}
