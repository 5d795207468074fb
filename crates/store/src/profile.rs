use serde::de::DeserializeOwned;
use serde::Serialize;

use tui_match3_types::{ItemCounts, Records, Settings};

use crate::kv::KvStore;
use crate::StoreError;

pub const HIGH_SCORE_KEY: &str = "match3_highscore";
pub const ITEMS_KEY: &str = "match3_items";
pub const SETTINGS_KEY: &str = "match3_settings";

/// Typed access to the persisted player records
#[derive(Debug, Clone)]
pub struct Profile<S> {
    store: S,
}

impl<S: KvStore> Profile<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Everything at once; absent values fall back to fresh-player defaults
    pub fn load(&self) -> Records {
        let fresh = Records::fresh();
        Records {
            high_score: self.high_score(),
            items: self.read_json(ITEMS_KEY).unwrap_or(fresh.items),
            settings: self.read_json(SETTINGS_KEY).unwrap_or(fresh.settings),
        }
    }

    pub fn save(&mut self, records: &Records) -> Result<(), StoreError> {
        self.save_high_score(records.high_score)?;
        self.save_items(&records.items)?;
        self.save_settings(&records.settings)
    }

    pub fn high_score(&self) -> u32 {
        let Some(raw) = self.store.get(HIGH_SCORE_KEY) else {
            return 0;
        };
        match raw.trim().parse() {
            Ok(score) => score,
            Err(error) => {
                tracing::warn!(key = HIGH_SCORE_KEY, %error, "ignoring stored high score");
                0
            }
        }
    }

    pub fn save_high_score(&mut self, score: u32) -> Result<(), StoreError> {
        self.store.set(HIGH_SCORE_KEY, &score.to_string())
    }

    pub fn items(&self) -> ItemCounts {
        self.read_json(ITEMS_KEY).unwrap_or(Records::fresh().items)
    }

    pub fn save_items(&mut self, items: &ItemCounts) -> Result<(), StoreError> {
        self.write_json(ITEMS_KEY, items)
    }

    pub fn settings(&self) -> Settings {
        self.read_json(SETTINGS_KEY).unwrap_or_default()
    }

    pub fn save_settings(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.write_json(SETTINGS_KEY, settings)
    }

    /// Forget everything stored
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.clear()
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(key, %error, "ignoring stored value");
                None
            }
        }
    }

    fn write_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let text = serde_json::to_string(value)?;
        self.store.set(key, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use tui_match3_types::INITIAL_ITEMS;

    #[test]
    fn empty_store_loads_fresh_records() {
        let profile = Profile::new(MemoryStore::new());
        assert_eq!(profile.load(), Records::fresh());
        assert_eq!(profile.load().items, INITIAL_ITEMS);
    }

    #[test]
    fn save_uses_expected_encodings() {
        let mut profile = Profile::new(MemoryStore::new());
        let records = Records {
            high_score: 1234,
            items: ItemCounts {
                hammer: 1,
                shuffle: 0,
                extra_moves: 4,
            },
            settings: Settings {
                sound: false,
                ..Settings::default()
            },
        };
        profile.save(&records).unwrap();

        let store = profile.store();
        assert_eq!(store.get(HIGH_SCORE_KEY).as_deref(), Some("1234"));
        assert_eq!(
            store.get(ITEMS_KEY).as_deref(),
            Some(r#"{"hammer":1,"shuffle":0,"extraMoves":4}"#)
        );
        assert_eq!(
            store.get(SETTINGS_KEY).as_deref(),
            Some(r#"{"music":true,"sound":false,"vibration":true}"#)
        );
        assert_eq!(profile.load(), records);
    }

    #[test]
    fn corrupt_values_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, "lots").unwrap();
        store.set(ITEMS_KEY, r#"{"hammer":"many"}"#).unwrap();
        store.set(SETTINGS_KEY, r#"{"music":false}"#).unwrap();
        let profile = Profile::new(store);
        let records = profile.load();
        assert_eq!(records.high_score, 0);
        assert_eq!(records.items, INITIAL_ITEMS);
        // Partial objects keep the fields they have.
        assert!(!records.settings.music);
        assert!(records.settings.sound);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut profile = Profile::new(MemoryStore::new());
        profile.save_high_score(50).unwrap();
        profile.clear().unwrap();
        assert_eq!(profile.high_score(), 0);
        assert!(profile.into_inner().is_empty());
    }
}
