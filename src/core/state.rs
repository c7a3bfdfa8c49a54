//! Application state
//!
//! Owns the history, the language preference and the scratch current values.
//! The persisted part (`language` + `history`) is loaded once at construction
//! and written back after every mutation.

use std::sync::Arc;

use crate::core::history::{HistoryStore, Storage};
use crate::shared::types::{ConversionValues, HistoryEntry, Language, PersistedState};

pub struct AppState {
    language: Language,
    history: HistoryStore,
    current_values: ConversionValues,
    storage: Arc<dyn Storage>,
}

impl AppState {
    /// Load persisted state. Missing or unreadable state starts empty.
    pub fn load(storage: Arc<dyn Storage>, default_language: Language) -> Self {
        let persisted = match storage.load() {
            Ok(Some(state)) => state,
            Ok(None) => PersistedState {
                language: default_language,
                history: Vec::new(),
            },
            Err(e) => {
                log::warn!("[AppState] Ignoring unreadable persisted state: {}", e);
                PersistedState {
                    language: default_language,
                    history: Vec::new(),
                }
            }
        };

        log::debug!(
            "[AppState] Loaded {} history entries, language {}",
            persisted.history.len(),
            persisted.language.code()
        );

        Self {
            language: persisted.language,
            history: HistoryStore::from_entries(persisted.history),
            current_values: ConversionValues::default(),
            storage,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.persist();
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Record a conversion snapshot in history
    pub fn add_to_history(&mut self, values: ConversionValues) -> HistoryEntry {
        let entry = self.history.append(values).clone();
        log::debug!("[HistoryStore] Added entry {}", entry.id);
        self.persist();
        entry
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        log::debug!("[HistoryStore] Cleared all entries");
        self.persist();
    }

    pub fn current_values(&self) -> ConversionValues {
        self.current_values
    }

    /// Not persisted
    pub fn set_current_values(&mut self, values: ConversionValues) {
        self.current_values = values;
    }

    fn persist(&self) {
        let state = PersistedState {
            language: self.language,
            history: self.history.entries().to_vec(),
        };
        if let Err(e) = self.storage.save(&state) {
            log::warn!("[AppState] Failed to persist state: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::land_converter::convert;
    use crate::core::history::{InMemoryStorage, RedbStorage, MAX_HISTORY_SIZE};
    use crate::shared::types::LandUnit;

    #[test]
    fn test_empty_storage_uses_default_language() {
        let state = AppState::load(Arc::new(InMemoryStorage::new()), Language::En);
        assert_eq!(state.language(), Language::En);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_corrupted_storage_starts_empty() {
        let storage = Arc::new(InMemoryStorage::with_raw("\u{0}garbage"));
        let state = AppState::load(storage, Language::Hi);
        assert!(state.history().is_empty());
        assert_eq!(state.language(), Language::Hi);
    }

    #[test]
    fn test_mutations_are_persisted() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut state = AppState::load(storage.clone(), Language::Hi);

        state.add_to_history(convert(1.0, LandUnit::Bigha));
        state.set_language(Language::En);
        let saved = storage.load().unwrap().unwrap();
        assert_eq!(saved.language, Language::En);
        assert_eq!(saved.history.len(), 1);

        state.clear_history();
        let saved = storage.load().unwrap().unwrap();
        assert!(saved.history.is_empty());
        assert_eq!(state.history().len(), 0);
    }

    #[test]
    fn test_current_values_are_not_persisted() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut state = AppState::load(storage.clone(), Language::Hi);
        state.set_current_values(convert(2.0, LandUnit::Biswa));
        state.set_language(Language::En);

        let reloaded = AppState::load(storage, Language::Hi);
        assert_eq!(reloaded.current_values(), ConversionValues::default());
    }

    #[test]
    fn test_history_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.redb");

        let ids: Vec<String> = {
            let mut state = AppState::load(Arc::new(RedbStorage::open(&path).unwrap()), Language::Hi);
            for i in 0..60 {
                state.add_to_history(convert(i as f64, LandUnit::Biswa));
            }
            state.history().entries().iter().map(|e| e.id.clone()).collect()
        };

        let state = AppState::load(Arc::new(RedbStorage::open(&path).unwrap()), Language::Hi);
        assert_eq!(state.history().len(), MAX_HISTORY_SIZE);
        let reloaded: Vec<String> = state.history().entries().iter().map(|e| e.id.clone()).collect();
        assert_eq!(reloaded, ids);
    }
}
