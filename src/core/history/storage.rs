//! Persistence backends for the application state record
//!
//! The whole record (`language` + `history`) is stored as one JSON value
//! under a single key. Current calculator values are never persisted.

use redb::{Database, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::core::lock;
use crate::shared::errors::AppResult;
use crate::shared::types::PersistedState;

/// Redb table holding named state records.
/// Key: record name, Value: JSON-serialized `PersistedState`
const STATE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("app_state");

/// Name of the single persisted record
pub const STATE_KEY: &str = "land-calculator-storage";

/// Storage trait for the persisted state record
pub trait Storage: Send + Sync {
    /// Load the record. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> AppResult<Option<PersistedState>>;
    /// Replace the record
    fn save(&self, state: &PersistedState) -> AppResult<()>;
}

/// Redb-based storage implementation
pub struct RedbStorage {
    db: Database,
}

impl RedbStorage {
    pub fn open(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        // Initialize table
        let write_txn = db.begin_write()?;
        {
            let _table = write_txn.open_table(STATE_TABLE)?;
        }
        write_txn.commit()?;

        log::debug!("[RedbStorage] Opened {}", path.display());
        Ok(Self { db })
    }
}

impl Storage for RedbStorage {
    fn load(&self) -> AppResult<Option<PersistedState>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(STATE_TABLE)?;

        let Some(record) = table.get(STATE_KEY)? else {
            return Ok(None);
        };
        let state = serde_json::from_str(record.value())?;
        Ok(Some(state))
    }

    fn save(&self, state: &PersistedState) -> AppResult<()> {
        let serialized = serde_json::to_string(state)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(STATE_TABLE)?;
            table.insert(STATE_KEY, serialized.as_str())?;
        }
        write_txn.commit()?;

        Ok(())
    }
}

/// In-memory storage, used in tests and when the database cannot be opened
#[derive(Default)]
pub struct InMemoryStorage {
    record: Mutex<Option<String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw record text, e.g. to simulate a corrupted record
    pub fn with_raw(raw: &str) -> Self {
        Self {
            record: Mutex::new(Some(raw.to_string())),
        }
    }
}

impl Storage for InMemoryStorage {
    fn load(&self) -> AppResult<Option<PersistedState>> {
        let record = lock(&self.record);
        match record.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, state: &PersistedState) -> AppResult<()> {
        let serialized = serde_json::to_string(state)?;
        *lock(&self.record) = Some(serialized);
        Ok(())
    }
}

/// Open the database at `path`, falling back to memory if that fails
pub fn open_or_in_memory(path: &Path) -> Arc<dyn Storage> {
    match RedbStorage::open(path) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            log::warn!(
                "[Storage] Failed to open {}: {}, using in-memory fallback",
                path.display(),
                e
            );
            Arc::new(InMemoryStorage::new())
        }
    }
}
