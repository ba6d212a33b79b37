//! Expansion State Repositories
//!
//! `JsonExpansionStore` persists every document's expanded groups in one
//! JSON file (`~/.proptree/expanded.json` by default):
//!
//! ```json
//! { "page-1": { "style": true, "items": false } }
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::ports::{ExpansionStore, ExpansionStoreError};
use crate::domain::value_objects::ExpansionState;

type Record = BTreeMap<String, ExpansionState>;

pub struct JsonExpansionStore {
    path: PathBuf,
}

impl JsonExpansionStore {
    pub fn new() -> Self {
        Self {
            path: default_store_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn load_record(&self) -> Result<Record, ExpansionStoreError> {
        if !self.path.exists() {
            return Ok(Record::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| ExpansionStoreError::AccessError {
            message: e.to_string(),
        })?;
        if content.trim().is_empty() {
            return Ok(Record::new());
        }

        serde_json::from_str(&content).map_err(|e| ExpansionStoreError::Corrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn save_record(&self, record: &Record) -> Result<(), ExpansionStoreError> {
        let content =
            serde_json::to_string_pretty(record).map_err(|e| ExpansionStoreError::SerializationError {
                message: e.to_string(),
            })?;

        fs::write(&self.path, content).map_err(|e| ExpansionStoreError::AccessError {
            message: e.to_string(),
        })
    }
}

impl Default for JsonExpansionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpansionStore for JsonExpansionStore {
    fn load(&self, document_id: &str) -> Result<ExpansionState, ExpansionStoreError> {
        if document_id.is_empty() {
            return Ok(ExpansionState::new());
        }
        let mut record = self.load_record()?;
        Ok(record.remove(document_id).unwrap_or_default())
    }

    fn save(&self, document_id: &str, state: &ExpansionState) -> Result<(), ExpansionStoreError> {
        if document_id.is_empty() {
            return Ok(());
        }

        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ExpansionStoreError::AccessError {
                message: e.to_string(),
            })?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(|e| ExpansionStoreError::AccessError {
            message: e.to_string(),
        })?;
        lock_file
            .lock_exclusive()
            .map_err(|e| ExpansionStoreError::AccessError {
                message: e.to_string(),
            })?;

        // Read-modify-write under the lock so other documents' entries survive
        let result = self.load_record().and_then(|mut record| {
            record.insert(document_id.to_string(), state.clone());
            self.save_record(&record)
        });

        let _ = lock_file.unlock();
        if result.is_ok() {
            tracing::debug!(document_id, path = %self.path.display(), "saved expansion state");
        }
        result
    }
}

/// Process-local store, for tests and embedders without a file
#[derive(Debug, Default)]
pub struct InMemoryExpansionStore {
    record: RefCell<Record>,
}

impl InMemoryExpansionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(document_id: &str, state: ExpansionState) -> Self {
        let store = Self::new();
        store
            .record
            .borrow_mut()
            .insert(document_id.to_string(), state);
        store
    }
}

impl ExpansionStore for InMemoryExpansionStore {
    fn load(&self, document_id: &str) -> Result<ExpansionState, ExpansionStoreError> {
        if document_id.is_empty() {
            return Ok(ExpansionState::new());
        }
        Ok(self
            .record
            .borrow()
            .get(document_id)
            .cloned()
            .unwrap_or_default())
    }

    fn save(&self, document_id: &str, state: &ExpansionState) -> Result<(), ExpansionStoreError> {
        if !document_id.is_empty() {
            self.record
                .borrow_mut()
                .insert(document_id.to_string(), state.clone());
        }
        Ok(())
    }
}

fn default_store_path() -> PathBuf {
    // Allow override for testing
    if let Ok(path) = std::env::var("PROPTREE_STORE_PATH") {
        return PathBuf::from(path);
    }
    dirs::home_dir()
        .map(|h| h.join(".proptree/expanded.json"))
        .unwrap_or_else(|| PathBuf::from("~/.proptree/expanded.json"))
}
