//! ExpansionStore port
//!
//! Persists which groups are expanded, per document.

use std::path::PathBuf;

use crate::domain::value_objects::ExpansionState;

/// Storage for per-document expansion state.
///
/// An empty document id means the tree is not tied to a document: `load`
/// yields an empty state and `save` stores nothing.
pub trait ExpansionStore {
    fn load(&self, document_id: &str) -> Result<ExpansionState, ExpansionStoreError>;
    fn save(&self, document_id: &str, state: &ExpansionState) -> Result<(), ExpansionStoreError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExpansionStoreError {
    #[error("Failed to access expansion store: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize expansion state: {message}")]
    SerializationError { message: String },

    #[error(
        "expansion store corrupted: {path}\n  → Fix: Delete the file, expanded groups will reset\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
