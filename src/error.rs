//! Error types for proptree
//!
//! Uses `thiserror` for library errors. Sorting, flattening and reordering
//! are total and never produce one of these.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::ExpansionStoreError;

/// Result type alias for proptree operations
pub type ProptreeResult<T> = Result<T, ProptreeError>;

/// Main error type for proptree operations
#[derive(Error, Debug)]
pub enum ProptreeError {
    /// No property with this key in the tree
    #[error("property '{key}' not found")]
    PropertyNotFound { key: String },

    /// Array operation on a property that is not `arrayOf`
    #[error("property '{key}' is of type '{kind}', expected 'arrayOf'")]
    NotAnArray { key: String, kind: String },

    /// Property tree file could not be parsed
    #[error("invalid property tree in {file}: {message}")]
    InvalidTree { file: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Expansion store failure
    #[error(transparent)]
    Store(#[from] ExpansionStoreError),
}
