//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Expansion state stores (JSON file, in-memory)
//! - `tree_file` - Property tree snapshot files

pub mod repositories;
pub mod tree_file;

// Re-export for convenience
pub use repositories::{InMemoryExpansionStore, JsonExpansionStore};
pub use tree_file::{parse_properties, read_properties};
