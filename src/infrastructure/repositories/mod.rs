//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod expansion;

pub use expansion::{InMemoryExpansionStore, JsonExpansionStore};
