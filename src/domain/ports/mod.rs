//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod expansion_store;
pub mod tree_events;

pub use expansion_store::{ExpansionStore, ExpansionStoreError};
pub use tree_events::{NoopHandler, PropsTreeHandler, RecordingHandler, TreeEvent};
