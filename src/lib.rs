//! proptree - headless property tree model for visual component builders
//!
//! A component's property schema is shown as a collapsible tree: fields are
//! sorted, groups expand and collapse with their state remembered per
//! document, and array items can be reordered. This crate holds that logic
//! without any GUI; a plain-text renderer is included for inspection.
//!
//! ```ignore
//! use proptree::{flatten_forest, sort_properties, ExpansionState};
//!
//! let sorted = sort_properties(&properties);
//! let entries = flatten_forest(&sorted, &ExpansionState::new());
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{EditJsonDialog, PropsTree};
pub use config::Config;
pub use domain::entities::{PropertyNode, PropertyProps, PropertyType, DO_NOT_USE_IN_FLOWS};
pub use domain::ports::{ExpansionStore, NoopHandler, PropsTreeHandler, RecordingHandler, TreeEvent};
pub use domain::services::{
    array_move, flatten, flatten_forest, reorder, rows, sort_properties, RenderDescriptor, RowKind,
    TreeEntry,
};
pub use domain::value_objects::ExpansionState;
pub use error::{ProptreeError, ProptreeResult};
pub use infrastructure::{InMemoryExpansionStore, JsonExpansionStore};
