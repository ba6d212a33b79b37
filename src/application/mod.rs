//! Application Layer
//!
//! Use cases that combine domain services with ports.

pub mod props_tree;

pub use props_tree::{EditJsonDialog, PropsTree};
