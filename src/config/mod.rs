//! Configuration module for proptree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PROPTREE_*)
//! 3. Working directory config (./proptree.toml)
//! 4. User config (~/.config/proptree/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{Config, DisplayConfig, OutputConfig, StoreConfig, Verbosity};
