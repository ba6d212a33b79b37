//! Presentation Layer
//!
//! - `cli` - Argument parsing (clap)
//! - `commands` - Command handlers producing printable output

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
pub use commands::{run, CommandContext};
