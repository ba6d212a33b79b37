//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config, --ascii) are inherited by all subcommands
//! - `--doc` ties expansion state to a document; without it nothing is persisted

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// proptree - inspect and edit component property trees
#[derive(Parser, Debug)]
#[command(name = "proptree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Use ASCII icons instead of Unicode
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Config file (default: ./proptree.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Expansion store file (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the sorted, flattened property tree
    Show {
        /// Property tree JSON file
        file: PathBuf,

        /// Document id for stored expansion state
        #[arg(long, default_value = "")]
        doc: String,

        /// Show every group expanded (not persisted)
        #[arg(long)]
        expand_all: bool,
    },

    /// Expand or collapse a group and persist the change
    Toggle {
        /// Property tree JSON file
        file: PathBuf,

        /// Key of the group to toggle
        key: String,

        /// Document id for stored expansion state
        #[arg(long)]
        doc: String,
    },

    /// Move an array item and print the reordered property
    Reorder {
        /// Property tree JSON file
        file: PathBuf,

        /// Key of the arrayOf property
        key: String,

        /// Current index of the item
        from: usize,

        /// Target index of the item
        to: usize,
    },

    /// Replace a property value with raw JSON and print the result
    Edit {
        /// Property tree JSON file
        file: PathBuf,

        /// Key of the property to edit
        key: String,

        /// New value as JSON (invalid JSON keeps the old value)
        script: String,
    },
}
