//! proptree CLI - inspect and edit component property trees
//!
//! Usage: proptree <COMMAND>
//!
//! Commands:
//!   show     Print the sorted, flattened property tree
//!   toggle   Expand or collapse a group and persist the change
//!   reorder  Move an array item and print the reordered property
//!   edit     Replace a property value with raw JSON

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use proptree::config::{Config, Verbosity};
use proptree::presentation::{run, Cli, CommandContext};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_logging(config.output.verbosity.raised_by(cli.verbose));

    let ctx = CommandContext::new(&cli, &config);
    let output = run(&cli.command, &ctx)?;
    println!("{}", output);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            for warning in warnings {
                let hint = warning
                    .suggestion
                    .map(|s| format!(" (did you mean '{}'?)", s))
                    .unwrap_or_default();
                eprintln!(
                    "warning: unknown config key '{}' in {}{}",
                    warning.key,
                    warning.file.display(),
                    hint
                );
            }
            Ok(config.with_env_overrides())
        }
        None => {
            let cwd = std::env::current_dir().ok();
            Ok(Config::load_or_default(cwd.as_deref()))
        }
    }
}

fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
