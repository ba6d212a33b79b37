//! Command handlers
//!
//! Each handler returns the text to print so the binary stays a thin shell.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::PropsTree;
use crate::config::Config;
use crate::domain::ports::{NoopHandler, PropsTreeHandler, RecordingHandler};
use crate::domain::services::{flatten_forest, TreeEntry};
use crate::infrastructure::{read_properties, JsonExpansionStore};
use crate::ui::{render_tree, row_views, RenderOptions};

use super::cli::{Cli, Commands};

const EMPTY_TREE: &str = "No properties found.";

/// Settings shared by every command, after config and flags are merged
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub json: bool,
    pub render: RenderOptions,
    pub store_path: Option<PathBuf>,
}

impl CommandContext {
    pub fn new(cli: &Cli, config: &Config) -> Self {
        Self {
            json: cli.json,
            render: RenderOptions {
                indent: config.display.indent,
                ascii: cli.ascii || config.display.ascii,
            },
            store_path: cli.store.clone().or_else(|| config.store.path.clone()),
        }
    }

    fn store(&self) -> JsonExpansionStore {
        match &self.store_path {
            Some(path) => JsonExpansionStore::with_path(path.clone()),
            None => JsonExpansionStore::new(),
        }
    }
}

pub fn run(command: &Commands, ctx: &CommandContext) -> Result<String> {
    match command {
        Commands::Show {
            file,
            doc,
            expand_all,
        } => cmd_show(file, doc, *expand_all, ctx),
        Commands::Toggle { file, key, doc } => cmd_toggle(file, key, doc, ctx),
        Commands::Reorder { file, key, from, to } => cmd_reorder(file, key, *from, *to, ctx),
        Commands::Edit { file, key, script } => cmd_edit(file, key, script, ctx),
    }
}

fn open_tree<H: PropsTreeHandler>(
    file: &Path,
    doc: &str,
    ctx: &CommandContext,
    handler: H,
) -> Result<PropsTree<JsonExpansionStore, H>> {
    let properties = read_properties(file)
        .with_context(|| format!("failed to read property tree {}", file.display()))?;
    Ok(PropsTree::new(doc, &properties, ctx.store(), handler))
}

pub fn cmd_show(file: &Path, doc: &str, expand_all: bool, ctx: &CommandContext) -> Result<String> {
    let tree = open_tree(file, doc, ctx, NoopHandler)?;

    if expand_all {
        let mut expansion = tree.expansion().clone();
        expansion.expand_all(tree.properties());
        let entries = flatten_forest(tree.properties(), &expansion);
        return format_entries(&entries, tree.is_empty(), ctx);
    }

    format_entries(&tree.entries(), tree.is_empty(), ctx)
}

pub fn cmd_toggle(file: &Path, key: &str, doc: &str, ctx: &CommandContext) -> Result<String> {
    let mut tree = open_tree(file, doc, ctx, NoopHandler)?;
    if tree.find(key).is_none() {
        anyhow::bail!("property '{}' not found in {}", key, file.display());
    }
    tree.toggle_expand(key);
    format_entries(&tree.entries(), tree.is_empty(), ctx)
}

pub fn cmd_reorder(
    file: &Path,
    key: &str,
    from: usize,
    to: usize,
    ctx: &CommandContext,
) -> Result<String> {
    let mut tree = open_tree(file, "", ctx, RecordingHandler::new())?;
    tree.reorder_array(key, from, to)?;
    format_events(tree.handler())
}

pub fn cmd_edit(file: &Path, key: &str, script: &str, ctx: &CommandContext) -> Result<String> {
    let mut tree = open_tree(file, "", ctx, RecordingHandler::new())?;
    tree.open_edit_json(key)?;
    tree.submit_edit_json(script);
    format_events(tree.handler())
}

/// `no_properties` is about the input tree, not the visible rows: a tree of
/// only callbacks renders as an empty list.
fn format_entries(
    entries: &[TreeEntry<'_>],
    no_properties: bool,
    ctx: &CommandContext,
) -> Result<String> {
    if ctx.json {
        return Ok(serde_json::to_string_pretty(&row_views(entries))?);
    }
    if no_properties {
        return Ok(EMPTY_TREE.to_string());
    }
    Ok(render_tree(entries, &ctx.render))
}

fn format_events(handler: &RecordingHandler) -> Result<String> {
    Ok(serde_json::to_string_pretty(&handler.events())?)
}
