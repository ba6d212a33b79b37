//! Plain-text rendering of a flattened property tree.
//!
//! One line per row: indentation by level, a drag handle on the first row of
//! every array item, an expansion marker on groups, then label, type and,
//! for value rows, the compact JSON value.

use serde::Serialize;
use serde_json::Value;

use crate::domain::services::{RenderDescriptor, RowKind, TreeEntry};

use super::theme::Icons;

const UNNAMED: &str = "<unnamed>";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Spaces per nesting level
    pub indent: usize,
    pub ascii: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            ascii: false,
        }
    }
}

/// Serializable view of one row, for `--json` output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub key: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind_name: String,
    pub kind: RowKind,
    pub level: usize,
    pub parent_key: Option<String>,
    pub array_index: Option<usize>,
    pub expanded: bool,
    /// First row of an array item, where the drag handle goes
    pub handle: bool,
    /// Array header that accepts a new item
    pub can_increase: bool,
    /// Nested component the user can navigate into
    pub can_select_component: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// Render entries to lines joined with `\n`
pub fn render_tree(entries: &[TreeEntry<'_>], options: &RenderOptions) -> String {
    let icons = Icons::new(options.ascii);
    let mut lines = Vec::new();
    walk(entries, &mut false, &mut |row, handle| {
        lines.push(render_row(row, handle, &icons, options));
    });
    lines.join("\n")
}

/// Row views in render order
pub fn row_views(entries: &[TreeEntry<'_>]) -> Vec<RowView> {
    let mut views = Vec::new();
    walk(entries, &mut false, &mut |row, handle| {
        views.push(RowView {
            key: row.node.key.clone(),
            label: row.label.clone(),
            kind_name: row.node.kind.to_string(),
            kind: row.kind,
            level: row.level,
            parent_key: row.parent_key.map(str::to_string),
            array_index: row.array_index,
            expanded: row.expanded,
            handle,
            can_increase: row.kind.can_increase(),
            can_select_component: row.kind.can_select_component(),
            value: row
                .kind
                .can_edit_value()
                .then(|| row.node.props.property_value.clone()),
        });
    });
    views
}

/// Visit rows in order. `pending_handle` is set when the next row opens an
/// array item.
fn walk<F>(entries: &[TreeEntry<'_>], pending_handle: &mut bool, visit: &mut F)
where
    F: FnMut(&RenderDescriptor<'_>, bool),
{
    for entry in entries {
        match entry {
            TreeEntry::Row(row) => {
                visit(row, *pending_handle);
                *pending_handle = false;
            }
            TreeEntry::ArrayItem { entries, .. } => walk(entries, &mut true, visit),
        }
    }
}

fn render_row(row: &RenderDescriptor<'_>, handle: bool, icons: &Icons, options: &RenderOptions) -> String {
    let indent = " ".repeat(row.level * options.indent);
    let handle = if handle {
        format!("{} ", icons.handle)
    } else {
        String::new()
    };
    let marker = match (row.kind.is_group(), row.expanded) {
        (true, true) => icons.expand.to_string(),
        (true, false) => icons.collapse.to_string(),
        (false, _) => icons.leaf_pad(),
    };
    let label = row.label.as_deref().unwrap_or(UNNAMED);
    let value = if row.kind.can_edit_value() {
        format!(" = {}", row.node.props.property_value)
    } else {
        String::new()
    };

    format!(
        "{}{}{} {} ({}){}",
        indent, handle, marker, label, row.node.kind, value
    )
}
