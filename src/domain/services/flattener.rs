//! Property Flattener
//!
//! Walks a sorted property tree and produces the rows a presentation layer
//! renders, honouring the expansion state of every group.
//!
//! Children of an `arrayOf` node come back wrapped in a [`TreeEntry::ArrayItem`]
//! group: the whole result of one array child (its header and, when expanded,
//! its subtree) is the unit that gets a single drag handle.

use serde::Serialize;

use crate::domain::entities::{PropertyNode, PropertyType};
use crate::domain::value_objects::ExpansionState;

/// What a row represents, and therefore which actions it offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// Header of a `shape` group
    ShapeGroup,
    /// Header of an `arrayOf` group
    ArrayGroup,
    /// `element` slot
    Element,
    /// Nested child component
    Component,
    /// Primitive value
    Value,
}

impl RowKind {
    fn of(kind: &PropertyType) -> Option<Self> {
        match kind {
            PropertyType::Shape => Some(RowKind::ShapeGroup),
            PropertyType::ArrayOf => Some(RowKind::ArrayGroup),
            PropertyType::Element => Some(RowKind::Element),
            PropertyType::Component => Some(RowKind::Component),
            PropertyType::Function => None,
            PropertyType::Primitive(_) => Some(RowKind::Value),
        }
    }

    pub fn is_group(self) -> bool {
        matches!(self, RowKind::ShapeGroup | RowKind::ArrayGroup)
    }

    /// Only array headers can grow
    pub fn can_increase(self) -> bool {
        self == RowKind::ArrayGroup
    }

    /// Value leaves can be edited in place or as raw JSON
    pub fn can_edit_value(self) -> bool {
        self == RowKind::Value
    }

    pub fn can_select_component(self) -> bool {
        self == RowKind::Component
    }
}

/// One renderable row
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDescriptor<'a> {
    pub node: &'a PropertyNode,
    pub parent_key: Option<&'a str>,
    pub level: usize,
    pub array_index: Option<usize>,
    /// Property name, or `"<index> item"` for an unnamed array item
    pub label: Option<String>,
    pub kind: RowKind,
    /// Expansion flag read for this row's key (always false for leaves)
    pub expanded: bool,
}

/// Flattener output: plain rows and per-array-item groups
#[derive(Debug, Clone, PartialEq)]
pub enum TreeEntry<'a> {
    Row(RenderDescriptor<'a>),
    ArrayItem {
        index: usize,
        entries: Vec<TreeEntry<'a>>,
    },
}

impl<'a> TreeEntry<'a> {
    fn collect_rows<'e>(&'e self, out: &mut Vec<&'e RenderDescriptor<'a>>) {
        match self {
            TreeEntry::Row(row) => out.push(row),
            TreeEntry::ArrayItem { entries, .. } => {
                for entry in entries {
                    entry.collect_rows(out);
                }
            }
        }
    }
}

/// Descriptors of a whole entry list in render order
pub fn rows<'e, 'a>(entries: &'e [TreeEntry<'a>]) -> Vec<&'e RenderDescriptor<'a>> {
    let mut out = Vec::new();
    for entry in entries {
        entry.collect_rows(&mut out);
    }
    out
}

/// Row label: the property name when present, else the positional label
/// for array items.
pub fn label_for(node: &PropertyNode, array_index: Option<usize>) -> Option<String> {
    match (node.name(), array_index) {
        (Some(name), _) => Some(name.to_string()),
        (None, Some(index)) => Some(format!("{index} item")),
        (None, None) => None,
    }
}

/// Flatten one node and, for expanded groups, its subtree.
///
/// Children are visited in their existing order. A call made for an array
/// item (`array_index` is `Some`) returns exactly one `ArrayItem` entry.
pub fn flatten<'a>(
    node: &'a PropertyNode,
    parent: Option<&'a PropertyNode>,
    level: usize,
    array_index: Option<usize>,
    expansion: &ExpansionState,
) -> Vec<TreeEntry<'a>> {
    let mut result = Vec::new();

    if let Some(kind) = RowKind::of(&node.kind) {
        let expanded = kind.is_group() && expansion.is_expanded(&node.key);
        result.push(TreeEntry::Row(RenderDescriptor {
            node,
            parent_key: parent.map(|p| p.key.as_str()),
            level,
            array_index,
            label: label_for(node, array_index),
            kind,
            expanded,
        }));

        if expanded && node.has_children() {
            for (position, child) in node.children().iter().enumerate() {
                let child_index = (kind == RowKind::ArrayGroup).then_some(position);
                result.extend(flatten(child, Some(node), level + 1, child_index, expansion));
            }
        }
    }

    match array_index {
        Some(index) => vec![TreeEntry::ArrayItem {
            index,
            entries: result,
        }],
        None => result,
    }
}

/// Flatten a top-level forest at level 0
pub fn flatten_forest<'a>(
    nodes: &'a [PropertyNode],
    expansion: &ExpansionState,
) -> Vec<TreeEntry<'a>> {
    nodes
        .iter()
        .flat_map(|node| flatten(node, None, 0, None, expansion))
        .collect()
}
