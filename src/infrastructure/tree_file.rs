//! Property tree snapshot files
//!
//! A snapshot is the JSON the builder hands to the tree: either an array of
//! property nodes or a single node.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::PropertyNode;
use crate::error::{ProptreeError, ProptreeResult};

#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Forest(Vec<PropertyNode>),
    Single(Box<PropertyNode>),
}

/// Parse a snapshot from JSON text
pub fn parse_properties(content: &str, file: &Path) -> ProptreeResult<Vec<PropertyNode>> {
    let snapshot: Snapshot =
        serde_json::from_str(content).map_err(|e| ProptreeError::InvalidTree {
            file: file.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(match snapshot {
        Snapshot::Forest(nodes) => nodes,
        Snapshot::Single(node) => vec![*node],
    })
}

/// Read a snapshot file
pub fn read_properties(path: &Path) -> ProptreeResult<Vec<PropertyNode>> {
    let content = fs::read_to_string(path)?;
    parse_properties(&content, path)
}
