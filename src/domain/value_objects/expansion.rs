//! Expansion State Value Object
//!
//! Records which group keys are shown expanded. An absent key is collapsed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::PropertyNode;

/// Per-document map of group key to expanded flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpansionState {
    keys: BTreeMap<String, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: impl Into<String>, expanded: bool) {
        self.keys.insert(key.into(), expanded);
    }

    /// Flip the flag for `key` and return the new value.
    ///
    /// An absent key counts as collapsed, so the first toggle expands it.
    pub fn toggle(&mut self, key: &str) -> bool {
        let expanded = !self.is_expanded(key);
        self.keys.insert(key.to_string(), expanded);
        expanded
    }

    /// Copy of this state with `key` flipped
    pub fn toggled(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.toggle(key);
        next
    }

    /// Mark every group in the forest as expanded
    pub fn expand_all(&mut self, nodes: &[PropertyNode]) {
        for node in nodes {
            if node.is_group() {
                self.keys.insert(node.key.clone(), true);
                self.expand_all(node.children());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

impl FromIterator<(String, bool)> for ExpansionState {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}
