//! Props Tree Handler Port
//!
//! The tree decides when an edit happens and with which arguments; the
//! handler owns what the edit does to the underlying component model.

use std::cell::RefCell;

use serde::Serialize;

use crate::domain::entities::PropertyNode;

/// An edit requested by the tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TreeEvent {
    UpdateProperty { node: PropertyNode },
    IncreaseArray { key: String },
    DuplicateArrayItem {
        key: String,
        group_key: Option<String>,
        index: Option<usize>,
    },
    DeleteProperty { key: String },
    ErrorClick { messages: Vec<String> },
    UpdateArrayOrder { node: PropertyNode },
    SelectComponent { key: String },
}

/// Receiver for edits requested by the tree.
///
/// Every method has a default that only logs, so a handler implements just
/// the edits it supports.
pub trait PropsTreeHandler {
    /// A property value changed
    fn update_property(&self, _node: PropertyNode) {
        not_set("update_property");
    }

    /// Append an item to the `arrayOf` property `key`
    fn increase_array(&self, _key: &str) {
        not_set("increase_array");
    }

    /// Duplicate the item `key` at `index` of the array `group_key`
    fn duplicate_array_item(&self, _key: &str, _group_key: Option<&str>, _index: Option<usize>) {
        not_set("duplicate_array_item");
    }

    fn delete_property(&self, _key: &str) {
        not_set("delete_property");
    }

    /// The user asked to see a property's error messages
    fn error_click(&self, _messages: &[String]) {
        not_set("error_click");
    }

    /// An `arrayOf` node with its children in the new order
    fn update_array_order(&self, _node: PropertyNode) {
        not_set("update_array_order");
    }

    /// Navigate to the nested child component `key`
    fn select_component(&self, _key: &str) {
        not_set("select_component");
    }
}

fn not_set(callback: &str) {
    tracing::info!(callback, "props tree handler callback is not set");
}

/// Handler that accepts every edit and ignores it
pub struct NoopHandler;

impl PropsTreeHandler for NoopHandler {
    fn update_property(&self, _node: PropertyNode) {}
    fn increase_array(&self, _key: &str) {}
    fn duplicate_array_item(&self, _key: &str, _group_key: Option<&str>, _index: Option<usize>) {}
    fn delete_property(&self, _key: &str) {}
    fn error_click(&self, _messages: &[String]) {}
    fn update_array_order(&self, _node: PropertyNode) {}
    fn select_component(&self, _key: &str) {}
}

/// Handler that records every edit in order
#[derive(Debug, Default)]
pub struct RecordingHandler {
    events: RefCell<Vec<TreeEvent>>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TreeEvent> {
        self.events.borrow().clone()
    }

    pub fn take(&self) -> Vec<TreeEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    fn push(&self, event: TreeEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl PropsTreeHandler for RecordingHandler {
    fn update_property(&self, node: PropertyNode) {
        self.push(TreeEvent::UpdateProperty { node });
    }

    fn increase_array(&self, key: &str) {
        self.push(TreeEvent::IncreaseArray {
            key: key.to_string(),
        });
    }

    fn duplicate_array_item(&self, key: &str, group_key: Option<&str>, index: Option<usize>) {
        self.push(TreeEvent::DuplicateArrayItem {
            key: key.to_string(),
            group_key: group_key.map(str::to_string),
            index,
        });
    }

    fn delete_property(&self, key: &str) {
        self.push(TreeEvent::DeleteProperty {
            key: key.to_string(),
        });
    }

    fn error_click(&self, messages: &[String]) {
        self.push(TreeEvent::ErrorClick {
            messages: messages.to_vec(),
        });
    }

    fn update_array_order(&self, node: PropertyNode) {
        self.push(TreeEvent::UpdateArrayOrder { node });
    }

    fn select_component(&self, key: &str) {
        self.push(TreeEvent::SelectComponent {
            key: key.to_string(),
        });
    }
}
