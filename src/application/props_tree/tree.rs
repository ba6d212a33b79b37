//! Props Tree Controller
//!
//! Holds a sorted copy of a component's properties together with the
//! document's expansion state, and turns user actions into store writes and
//! handler calls. Rendering is left to the caller, which asks for
//! [`PropsTree::entries`] after every change.

use crate::domain::entities::{find_in, find_in_mut, PropertyNode, PropertyType};
use crate::domain::ports::{ExpansionStore, PropsTreeHandler};
use crate::domain::services::{self, flatten_forest, reorder, sort_properties, RenderDescriptor, TreeEntry};
use crate::domain::value_objects::ExpansionState;
use crate::error::{ProptreeError, ProptreeResult};

use super::edit_json::{apply_script, EditJsonDialog};

pub struct PropsTree<S, H>
where
    S: ExpansionStore,
    H: PropsTreeHandler,
{
    document_id: String,
    properties: Vec<PropertyNode>,
    expansion: ExpansionState,
    editing: Option<PropertyNode>,
    store: S,
    handler: H,
}

impl<S, H> PropsTree<S, H>
where
    S: ExpansionStore,
    H: PropsTreeHandler,
{
    /// Build the tree for `document_id`, restoring its expanded groups.
    ///
    /// `properties` is copied and sorted; the caller's tree is left as is.
    pub fn new(
        document_id: impl Into<String>,
        properties: &[PropertyNode],
        store: S,
        handler: H,
    ) -> Self {
        let document_id = document_id.into();
        let expansion = load_expansion(&store, &document_id);
        Self {
            properties: sort_properties(properties),
            document_id,
            expansion,
            editing: None,
            store,
            handler,
        }
    }

    /// Replace the properties with a new snapshot and reload expansion state
    pub fn set_properties(&mut self, properties: &[PropertyNode]) {
        self.properties = sort_properties(properties);
        self.expansion = load_expansion(&self.store, &self.document_id);
    }

    /// Sorted local copy of the properties
    pub fn properties(&self) -> &[PropertyNode] {
        &self.properties
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// True when there is nothing to show ("No properties found.")
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Flattened tree for the current expansion state
    pub fn entries(&self) -> Vec<TreeEntry<'_>> {
        flatten_forest(&self.properties, &self.expansion)
    }

    /// Visible rows in order, without array-item grouping
    pub fn rows(&self) -> Vec<RenderDescriptor<'_>> {
        let entries = self.entries();
        services::rows(&entries).into_iter().cloned().collect()
    }

    pub fn find(&self, key: &str) -> Option<&PropertyNode> {
        find_in(&self.properties, key)
    }

    /// Expand or collapse the group `key` and persist the new state.
    ///
    /// Returns the new expanded flag. A failed save is logged; the in-memory
    /// state still changes.
    pub fn toggle_expand(&mut self, key: &str) -> bool {
        self.expansion = self.expansion.toggled(key);
        let expanded = self.expansion.is_expanded(key);
        tracing::debug!(document_id = %self.document_id, key, expanded, "toggled group");
        self.persist_expansion();
        expanded
    }

    /// Expand every group in the tree and persist the new state
    pub fn expand_all(&mut self) {
        self.expansion.expand_all(&self.properties);
        self.persist_expansion();
    }

    fn persist_expansion(&self) {
        if let Err(e) = self.store.save(&self.document_id, &self.expansion) {
            tracing::warn!(document_id = %self.document_id, error = %e, "failed to save expansion state");
        }
    }

    /// Move the item at `from` of the `arrayOf` property `key` to `to`.
    ///
    /// The local copy is updated and the reordered node is handed to the
    /// handler.
    pub fn reorder_array(&mut self, key: &str, from: usize, to: usize) -> ProptreeResult<()> {
        let node = find_in_mut(&mut self.properties, key).ok_or_else(|| {
            ProptreeError::PropertyNotFound {
                key: key.to_string(),
            }
        })?;
        if node.kind != PropertyType::ArrayOf {
            return Err(ProptreeError::NotAnArray {
                key: key.to_string(),
                kind: node.kind.to_string(),
            });
        }

        let updated = reorder(node.clone(), from, to);
        *node = updated.clone();
        tracing::debug!(key, from, to, "reordered array items");
        self.handler.update_array_order(updated);
        Ok(())
    }

    pub fn update_property(&self, node: PropertyNode) {
        self.handler.update_property(node);
    }

    pub fn increase_array(&self, key: &str) {
        self.handler.increase_array(key);
    }

    pub fn duplicate_array_item(&self, key: &str, group_key: Option<&str>, index: Option<usize>) {
        self.handler.duplicate_array_item(key, group_key, index);
    }

    pub fn delete_property(&self, key: &str) {
        self.handler.delete_property(key);
    }

    pub fn error_click(&self, messages: &[String]) {
        self.handler.error_click(messages);
    }

    pub fn select_component(&self, key: &str) {
        self.handler.select_component(key);
    }

    /// Open the raw JSON editor for property `key`
    pub fn open_edit_json(&mut self, key: &str) -> ProptreeResult<()> {
        let node = self
            .find(key)
            .cloned()
            .ok_or_else(|| ProptreeError::PropertyNotFound {
                key: key.to_string(),
            })?;
        self.editing = Some(node);
        Ok(())
    }

    /// Dialog contents while the editor is open
    pub fn edit_json_dialog(&self) -> Option<EditJsonDialog> {
        self.editing.as_ref().map(EditJsonDialog::for_node)
    }

    pub fn close_edit_json(&mut self) {
        self.editing = None;
    }

    /// Apply the edited script and close the editor.
    ///
    /// Unparsable JSON is discarded without an error: the property keeps its
    /// prior value, and is still reported to the handler.
    pub fn submit_edit_json(&mut self, script: &str) {
        let Some(mut node) = self.editing.take() else {
            return;
        };

        if apply_script(&mut node, script) {
            if let Some(local) = find_in_mut(&mut self.properties, &node.key) {
                local.props.property_value = node.props.property_value.clone();
            }
        }
        self.handler.update_property(node);
    }
}

fn load_expansion<S: ExpansionStore>(store: &S, document_id: &str) -> ExpansionState {
    store.load(document_id).unwrap_or_else(|e| {
        tracing::warn!(document_id, error = %e, "failed to load expansion state");
        ExpansionState::new()
    })
}
