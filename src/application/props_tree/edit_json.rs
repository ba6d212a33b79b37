//! Raw JSON editing of a property value

use serde_json::Value;

use crate::domain::entities::PropertyNode;

/// Contents of the edit-JSON dialog for one property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditJsonDialog {
    pub title: String,
    /// Compact JSON of the current value
    pub script: String,
}

impl EditJsonDialog {
    pub fn for_node(node: &PropertyNode) -> Self {
        let name = node.name().unwrap_or(node.key.as_str());
        Self {
            title: format!("Edit property: {name}"),
            script: node.props.property_value.to_string(),
        }
    }
}

/// Replace the node's value with the parsed `script`.
///
/// Returns false and leaves the value untouched when the script is not
/// valid JSON.
pub fn apply_script(node: &mut PropertyNode, script: &str) -> bool {
    match serde_json::from_str::<Value>(script) {
        Ok(value) => {
            node.props.property_value = value;
            true
        }
        Err(e) => {
            tracing::debug!(key = %node.key, error = %e, "discarding unparsable JSON edit");
            false
        }
    }
}
