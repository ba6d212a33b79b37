//! Property node entity
//!
//! A component's property schema is a forest of `PropertyNode`s. Leaves hold
//! a value; `shape` and `arrayOf` nodes group sub-properties.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Property name that is always listed first among its siblings.
pub const DO_NOT_USE_IN_FLOWS: &str = "doNotUseInFlows";

/// Declared type of a property
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    /// Nested object grouping named sub-properties (`shape`)
    Shape,
    /// Reorderable list of homogeneous items (`arrayOf`)
    ArrayOf,
    /// Renderable element slot (`element`)
    Element,
    /// Nested child component (`component`)
    Component,
    /// Callback property, never shown in the tree (`func`)
    Function,
    /// Any other declared type, kept verbatim (`string`, `number`, `bool`, ...)
    Primitive(String),
}

impl PropertyType {
    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::Shape => "shape",
            PropertyType::ArrayOf => "arrayOf",
            PropertyType::Element => "element",
            PropertyType::Component => "component",
            PropertyType::Function => "func",
            PropertyType::Primitive(name) => name,
        }
    }

    /// Shape and ArrayOf nodes group sub-properties
    pub fn is_group(&self) -> bool {
        matches!(self, PropertyType::Shape | PropertyType::ArrayOf)
    }
}

impl From<String> for PropertyType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "shape" => PropertyType::Shape,
            "arrayOf" => PropertyType::ArrayOf,
            "element" => PropertyType::Element,
            "component" => PropertyType::Component,
            "func" => PropertyType::Function,
            _ => PropertyType::Primitive(value),
        }
    }
}

impl From<PropertyType> for String {
    fn from(value: PropertyType) -> Self {
        match value {
            PropertyType::Primitive(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editable attributes of a property
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub property_value: Value,
}

/// A node in the property tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyNode {
    /// Unique across the whole tree
    pub key: String,

    #[serde(rename = "type")]
    pub kind: PropertyType,

    #[serde(default)]
    pub props: PropertyProps,

    /// Present only for nodes that group sub-properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PropertyNode>>,
}

impl PropertyNode {
    pub fn new(key: impl Into<String>, kind: PropertyType) -> Self {
        Self {
            key: key.into(),
            kind,
            props: PropertyProps::default(),
            children: None,
        }
    }

    /// Create a primitive leaf with a name and value
    pub fn primitive(
        key: impl Into<String>,
        type_name: impl Into<String>,
        name: impl Into<String>,
        value: Value,
    ) -> Self {
        Self::new(key, PropertyType::Primitive(type_name.into()))
            .with_name(name)
            .with_value(value)
    }

    /// Create a named group node (`shape` or `arrayOf`) with children
    pub fn group(
        key: impl Into<String>,
        kind: PropertyType,
        name: impl Into<String>,
        children: Vec<PropertyNode>,
    ) -> Self {
        Self::new(key, kind).with_name(name).with_children(children)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.props.property_name = Some(name.into());
        self
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.props.property_value = value;
        self
    }

    pub fn with_children(mut self, children: Vec<PropertyNode>) -> Self {
        self.children = Some(children);
        self
    }

    /// Property name, treating an empty name as absent
    pub fn name(&self) -> Option<&str> {
        self.props
            .property_name
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    pub fn is_group(&self) -> bool {
        self.kind.is_group()
    }

    /// Children slice; empty when `children` is absent
    pub fn children(&self) -> &[PropertyNode] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Depth-first search for `key` in this subtree
    pub fn find(&self, key: &str) -> Option<&PropertyNode> {
        if self.key == key {
            return Some(self);
        }
        find_in(self.children(), key)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut PropertyNode> {
        if self.key == key {
            return Some(self);
        }
        match self.children.as_mut() {
            Some(children) => find_in_mut(children, key),
            None => None,
        }
    }
}

/// Depth-first search across a forest of property nodes
pub fn find_in<'a>(nodes: &'a [PropertyNode], key: &str) -> Option<&'a PropertyNode> {
    nodes.iter().find_map(|node| node.find(key))
}

pub fn find_in_mut<'a>(nodes: &'a mut [PropertyNode], key: &str) -> Option<&'a mut PropertyNode> {
    nodes.iter_mut().find_map(|node| node.find_mut(key))
}
