//! Shared generators for property trees.

use proptest::prelude::*;

use proptree::{PropertyNode, PropertyType, DO_NOT_USE_IN_FLOWS};

fn kind() -> impl Strategy<Value = PropertyType> {
    prop_oneof![
        Just(PropertyType::Shape),
        Just(PropertyType::ArrayOf),
        Just(PropertyType::Element),
        Just(PropertyType::Component),
        Just(PropertyType::Function),
        Just(PropertyType::Primitive("string".to_string())),
        Just(PropertyType::Primitive("number".to_string())),
    ]
}

fn name() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        2 => Just(None),
        1 => Just(Some(DO_NOT_USE_IN_FLOWS.to_string())),
        6 => "[a-zA-Z0-9_]{1,6}".prop_map(Some),
    ]
}

fn node() -> impl Strategy<Value = PropertyNode> {
    let leaf = (kind(), name()).prop_map(|(kind, name)| {
        let mut node = PropertyNode::new("", kind);
        node.props.property_name = name;
        node
    });

    leaf.prop_recursive(3, 32, 4, |inner| {
        (
            prop_oneof![Just(PropertyType::Shape), Just(PropertyType::ArrayOf)],
            name(),
            proptest::collection::vec(inner, 0..4),
        )
            .prop_map(|(kind, name, children)| {
                let mut node = PropertyNode::new("", kind).with_children(children);
                node.props.property_name = name;
                node
            })
    })
}

/// Forest with unique keys `k0`, `k1`, ... in depth-first order
pub fn forest() -> impl Strategy<Value = Vec<PropertyNode>> {
    proptest::collection::vec(node(), 0..6).prop_map(|mut nodes| {
        let mut next = 0;
        assign_keys(&mut nodes, &mut next);
        nodes
    })
}

/// A single group node of the given kind, with unique keys
pub fn group(kind: PropertyType) -> impl Strategy<Value = PropertyNode> {
    proptest::collection::vec(node(), 0..5).prop_map(move |children| {
        let mut nodes = vec![PropertyNode::new("", kind.clone()).with_children(children)];
        let mut next = 0;
        assign_keys(&mut nodes, &mut next);
        nodes.remove(0)
    })
}

fn assign_keys(nodes: &mut [PropertyNode], next: &mut usize) {
    for node in nodes {
        node.key = format!("k{}", next);
        *next += 1;
        if let Some(children) = node.children.as_mut() {
            assign_keys(children, next);
        }
    }
}

/// Every sibling list in the forest, top level first
pub fn sibling_lists(nodes: &[PropertyNode]) -> Vec<&[PropertyNode]> {
    let mut lists = vec![nodes];
    for node in nodes {
        lists.extend(sibling_lists(node.children()));
    }
    lists
}
