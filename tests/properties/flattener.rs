//! Property tests for tree flattening.

use proptest::prelude::*;

use proptree::{flatten, rows, ExpansionState, PropertyNode, PropertyType, TreeEntry};

use crate::strategies::group;

fn row_count(node: &PropertyNode, state: &ExpansionState) -> usize {
    rows(&flatten(node, None, 0, None, state)).len()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A collapsed shape contributes only its header.
    #[test]
    fn property_collapsed_shape_is_one_row(node in group(PropertyType::Shape)) {
        let entries = flatten(&node, None, 0, None, &ExpansionState::new());
        prop_assert_eq!(entries.len(), 1);
        prop_assert!(matches!(&entries[0], TreeEntry::Row(row) if row.node.key == node.key));
    }

    /// PROPERTY: An expanded shape yields its header plus each child's rows, in order.
    #[test]
    fn property_expanded_shape_concatenates_children(node in group(PropertyType::Shape), expand_children in any::<bool>()) {
        let mut state = ExpansionState::new();
        if expand_children {
            state.expand_all(std::slice::from_ref(&node));
        } else {
            state.set(node.key.clone(), true);
        }

        let entries = flatten(&node, None, 0, None, &state);
        let expected: usize = 1 + node.children().iter().map(|c| row_count(c, &state)).sum::<usize>();
        prop_assert_eq!(rows(&entries).len(), expected);

        let mut expected_keys = vec![node.key.clone()];
        for child in node.children() {
            expected_keys.extend(rows(&flatten(child, None, 1, None, &state)).iter().map(|r| r.node.key.clone()));
        }
        let keys: Vec<_> = rows(&entries).iter().map(|r| r.node.key.clone()).collect();
        prop_assert_eq!(keys, expected_keys);
    }

    /// PROPERTY: The i-th child of an expanded array is wrapped as item i.
    #[test]
    fn property_array_items_indexed(node in group(PropertyType::ArrayOf)) {
        let mut state = ExpansionState::new();
        state.set(node.key.clone(), true);

        let entries = flatten(&node, None, 0, None, &state);
        let items: Vec<_> = entries
            .iter()
            .skip(1)
            .map(|e| match e {
                TreeEntry::ArrayItem { index, entries } => Some((*index, entries)),
                TreeEntry::Row(_) => None,
            })
            .collect();

        prop_assert_eq!(items.len(), node.children().len());
        for (i, item) in items.into_iter().enumerate() {
            let (index, inner) = item.expect("array child must be wrapped");
            prop_assert_eq!(index, i);
            for row in rows(inner).iter().take(1) {
                prop_assert_eq!(row.array_index, Some(i));
                prop_assert_eq!(row.parent_key, Some(node.key.as_str()));
            }
        }
    }

    /// PROPERTY: Function properties never produce rows.
    #[test]
    fn property_function_is_hidden(name in proptest::option::of("[a-z]{1,8}")) {
        let mut node = PropertyNode::new("f", PropertyType::Function);
        node.props.property_name = name;
        prop_assert!(flatten(&node, None, 0, None, &ExpansionState::new()).is_empty());
    }
}
