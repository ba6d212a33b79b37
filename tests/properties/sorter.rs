//! Property tests for sibling ordering.

use std::cmp::Ordering;

use proptest::prelude::*;

use proptree::domain::services::locale_compare;
use proptree::{sort_properties, PropertyNode, DO_NOT_USE_IN_FLOWS};

use crate::strategies::{forest, sibling_lists};

fn is_sentinel(node: &PropertyNode) -> bool {
    node.name() == Some(DO_NOT_USE_IN_FLOWS)
}

fn positions(siblings: &[PropertyNode], pred: impl Fn(&PropertyNode) -> bool) -> Vec<usize> {
    siblings
        .iter()
        .enumerate()
        .filter(|(_, n)| pred(n))
        .map(|(i, _)| i)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Sorting an already sorted tree changes nothing.
    #[test]
    fn property_sort_is_idempotent(nodes in forest()) {
        let once = sort_properties(&nodes);
        let twice = sort_properties(&once);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Sorting keeps every node; it only reorders siblings.
    #[test]
    fn property_sort_preserves_siblings(nodes in forest()) {
        let sorted = sort_properties(&nodes);
        let mut before: Vec<_> = nodes.iter().map(|n| n.key.clone()).collect();
        let mut after: Vec<_> = sorted.iter().map(|n| n.key.clone()).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// PROPERTY: The sentinel precedes every other named sibling.
    #[test]
    fn property_sentinel_first(nodes in forest()) {
        let sorted = sort_properties(&nodes);
        for siblings in sibling_lists(&sorted) {
            let named: Vec<_> = siblings.iter().filter(|n| n.name().is_some()).collect();
            if let Some(last_sentinel) = named.iter().rposition(|n| is_sentinel(n)) {
                prop_assert!(named[..last_sentinel].iter().all(|n| is_sentinel(n)));
            }
        }
    }

    /// PROPERTY: Named fields are in ascending collation order, groups come
    /// after them, and unnamed nodes come last.
    #[test]
    fn property_fields_then_groups_then_unnamed(nodes in forest()) {
        let sorted = sort_properties(&nodes);
        for siblings in sibling_lists(&sorted) {
            let rest: Vec<_> = siblings.iter().filter(|n| !is_sentinel(n)).collect();

            let fields: Vec<_> = rest.iter().filter(|n| n.name().is_some() && !n.is_group()).collect();
            for pair in fields.windows(2) {
                let order = locale_compare(pair[0].name().unwrap(), pair[1].name().unwrap());
                prop_assert_ne!(order, Ordering::Greater);
            }

            let field_positions = positions(siblings, |n| n.name().is_some() && !n.is_group() && !is_sentinel(n));
            let group_positions = positions(siblings, |n| n.name().is_some() && n.is_group() && !is_sentinel(n));
            let unnamed_positions = positions(siblings, |n| n.name().is_none());

            if let (Some(last_field), Some(first_group)) = (field_positions.last(), group_positions.first()) {
                prop_assert!(last_field < first_group);
            }
            let last_named = field_positions.iter().chain(group_positions.iter()).max();
            if let (Some(last_named), Some(first_unnamed)) = (last_named, unnamed_positions.first()) {
                prop_assert!(last_named < first_unnamed);
            }
        }
    }
}
