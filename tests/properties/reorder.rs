//! Property tests for array reordering.

use proptest::prelude::*;

use proptree::{reorder, PropertyNode, PropertyType};

fn array(len: usize) -> PropertyNode {
    PropertyNode::new("arr", PropertyType::ArrayOf).with_children(
        (0..len)
            .map(|i| PropertyNode::new(format!("c{}", i), PropertyType::Element))
            .collect(),
    )
}

proptest! {
    /// PROPERTY: A move puts the item at `to` and keeps everyone else's relative order.
    #[test]
    fn property_reorder_is_single_move((len, from, to) in (1usize..10).prop_flat_map(|len| (Just(len), 0..len, 0..len))) {
        let before = array(len);
        let moved_key = before.children()[from].key.clone();
        let after = reorder(before.clone(), from, to);

        prop_assert_eq!(after.children().len(), len);
        prop_assert_eq!(&after.children()[to].key, &moved_key);

        let others_before: Vec<_> = before.children().iter().filter(|c| c.key != moved_key).map(|c| &c.key).collect();
        let others_after: Vec<_> = after.children().iter().filter(|c| c.key != moved_key).map(|c| &c.key).collect();
        prop_assert_eq!(others_before, others_after);
    }
}
