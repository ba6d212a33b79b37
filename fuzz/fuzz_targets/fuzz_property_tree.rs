#![no_main]

use libfuzzer_sys::fuzz_target;
use proptree::{flatten_forest, rows, sort_properties, ExpansionState, PropertyNode};

fuzz_target!(|data: &[u8]| {
    let Ok(nodes) = serde_json::from_slice::<Vec<PropertyNode>>(data) else {
        return;
    };

    let sorted = sort_properties(&nodes);
    assert_eq!(sorted.len(), nodes.len());
    assert_eq!(sort_properties(&sorted), sorted);

    let mut expansion = ExpansionState::new();
    expansion.expand_all(&sorted);
    let entries = flatten_forest(&sorted, &expansion);
    for row in rows(&entries) {
        assert!(row.kind.is_group() || !row.expanded);
    }
});
