//! Property Sorter
//!
//! Orders sibling properties for display:
//!
//! 1. the `doNotUseInFlows` sentinel first
//! 2. plain named properties, alphabetically
//! 3. named groups (`shape`, `arrayOf`), alphabetically
//! 4. unnamed properties last, in input order

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

use crate::domain::entities::{PropertyNode, DO_NOT_USE_IN_FLOWS};

/// Return a sorted copy of `nodes`, sorting every `children` list bottom-up.
///
/// The input is never mutated. The sort is stable, so properties that rank
/// equal keep their relative order.
pub fn sort_properties(nodes: &[PropertyNode]) -> Vec<PropertyNode> {
    let mut sorted: Vec<PropertyNode> = nodes
        .iter()
        .map(|node| {
            let mut node = node.clone();
            if let Some(children) = node.children.take() {
                node.children = Some(if children.is_empty() {
                    children
                } else {
                    sort_properties(&children)
                });
            }
            node
        })
        .collect();
    sorted.sort_by(compare_properties);
    sorted
}

/// Sibling comparator.
///
/// Two sentinels, or two unnamed nodes, are equal. Two groups compare by
/// name like any other pair of named nodes.
pub fn compare_properties(a: &PropertyNode, b: &PropertyNode) -> Ordering {
    match (a.name(), b.name()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a_name), Some(b_name)) => rank(a, a_name)
            .cmp(&rank(b, b_name))
            .then_with(|| match rank(a, a_name) {
                Rank::Sentinel => Ordering::Equal,
                _ => locale_compare(a_name, b_name),
            }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    Sentinel,
    Field,
    Group,
}

fn rank(node: &PropertyNode, name: &str) -> Rank {
    if name == DO_NOT_USE_IN_FLOWS {
        Rank::Sentinel
    } else if node.is_group() {
        Rank::Group
    } else {
        Rank::Field
    }
}

thread_local! {
    static ROOT_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Name comparison in Unicode root collation order (tertiary strength,
/// punctuation not ignored), the order JavaScript's `localeCompare` gives
/// without a locale.
///
/// Names that collate equal fall back to code point order so the
/// comparator stays total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}
