//! Array item reordering

use crate::domain::entities::PropertyNode;

/// Move the element at `from` so that it ends up at `to`.
///
/// This is a single-element move, not a swap: everything between the two
/// positions shifts by one. An out-of-range `from` leaves the vector as is;
/// a `to` past the end moves the element to the last position.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() {
        return;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
}

/// Return `parent` with the child at `from` moved to `to`.
///
/// A node without `children` comes back unchanged.
pub fn reorder(mut parent: PropertyNode, from: usize, to: usize) -> PropertyNode {
    if let Some(children) = parent.children.as_mut() {
        array_move(children, from, to);
    }
    parent
}
