//! Domain Services
//!
//! Pure functions over the property tree: sorting, flattening for display,
//! and array reordering. None of them touch I/O or mutate their input.

pub mod flattener;
pub mod reorder;
pub mod sorter;

pub use flattener::{flatten, flatten_forest, label_for, rows, RenderDescriptor, RowKind, TreeEntry};
pub use reorder::{array_move, reorder};
pub use sorter::{compare_properties, locale_compare, sort_properties};
