//! Text presentation of the property tree.

pub mod render;
pub mod theme;

pub use render::{render_tree, row_views, RenderOptions, RowView};
