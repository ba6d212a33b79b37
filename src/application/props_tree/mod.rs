//! Props Tree Module
//!
//! The stateful side of the property tree editor.
//!
//! ## Structure
//!
//! - `tree` - `PropsTree` controller (expansion, reordering, edit forwarding)
//! - `edit_json` - Raw JSON value editing
//!
//! ## Usage
//!
//! ```ignore
//! use proptree::application::PropsTree;
//!
//! let mut tree = PropsTree::new("page-1", &properties, store, handler);
//! tree.toggle_expand("style");
//! for row in proptree::domain::services::rows(&tree.entries()) { /* render */ }
//! ```

mod edit_json;
mod tree;

pub use edit_json::{apply_script, EditJsonDialog};
pub use tree::PropsTree;
