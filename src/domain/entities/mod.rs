//! Domain Entities
//!
//! - `PropertyNode` - A component property and its sub-properties

mod property;

pub use property::{
    find_in, find_in_mut, PropertyNode, PropertyProps, PropertyType, DO_NOT_USE_IN_FLOWS,
};
