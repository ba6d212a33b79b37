//! Domain Layer
//!
//! The property tree model and the pure logic around it, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - `PropertyNode` and its type
//! - `value_objects/` - `ExpansionState`
//! - `services/` - Sorter, Flattener, array reorder
//! - `ports/` - Interfaces for expansion persistence and edit callbacks
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services take snapshots and return new values
//! 3. **Ports & Adapters** - Persistence and edits go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
