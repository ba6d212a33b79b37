//! Value Objects
//!
//! Immutable domain values without identity.

mod expansion;

pub use expansion::ExpansionState;
