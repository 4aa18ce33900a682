//! Identifier and category types used across the registry.

mod address;
mod gauge_type;

pub use address::*;
pub use gauge_type::*;
