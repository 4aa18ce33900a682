//! Error types for the stakeless registry.

mod collaborator;
mod identifier;
mod registry;

pub use collaborator::*;
pub use identifier::*;
pub use registry::*;
