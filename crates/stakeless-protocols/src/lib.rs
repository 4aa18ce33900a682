//! # Stakeless Protocols
//!
//! Shared vocabulary for the stakeless gauge registry.
//! Contains only types and interface definitions - no registry state.
//!
//! ## Core Traits
//!
//! - [`GaugeController`] - Primary controller, source of truth for gauge existence
//! - [`GaugeAdder`] - Factory provenance for each gauge type
//! - [`GaugeLiveness`] - Kill status owned by the gauge instance itself

pub mod collaborator;
pub mod error;
pub mod event;
pub mod types;

pub use collaborator::{GaugeAdder, GaugeController, GaugeLiveness};
pub use error::{CollaboratorError, IdentifierError, RegistryError};
pub use event::GaugeEvent;
pub use types::*;
