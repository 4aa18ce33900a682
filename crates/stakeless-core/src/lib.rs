//! # Stakeless Core
//!
//! Registry of stakeless gauges per gauge type.
//!
//! ## Components
//!
//! - [`GaugeStore`] - Per-type gauge lists with O(1) lookup and swap-remove
//! - [`StakelessGaugeRegistry`] - Validation gate, the only way in or out of the store
//! - [`GaugeValidator`] - Capability interface over the three external truth sources
//! - [`EventBus`] - Broadcast of `GaugesAdded` / `GaugesRemoved` notifications
//! - [`memory`] - In-memory controller, adder and gauge instances

pub mod events;
pub mod gate;
pub mod memory;
pub mod registry;
pub mod validator;

pub use events::{EventBus, EventStats};
pub use gate::StakelessGaugeRegistry;
pub use registry::GaugeStore;
pub use validator::{CollaboratorValidator, GaugeValidator};
