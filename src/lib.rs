//! # Stakeless Registry
//!
//! Validated registry of stakeless gauges, keyed by gauge type.
//!
//! A gauge enters the registry only after the factory adder confirms its
//! provenance, the primary controller confirms it exists, and the gauge
//! itself reports it is alive. It leaves only after it has been killed.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use stakeless_registry::memory::*;
//! use stakeless_registry::{bootstrap, Config, GaugeType};
//!
//! let gauges = Arc::new(InMemoryGauges::new());
//! let controller = Arc::new(InMemoryGaugeController::new());
//! let adder = Arc::new(InMemoryGaugeAdder::new(gauges.clone()));
//! let factory = InMemoryGaugeFactory::new(gauges.clone());
//! adder.add_gauge_factory(factory.id(), GaugeType::Polygon)?;
//!
//! let gauge = factory.create();
//! controller.add_gauge(&gauge, GaugeType::Polygon)?;
//!
//! let registry = bootstrap::build_registry(&Config::default(), controller, adder, gauges)?;
//! registry.add_gauges(GaugeType::Polygon, &[gauge]).await?;
//! assert_eq!(registry.total_gauges(GaugeType::Polygon).await, 1);
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod telemetry;

pub use stakeless_config::{Config, ConfigError, ConfigLoader, ConfigValidator};
pub use stakeless_core::{
    memory, CollaboratorValidator, EventBus, EventStats, GaugeStore, GaugeValidator,
    StakelessGaugeRegistry,
};
pub use stakeless_protocols::{
    CollaboratorError, FactoryId, GaugeAddress, GaugeAdder, GaugeController, GaugeEvent,
    GaugeLiveness, GaugeType, IdentifierError, RegistryError, SupportedTypes,
};
