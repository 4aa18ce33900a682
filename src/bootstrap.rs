//! Build a registry from configuration.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use stakeless_config::{Config, ConfigError, ConfigLoader, ConfigValidator};
use stakeless_core::{CollaboratorValidator, EventBus, GaugeValidator, StakelessGaugeRegistry};
use stakeless_protocols::{GaugeAdder, GaugeController, GaugeLiveness};

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Validate `config` and build a registry over the given collaborators.
pub fn build_registry(
    config: &Config,
    controller: Arc<dyn GaugeController>,
    adder: Arc<dyn GaugeAdder>,
    liveness: Arc<dyn GaugeLiveness>,
) -> Result<StakelessGaugeRegistry, BootstrapError> {
    let validator = Arc::new(CollaboratorValidator::new(controller, adder, liveness));
    build_with_validator(config, validator)
}

/// Validate `config` and build a registry over a custom validator.
pub fn build_with_validator(
    config: &Config,
    validator: Arc<dyn GaugeValidator>,
) -> Result<StakelessGaugeRegistry, BootstrapError> {
    let result = ConfigValidator::validate(config);
    for warning in &result.warnings {
        warn!("Config warning at {}: {}", warning.path, warning.message);
    }
    if !result.is_valid() {
        return Err(BootstrapError::Invalid(
            result.errors.iter().map(|e| e.to_string()).collect(),
        ));
    }

    let supported = config.registry.supported_types();
    info!(
        "Stakeless registry admitting gauge types from {} upwards",
        supported.threshold()
    );

    Ok(StakelessGaugeRegistry::new(validator)
        .with_supported_types(supported)
        .with_event_bus(EventBus::new(config.registry.event_capacity)))
}

/// Load the default config file (if any) and build a registry from it.
pub fn build_from_default_config(
    controller: Arc<dyn GaugeController>,
    adder: Arc<dyn GaugeAdder>,
    liveness: Arc<dyn GaugeLiveness>,
) -> Result<StakelessGaugeRegistry, BootstrapError> {
    let config = ConfigLoader::load_default()?;
    build_registry(&config, controller, adder, liveness)
}

#[cfg(test)]
#[path = "bootstrap_tests.rs"]
mod tests;
