//! Capability interface over the registry's external truth sources.

use std::sync::Arc;

use async_trait::async_trait;

use stakeless_protocols::{
    CollaboratorError, GaugeAddress, GaugeAdder, GaugeController, GaugeLiveness, GaugeType,
};

/// The three checks the validation gate needs answered.
///
/// Implementations must not cache liveness; kill status belongs to the
/// gauge instance and can change between calls.
#[async_trait]
pub trait GaugeValidator: Send + Sync {
    /// Whether `gauge` was minted by the factory registered for `gauge_type`.
    async fn check_provenance(
        &self,
        gauge_type: GaugeType,
        gauge: &GaugeAddress,
    ) -> Result<bool, CollaboratorError>;

    /// Whether the primary controller knows `gauge` under `gauge_type`.
    async fn check_recognized(
        &self,
        gauge_type: GaugeType,
        gauge: &GaugeAddress,
    ) -> Result<bool, CollaboratorError>;

    /// Whether `gauge` reports itself as killed.
    async fn check_killed(&self, gauge: &GaugeAddress) -> Result<bool, CollaboratorError>;
}

/// [`GaugeValidator`] backed by the real collaborator interfaces.
#[derive(Clone)]
pub struct CollaboratorValidator {
    controller: Arc<dyn GaugeController>,
    adder: Arc<dyn GaugeAdder>,
    liveness: Arc<dyn GaugeLiveness>,
}

impl CollaboratorValidator {
    pub fn new(
        controller: Arc<dyn GaugeController>,
        adder: Arc<dyn GaugeAdder>,
        liveness: Arc<dyn GaugeLiveness>,
    ) -> Self {
        Self {
            controller,
            adder,
            liveness,
        }
    }
}

#[async_trait]
impl GaugeValidator for CollaboratorValidator {
    async fn check_provenance(
        &self,
        gauge_type: GaugeType,
        gauge: &GaugeAddress,
    ) -> Result<bool, CollaboratorError> {
        self.adder.is_gauge_from_valid_factory(gauge, gauge_type).await
    }

    async fn check_recognized(
        &self,
        gauge_type: GaugeType,
        gauge: &GaugeAddress,
    ) -> Result<bool, CollaboratorError> {
        self.controller.gauge_exists(gauge_type, gauge).await
    }

    async fn check_killed(&self, gauge: &GaugeAddress) -> Result<bool, CollaboratorError> {
        self.liveness.is_killed(gauge).await
    }
}
