//! Read-only interfaces of the systems the registry validates against.
//!
//! The registry never writes to any of these. Each query either answers
//! or fails with a [`CollaboratorError`].

use async_trait::async_trait;

use crate::error::CollaboratorError;
use crate::types::{FactoryId, GaugeAddress, GaugeType};

/// Primary gauge controller.
#[async_trait]
pub trait GaugeController: Send + Sync {
    /// Whether `gauge` is registered in the controller under `gauge_type`.
    async fn gauge_exists(
        &self,
        gauge_type: GaugeType,
        gauge: &GaugeAddress,
    ) -> Result<bool, CollaboratorError>;
}

/// Factory provenance source.
#[async_trait]
pub trait GaugeAdder: Send + Sync {
    /// Factory registered for `gauge_type`, if any.
    async fn factory_for(
        &self,
        gauge_type: GaugeType,
    ) -> Result<Option<FactoryId>, CollaboratorError>;

    /// Factory that minted `gauge`, if it is known at all.
    async fn created_by(
        &self,
        gauge: &GaugeAddress,
    ) -> Result<Option<FactoryId>, CollaboratorError>;

    /// Whether `gauge` was minted by the factory registered for `gauge_type`.
    async fn is_gauge_from_valid_factory(
        &self,
        gauge: &GaugeAddress,
        gauge_type: GaugeType,
    ) -> Result<bool, CollaboratorError> {
        let Some(expected) = self.factory_for(gauge_type).await? else {
            return Ok(false);
        };
        Ok(self.created_by(gauge).await?.as_ref() == Some(&expected))
    }
}

/// Kill status, owned by each gauge instance.
#[async_trait]
pub trait GaugeLiveness: Send + Sync {
    /// Whether `gauge` has been deactivated.
    async fn is_killed(&self, gauge: &GaugeAddress) -> Result<bool, CollaboratorError>;
}
