//! In-memory collaborators.
//!
//! Self-contained stand-ins for the primary controller, the factory adder,
//! gauge factories and the gauge instances they mint. Useful for tests and
//! for embedding the registry without external systems.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::RwLock;
use tracing::debug;

use stakeless_protocols::{
    CollaboratorError, FactoryId, GaugeAddress, GaugeAdder, GaugeController, GaugeLiveness,
    GaugeType,
};

#[derive(Debug, Clone)]
struct GaugeInstance {
    factory: FactoryId,
    killed: bool,
}

/// Every gauge instance minted by any [`InMemoryGaugeFactory`].
///
/// Answers kill-status queries the way each instance would.
#[derive(Default)]
pub struct InMemoryGauges {
    instances: RwLock<HashMap<GaugeAddress, GaugeInstance>>,
}

impl InMemoryGauges {
    pub fn new() -> Self {
        Self::default()
    }

    fn mint(&self, factory: &FactoryId) -> GaugeAddress {
        let address = GaugeAddress::random();
        self.instances.write().insert(
            address.clone(),
            GaugeInstance {
                factory: factory.clone(),
                killed: false,
            },
        );
        address
    }

    /// Factory that minted `gauge`.
    pub fn factory_of(&self, gauge: &GaugeAddress) -> Option<FactoryId> {
        self.instances
            .read()
            .get(gauge)
            .map(|instance| instance.factory.clone())
    }

    /// Deactivate `gauge`.
    pub fn kill_gauge(&self, gauge: &GaugeAddress) -> Result<(), CollaboratorError> {
        self.set_killed(gauge, true)
    }

    /// Reactivate `gauge`.
    pub fn unkill_gauge(&self, gauge: &GaugeAddress) -> Result<(), CollaboratorError> {
        self.set_killed(gauge, false)
    }

    pub fn len(&self) -> usize {
        self.instances.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.read().is_empty()
    }

    fn set_killed(&self, gauge: &GaugeAddress, killed: bool) -> Result<(), CollaboratorError> {
        let mut instances = self.instances.write();
        let instance = instances
            .get_mut(gauge)
            .ok_or_else(|| CollaboratorError::InvalidResponse(format!("unknown gauge {}", gauge)))?;
        instance.killed = killed;
        debug!("Gauge {} killed={}", gauge, killed);
        Ok(())
    }
}

#[async_trait]
impl GaugeLiveness for InMemoryGauges {
    async fn is_killed(&self, gauge: &GaugeAddress) -> Result<bool, CollaboratorError> {
        self.instances
            .read()
            .get(gauge)
            .map(|instance| instance.killed)
            .ok_or_else(|| CollaboratorError::InvalidResponse(format!("unknown gauge {}", gauge)))
    }
}

/// A gauge factory minting fresh gauge instances.
pub struct InMemoryGaugeFactory {
    id: FactoryId,
    gauges: Arc<InMemoryGauges>,
}

impl InMemoryGaugeFactory {
    /// Create a factory with a random id.
    pub fn new(gauges: Arc<InMemoryGauges>) -> Self {
        Self {
            id: FactoryId::random(),
            gauges,
        }
    }

    pub fn id(&self) -> &FactoryId {
        &self.id
    }

    /// Mint a new gauge.
    pub fn create(&self) -> GaugeAddress {
        let gauge = self.gauges.mint(&self.id);
        debug!("Factory {} created gauge {}", self.id, gauge);
        gauge
    }

    /// Mint `amount` new gauges.
    pub fn create_many(&self, amount: usize) -> Vec<GaugeAddress> {
        (0..amount).map(|_| self.create()).collect()
    }

    /// Whether this factory minted `gauge`.
    pub fn is_gauge_from_factory(&self, gauge: &GaugeAddress) -> bool {
        self.gauges.factory_of(gauge).as_ref() == Some(&self.id)
    }
}

/// Factory adder: one approved factory per gauge type.
pub struct InMemoryGaugeAdder {
    factories: DashMap<GaugeType, FactoryId>,
    gauges: Arc<InMemoryGauges>,
}

impl InMemoryGaugeAdder {
    pub fn new(gauges: Arc<InMemoryGauges>) -> Self {
        Self {
            factories: DashMap::new(),
            gauges,
        }
    }

    /// Approve `factory` for `gauge_type`.
    ///
    /// Re-approving the same factory is a no-op; replacing a type's factory
    /// with a different one fails.
    pub fn add_gauge_factory(
        &self,
        factory: &FactoryId,
        gauge_type: GaugeType,
    ) -> Result<(), CollaboratorError> {
        match self.factories.entry(gauge_type) {
            Entry::Occupied(existing) if existing.get() == factory => Ok(()),
            Entry::Occupied(existing) => Err(CollaboratorError::Custom(format!(
                "factory {} already registered for {}",
                existing.get(),
                gauge_type
            ))),
            Entry::Vacant(slot) => {
                slot.insert(factory.clone());
                debug!("Factory {} approved for {}", factory, gauge_type);
                Ok(())
            }
        }
    }
}

#[async_trait]
impl GaugeAdder for InMemoryGaugeAdder {
    async fn factory_for(
        &self,
        gauge_type: GaugeType,
    ) -> Result<Option<FactoryId>, CollaboratorError> {
        Ok(self.factories.get(&gauge_type).map(|f| f.value().clone()))
    }

    async fn created_by(
        &self,
        gauge: &GaugeAddress,
    ) -> Result<Option<FactoryId>, CollaboratorError> {
        Ok(self.gauges.factory_of(gauge))
    }
}

/// Primary controller tracking which gauges exist under which type.
#[derive(Default)]
pub struct InMemoryGaugeController {
    gauges: DashMap<GaugeAddress, GaugeType>,
}

impl InMemoryGaugeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `gauge` under `gauge_type`.
    pub fn add_gauge(
        &self,
        gauge: &GaugeAddress,
        gauge_type: GaugeType,
    ) -> Result<(), CollaboratorError> {
        match self.gauges.entry(gauge.clone()) {
            Entry::Occupied(_) => Err(CollaboratorError::Custom(format!(
                "gauge {} already added",
                gauge
            ))),
            Entry::Vacant(slot) => {
                slot.insert(gauge_type);
                Ok(())
            }
        }
    }

    /// Forget `gauge`. Returns whether it was known.
    pub fn remove_gauge(&self, gauge: &GaugeAddress) -> bool {
        self.gauges.remove(gauge).is_some()
    }
}

#[async_trait]
impl GaugeController for InMemoryGaugeController {
    async fn gauge_exists(
        &self,
        gauge_type: GaugeType,
        gauge: &GaugeAddress,
    ) -> Result<bool, CollaboratorError> {
        Ok(self
            .gauges
            .get(gauge)
            .is_some_and(|t| *t.value() == gauge_type))
    }
}
