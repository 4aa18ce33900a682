//! Validation gate in front of the gauge store.
//!
//! `add_gauges` and `remove_gauges` are the only paths into and out of the
//! store. Each call validates its whole batch before mutating anything, and
//! holds the store's write lock throughout, so callers never observe a
//! partially applied batch.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, warn};

use stakeless_protocols::{
    GaugeAddress, GaugeAdder, GaugeController, GaugeEvent, GaugeLiveness, GaugeType,
    RegistryError, SupportedTypes,
};

use crate::events::{EventBus, EventStats};
use crate::registry::GaugeStore;
use crate::validator::{CollaboratorValidator, GaugeValidator};

/// Registry of stakeless gauges per gauge type.
pub struct StakelessGaugeRegistry {
    supported: SupportedTypes,
    validator: Arc<dyn GaugeValidator>,
    store: RwLock<GaugeStore>,
    events: EventBus,
}

impl StakelessGaugeRegistry {
    /// Create a registry admitting the default gauge types.
    pub fn new(validator: Arc<dyn GaugeValidator>) -> Self {
        Self {
            supported: SupportedTypes::default(),
            validator,
            store: RwLock::new(GaugeStore::new()),
            events: EventBus::default(),
        }
    }

    /// Create a registry validating directly against the collaborators.
    pub fn from_collaborators(
        controller: Arc<dyn GaugeController>,
        adder: Arc<dyn GaugeAdder>,
        liveness: Arc<dyn GaugeLiveness>,
    ) -> Self {
        Self::new(Arc::new(CollaboratorValidator::new(
            controller, adder, liveness,
        )))
    }

    /// Replace the admitted gauge types.
    pub fn with_supported_types(mut self, supported: SupportedTypes) -> Self {
        self.supported = supported;
        self
    }

    /// Publish notifications through `events`.
    pub fn with_event_bus(mut self, events: EventBus) -> Self {
        self.events = events;
        self
    }

    /// Admit `gauges` under `gauge_type`.
    ///
    /// Every gauge must come from the type's factory, be known to the
    /// controller, be alive, and not already be registered for the type.
    /// The first violation aborts the call with nothing inserted.
    pub async fn add_gauges(
        &self,
        gauge_type: GaugeType,
        gauges: &[GaugeAddress],
    ) -> Result<(), RegistryError> {
        if !self.supported.contains(gauge_type) {
            return Err(self.reject(RegistryError::UnsupportedCategory { gauge_type }));
        }

        let mut store = self.store.write().await;

        let mut pending: HashSet<&GaugeAddress> = HashSet::with_capacity(gauges.len());
        for gauge in gauges {
            if let Err(err) = self.validate_addition(&store, &pending, gauge_type, gauge).await {
                return Err(self.reject(err));
            }
            pending.insert(gauge);
        }

        for gauge in gauges {
            store.insert(gauge_type, gauge.clone());
            debug!("Gauge added: {} ({})", gauge, gauge_type);
        }

        info!(
            "Added {} gauges to {} (total {})",
            gauges.len(),
            gauge_type,
            store.total_count(gauge_type)
        );
        self.events.emit(GaugeEvent::GaugesAdded {
            gauge_type,
            gauges: gauges.to_vec(),
        });
        Ok(())
    }

    /// Remove `gauges` from `gauge_type`.
    ///
    /// Every gauge must already be killed and currently registered for the
    /// type. The first violation aborts the call with nothing removed.
    pub async fn remove_gauges(
        &self,
        gauge_type: GaugeType,
        gauges: &[GaugeAddress],
    ) -> Result<(), RegistryError> {
        let mut store = self.store.write().await;

        let mut pending: HashSet<&GaugeAddress> = HashSet::with_capacity(gauges.len());
        for gauge in gauges {
            if let Err(err) = self.validate_removal(&store, &pending, gauge_type, gauge).await {
                return Err(self.reject(err));
            }
            pending.insert(gauge);
        }

        for gauge in gauges {
            store.remove(gauge_type, gauge);
            debug!("Gauge removed: {} ({})", gauge, gauge_type);
        }

        info!(
            "Removed {} gauges from {} (total {})",
            gauges.len(),
            gauge_type,
            store.total_count(gauge_type)
        );
        self.events.emit(GaugeEvent::GaugesRemoved {
            gauge_type,
            gauges: gauges.to_vec(),
        });
        Ok(())
    }

    /// Number of gauges registered for `gauge_type`.
    pub async fn total_gauges(&self, gauge_type: GaugeType) -> usize {
        self.store.read().await.total_count(gauge_type)
    }

    /// Gauge at `index` for `gauge_type`.
    pub async fn gauge_at(
        &self,
        gauge_type: GaugeType,
        index: usize,
    ) -> Result<GaugeAddress, RegistryError> {
        self.store.read().await.entry_at(gauge_type, index).cloned()
    }

    /// Check whether `gauge` is registered for `gauge_type`.
    pub async fn is_gauge_present(&self, gauge_type: GaugeType, gauge: &GaugeAddress) -> bool {
        self.store.read().await.contains(gauge_type, gauge)
    }

    /// Snapshot of the gauges registered for `gauge_type`, in storage order.
    pub async fn gauges(&self, gauge_type: GaugeType) -> Vec<GaugeAddress> {
        self.store.read().await.entries(gauge_type).to_vec()
    }

    /// Gauge types this registry admits.
    pub fn supported_types(&self) -> SupportedTypes {
        self.supported
    }

    /// Subscribe to `GaugesAdded` / `GaugesRemoved` notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<GaugeEvent> {
        self.events.subscribe()
    }

    /// Running notification and rejection totals.
    pub fn event_stats(&self) -> EventStats {
        self.events.stats()
    }

    async fn validate_addition(
        &self,
        store: &GaugeStore,
        pending: &HashSet<&GaugeAddress>,
        gauge_type: GaugeType,
        gauge: &GaugeAddress,
    ) -> Result<(), RegistryError> {
        let from_factory = self
            .validator
            .check_provenance(gauge_type, gauge)
            .await
            .unwrap_or_else(|e| {
                warn!("Provenance check failed for {}: {}", gauge, e);
                false
            });
        if !from_factory {
            return Err(RegistryError::InvalidProvenance {
                gauge_type,
                gauge: gauge.clone(),
            });
        }

        let recognized = self
            .validator
            .check_recognized(gauge_type, gauge)
            .await
            .unwrap_or_else(|e| {
                warn!("Controller check failed for {}: {}", gauge, e);
                false
            });
        if !recognized {
            return Err(RegistryError::NotRecognizedByController {
                gauge_type,
                gauge: gauge.clone(),
            });
        }

        // An unanswerable liveness query is treated as killed.
        let killed = self.validator.check_killed(gauge).await.unwrap_or_else(|e| {
            warn!("Kill status check failed for {}: {}", gauge, e);
            true
        });
        if killed {
            return Err(RegistryError::GaugeAlreadyKilled {
                gauge_type,
                gauge: gauge.clone(),
            });
        }

        if store.contains(gauge_type, gauge) || pending.contains(gauge) {
            return Err(RegistryError::DuplicateEntry {
                gauge_type,
                gauge: gauge.clone(),
            });
        }

        Ok(())
    }

    async fn validate_removal(
        &self,
        store: &GaugeStore,
        pending: &HashSet<&GaugeAddress>,
        gauge_type: GaugeType,
        gauge: &GaugeAddress,
    ) -> Result<(), RegistryError> {
        // An unanswerable liveness query is treated as still alive.
        let killed = self.validator.check_killed(gauge).await.unwrap_or_else(|e| {
            warn!("Kill status check failed for {}: {}", gauge, e);
            false
        });
        if !killed {
            return Err(RegistryError::GaugeNotKilled {
                gauge_type,
                gauge: gauge.clone(),
            });
        }

        if !store.contains(gauge_type, gauge) || pending.contains(gauge) {
            return Err(RegistryError::EntryNotPresent {
                gauge_type,
                gauge: gauge.clone(),
            });
        }

        Ok(())
    }

    fn reject(&self, err: RegistryError) -> RegistryError {
        warn!("Rejected gauge batch for {}: {}", err.gauge_type(), err);
        self.events.record_rejection();
        err
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
