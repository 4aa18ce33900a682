//! Notification fan-out for registry changes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::debug;

use stakeless_protocols::GaugeEvent;

/// Default number of buffered notifications per subscriber.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

#[derive(Default)]
struct Counters {
    added: AtomicU64,
    removed: AtomicU64,
    rejected: AtomicU64,
}

/// Running totals since the bus was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EventStats {
    /// Gauges added across all `GaugesAdded` notifications.
    pub added_total: u64,
    /// Gauges removed across all `GaugesRemoved` notifications.
    pub removed_total: u64,
    /// Add/remove calls rejected by validation.
    pub rejected_total: u64,
}

/// Broadcasts [`GaugeEvent`]s to any number of subscribers.
///
/// Subscribers that fall behind by more than the capacity lose the oldest
/// notifications (`RecvError::Lagged`).
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<GaugeEvent>,
    counters: Arc<Counters>,
}

impl EventBus {
    /// Create a bus buffering `capacity` notifications.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            counters: Arc::new(Counters::default()),
        }
    }

    /// Subscribe to notifications emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<GaugeEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Emit a notification. Having no subscribers is not an error.
    pub fn emit(&self, event: GaugeEvent) {
        let count = event.gauges().len() as u64;
        match &event {
            GaugeEvent::GaugesAdded { .. } => {
                self.counters.added.fetch_add(count, Ordering::Relaxed);
            }
            GaugeEvent::GaugesRemoved { .. } => {
                self.counters.removed.fetch_add(count, Ordering::Relaxed);
            }
        }

        match self.sender.send(event) {
            Ok(receivers) => debug!("Gauge event delivered to {} subscribers", receivers),
            Err(_) => debug!("Gauge event dropped: no subscribers"),
        }
    }

    /// Count a rejected add/remove call.
    pub fn record_rejection(&self) {
        self.counters.rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot of the running totals.
    pub fn stats(&self) -> EventStats {
        EventStats {
            added_total: self.counters.added.load(Ordering::Relaxed),
            removed_total: self.counters.removed.load(Ordering::Relaxed),
            rejected_total: self.counters.rejected.load(Ordering::Relaxed),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}
