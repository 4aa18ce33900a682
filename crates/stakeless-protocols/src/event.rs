//! Change notifications emitted by the registry.

use serde::{Deserialize, Serialize};

use crate::types::{GaugeAddress, GaugeType};

/// One notification per successful add/remove call, carrying the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum GaugeEvent {
    GaugesAdded {
        gauge_type: GaugeType,
        gauges: Vec<GaugeAddress>,
    },
    GaugesRemoved {
        gauge_type: GaugeType,
        gauges: Vec<GaugeAddress>,
    },
}

impl GaugeEvent {
    pub fn gauge_type(&self) -> GaugeType {
        match self {
            GaugeEvent::GaugesAdded { gauge_type, .. }
            | GaugeEvent::GaugesRemoved { gauge_type, .. } => *gauge_type,
        }
    }

    pub fn gauges(&self) -> &[GaugeAddress] {
        match self {
            GaugeEvent::GaugesAdded { gauges, .. } | GaugeEvent::GaugesRemoved { gauges, .. } => {
                gauges
            }
        }
    }
}
