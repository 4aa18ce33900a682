//! Registry rejections.
//!
//! Every variant rejects the current call only. A failed call leaves the
//! registry exactly as it was.

use thiserror::Error;

use crate::types::{GaugeAddress, GaugeType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Unsupported gauge type: {gauge_type}")]
    UnsupportedCategory { gauge_type: GaugeType },

    #[error("Gauge does not come from valid factory: {gauge} ({gauge_type})")]
    InvalidProvenance {
        gauge_type: GaugeType,
        gauge: GaugeAddress,
    },

    #[error("Gauge does not exist in controller: {gauge} ({gauge_type})")]
    NotRecognizedByController {
        gauge_type: GaugeType,
        gauge: GaugeAddress,
    },

    #[error("Gauge was killed: {gauge} ({gauge_type})")]
    GaugeAlreadyKilled {
        gauge_type: GaugeType,
        gauge: GaugeAddress,
    },

    #[error("Gauge already present: {gauge} ({gauge_type})")]
    DuplicateEntry {
        gauge_type: GaugeType,
        gauge: GaugeAddress,
    },

    #[error("Gauge was not killed: {gauge} ({gauge_type})")]
    GaugeNotKilled {
        gauge_type: GaugeType,
        gauge: GaugeAddress,
    },

    #[error("Gauge not present: {gauge} ({gauge_type})")]
    EntryNotPresent {
        gauge_type: GaugeType,
        gauge: GaugeAddress,
    },

    #[error("Index out of bounds: {index} >= {len} ({gauge_type})")]
    OutOfRange {
        gauge_type: GaugeType,
        index: usize,
        len: usize,
    },
}

impl RegistryError {
    /// Whether this is an admission rejection from add/remove rather than
    /// a bad query.
    pub fn is_validation(&self) -> bool {
        !matches!(self, RegistryError::OutOfRange { .. })
    }

    /// Gauge type the failed call was about.
    pub fn gauge_type(&self) -> GaugeType {
        match self {
            RegistryError::UnsupportedCategory { gauge_type }
            | RegistryError::InvalidProvenance { gauge_type, .. }
            | RegistryError::NotRecognizedByController { gauge_type, .. }
            | RegistryError::GaugeAlreadyKilled { gauge_type, .. }
            | RegistryError::DuplicateEntry { gauge_type, .. }
            | RegistryError::GaugeNotKilled { gauge_type, .. }
            | RegistryError::EntryNotPresent { gauge_type, .. }
            | RegistryError::OutOfRange { gauge_type, .. } => *gauge_type,
        }
    }

    /// Offending gauge, if the rejection concerns a single entry.
    pub fn gauge(&self) -> Option<&GaugeAddress> {
        match self {
            RegistryError::InvalidProvenance { gauge, .. }
            | RegistryError::NotRecognizedByController { gauge, .. }
            | RegistryError::GaugeAlreadyKilled { gauge, .. }
            | RegistryError::DuplicateEntry { gauge, .. }
            | RegistryError::GaugeNotKilled { gauge, .. }
            | RegistryError::EntryNotPresent { gauge, .. } => Some(gauge),
            RegistryError::UnsupportedCategory { .. } | RegistryError::OutOfRange { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gauge() -> GaugeAddress {
        GaugeAddress::new("0xg1").unwrap()
    }

    #[test]
    fn test_unsupported_category_error() {
        let err = RegistryError::UnsupportedCategory {
            gauge_type: GaugeType::Ethereum,
        };
        assert!(err.to_string().contains("Unsupported gauge type"));
        assert!(err.to_string().contains("ethereum"));
        assert!(err.gauge().is_none());
        assert!(err.is_validation());
    }

    #[test]
    fn test_entry_errors_carry_gauge() {
        let errors = vec![
            RegistryError::InvalidProvenance { gauge_type: GaugeType::Polygon, gauge: gauge() },
            RegistryError::NotRecognizedByController { gauge_type: GaugeType::Polygon, gauge: gauge() },
            RegistryError::GaugeAlreadyKilled { gauge_type: GaugeType::Polygon, gauge: gauge() },
            RegistryError::DuplicateEntry { gauge_type: GaugeType::Polygon, gauge: gauge() },
            RegistryError::GaugeNotKilled { gauge_type: GaugeType::Polygon, gauge: gauge() },
            RegistryError::EntryNotPresent { gauge_type: GaugeType::Polygon, gauge: gauge() },
        ];

        for err in errors {
            assert_eq!(err.gauge(), Some(&gauge()));
            assert_eq!(err.gauge_type(), GaugeType::Polygon);
            assert!(err.to_string().contains("0xg1"));
            assert!(err.is_validation());
        }
    }

    #[test]
    fn test_reason_strings() {
        let killed = RegistryError::GaugeAlreadyKilled { gauge_type: GaugeType::Arbitrum, gauge: gauge() };
        assert!(killed.to_string().starts_with("Gauge was killed"));

        let not_killed = RegistryError::GaugeNotKilled { gauge_type: GaugeType::Arbitrum, gauge: gauge() };
        assert!(not_killed.to_string().starts_with("Gauge was not killed"));

        let absent = RegistryError::EntryNotPresent { gauge_type: GaugeType::Arbitrum, gauge: gauge() };
        assert!(absent.to_string().starts_with("Gauge not present"));
    }

    #[test]
    fn test_out_of_range_error() {
        let err = RegistryError::OutOfRange {
            gauge_type: GaugeType::Gnosis,
            index: 3,
            len: 3,
        };
        assert!(err.to_string().contains("3 >= 3"));
        assert!(!err.is_validation());
        assert_eq!(err.gauge_type(), GaugeType::Gnosis);
    }
}
