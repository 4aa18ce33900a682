//! Gauge categories and the admission threshold.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IdentifierError;

/// Category of a gauge.
///
/// Discriminants match the ordering used by the primary controller. Types
/// below the registry's threshold are checkpointed by the controller
/// directly and never admitted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum GaugeType {
    LiquidityMiningCommittee = 0,
    VeBal = 1,
    Ethereum = 2,
    Polygon = 3,
    Arbitrum = 4,
    Optimism = 5,
    Gnosis = 6,
    ZkSync = 7,
}

impl GaugeType {
    /// Every known gauge type, in discriminant order.
    pub const ALL: [GaugeType; 8] = [
        GaugeType::LiquidityMiningCommittee,
        GaugeType::VeBal,
        GaugeType::Ethereum,
        GaugeType::Polygon,
        GaugeType::Arbitrum,
        GaugeType::Optimism,
        GaugeType::Gnosis,
        GaugeType::ZkSync,
    ];

    /// Integer value of this type.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            GaugeType::LiquidityMiningCommittee => "liquidity_mining_committee",
            GaugeType::VeBal => "ve_bal",
            GaugeType::Ethereum => "ethereum",
            GaugeType::Polygon => "polygon",
            GaugeType::Arbitrum => "arbitrum",
            GaugeType::Optimism => "optimism",
            GaugeType::Gnosis => "gnosis",
            GaugeType::ZkSync => "zk_sync",
        }
    }
}

impl fmt::Display for GaugeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for GaugeType {
    type Error = IdentifierError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        GaugeType::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(IdentifierError::UnknownGaugeType(value.to_string()))
    }
}

impl FromStr for GaugeType {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        if let Ok(value) = needle.parse::<u8>() {
            return GaugeType::try_from(value);
        }
        GaugeType::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| IdentifierError::UnknownGaugeType(s.to_string()))
    }
}

/// The closed set of gauge types this registry admits.
///
/// A type is supported when its discriminant is at or above `first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedTypes {
    first: GaugeType,
}

impl SupportedTypes {
    /// Admit every type from `first` upwards.
    pub fn from_threshold(first: GaugeType) -> Self {
        Self { first }
    }

    /// Lowest admitted type.
    pub fn threshold(&self) -> GaugeType {
        self.first
    }

    /// Check whether `gauge_type` is admitted.
    pub fn contains(&self, gauge_type: GaugeType) -> bool {
        gauge_type >= self.first
    }

    /// Iterate over the admitted types in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = GaugeType> + '_ {
        GaugeType::ALL.into_iter().filter(|t| self.contains(*t))
    }

    /// Iterate over the rejected types in ascending order.
    pub fn unsupported(&self) -> impl Iterator<Item = GaugeType> + '_ {
        GaugeType::ALL.into_iter().filter(|t| !self.contains(*t))
    }
}

impl Default for SupportedTypes {
    fn default() -> Self {
        Self::from_threshold(GaugeType::Polygon)
    }
}

#[cfg(test)]
#[path = "gauge_type_tests.rs"]
mod tests;
