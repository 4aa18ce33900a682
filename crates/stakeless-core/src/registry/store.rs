//! Per-type gauge lists.
//!
//! Each gauge type owns an index-addressed list plus a reverse lookup from
//! gauge to position, so membership and removal are both O(1). Removal swaps
//! the target with the last entry and pops, which does not preserve order.

use std::collections::HashMap;

use stakeless_protocols::{GaugeAddress, GaugeType, RegistryError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TypeEntries {
    gauges: Vec<GaugeAddress>,
    index: HashMap<GaugeAddress, usize>,
}

/// Gauge lists keyed by gauge type.
///
/// The store performs no validation. Callers check [`GaugeStore::contains`]
/// before inserting or removing; `insert` and `remove` report a no-op by
/// returning `false` instead of corrupting the index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GaugeStore {
    types: HashMap<GaugeType, TypeEntries>,
}

impl GaugeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of gauges stored for `gauge_type`.
    pub fn total_count(&self, gauge_type: GaugeType) -> usize {
        self.types
            .get(&gauge_type)
            .map_or(0, |entries| entries.gauges.len())
    }

    /// Gauge at `index` in `gauge_type`'s list.
    pub fn entry_at(
        &self,
        gauge_type: GaugeType,
        index: usize,
    ) -> Result<&GaugeAddress, RegistryError> {
        self.entries(gauge_type)
            .get(index)
            .ok_or(RegistryError::OutOfRange {
                gauge_type,
                index,
                len: self.total_count(gauge_type),
            })
    }

    /// Check whether `gauge` is stored for `gauge_type`.
    pub fn contains(&self, gauge_type: GaugeType, gauge: &GaugeAddress) -> bool {
        self.types
            .get(&gauge_type)
            .is_some_and(|entries| entries.index.contains_key(gauge))
    }

    /// All gauges for `gauge_type`, in storage order.
    pub fn entries(&self, gauge_type: GaugeType) -> &[GaugeAddress] {
        self.types
            .get(&gauge_type)
            .map(|entries| entries.gauges.as_slice())
            .unwrap_or_default()
    }

    /// Append `gauge` to `gauge_type`'s list.
    ///
    /// Returns `false` without touching the store if it is already present.
    pub fn insert(&mut self, gauge_type: GaugeType, gauge: GaugeAddress) -> bool {
        let entries = self.types.entry(gauge_type).or_default();
        if entries.index.contains_key(&gauge) {
            return false;
        }

        entries.index.insert(gauge.clone(), entries.gauges.len());
        entries.gauges.push(gauge);
        true
    }

    /// Remove `gauge` from `gauge_type`'s list by swapping in the last entry.
    ///
    /// Returns `false` without touching the store if it is not present.
    pub fn remove(&mut self, gauge_type: GaugeType, gauge: &GaugeAddress) -> bool {
        let Some(entries) = self.types.get_mut(&gauge_type) else {
            return false;
        };
        let Some(position) = entries.index.remove(gauge) else {
            return false;
        };

        entries.gauges.swap_remove(position);
        if let Some(moved) = entries.gauges.get(position) {
            entries.index.insert(moved.clone(), position);
        }

        if entries.gauges.is_empty() {
            self.types.remove(&gauge_type);
        }
        true
    }

    /// Total number of gauges across all types.
    pub fn len(&self) -> usize {
        self.types.values().map(|entries| entries.gauges.len()).sum()
    }

    /// Check if no type holds any gauge.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Verify that every reverse-lookup entry points at its gauge.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.types.values().all(|entries| {
            entries.index.len() == entries.gauges.len()
                && entries
                    .gauges
                    .iter()
                    .enumerate()
                    .all(|(i, gauge)| entries.index.get(gauge) == Some(&i))
        })
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
