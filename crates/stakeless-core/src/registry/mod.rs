//! Storage for registered gauges.

mod store;

pub use store::GaugeStore;
