//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use stakeless_protocols::{GaugeType, SupportedTypes};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Registry admission and notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Lowest gauge type the registry admits.
    #[serde(default = "default_first_supported_type")]
    pub first_supported_type: GaugeType,

    /// Notifications buffered per subscriber.
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

impl RegistryConfig {
    pub fn supported_types(&self) -> SupportedTypes {
        SupportedTypes::from_threshold(self.first_supported_type)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            first_supported_type: default_first_supported_type(),
            event_capacity: default_event_capacity(),
        }
    }
}

fn default_first_supported_type() -> GaugeType {
    GaugeType::Polygon
}

fn default_event_capacity() -> usize {
    256
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// Directory for daily-rotated log files. Console only when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
