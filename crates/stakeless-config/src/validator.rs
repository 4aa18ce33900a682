//! Configuration validation.

use stakeless_protocols::GaugeType;

use crate::schema::Config;

const VALID_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_registry(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_registry(config: &Config, result: &mut ValidationResult) {
        if config.registry.event_capacity == 0 {
            result.add_error(ValidationError::new(
                "registry.event_capacity",
                "event_capacity must be greater than 0",
            ));
        }

        // These types are checkpointed by the primary controller itself.
        if config.registry.first_supported_type < GaugeType::Ethereum {
            result.add_warning(ValidationWarning::new(
                "registry.first_supported_type",
                format!(
                    "'{}' admits gauge types the primary controller checkpoints directly",
                    config.registry.first_supported_type
                ),
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        // Only plain levels are checked; directive lists are left to EnvFilter.
        let level = config.logging.level.trim();
        if level.is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "Log level cannot be empty",
            ));
        } else if !level.contains(['=', ','])
            && !VALID_LEVELS.contains(&level.to_ascii_lowercase().as_str())
        {
            result.add_error(ValidationError::new(
                "logging.level",
                format!(
                    "Unknown log level '{}', valid values: {:?}",
                    level, VALID_LEVELS
                ),
            ));
        }

        if let Some(ref dir) = config.logging.dir {
            if dir.exists() && !dir.is_dir() {
                result.add_error(ValidationError::new(
                    "logging.dir",
                    format!("Log path exists but is not a directory: {:?}", dir),
                ));
            }
        }
    }
}
