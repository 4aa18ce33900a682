//! Identifier parsing errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("Empty {0}")]
    Empty(&'static str),

    #[error("Unknown gauge type: {0}")]
    UnknownGaugeType(String),
}
