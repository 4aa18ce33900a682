//! Errors raised by external collaborators.

use thiserror::Error;

/// Failure answering a query against the controller, the adder or a gauge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("Collaborator unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid collaborator response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Custom(String),
}
