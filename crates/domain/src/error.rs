//! Domain error types.

use common::WorkOrderId;
use thiserror::Error;

use crate::validation;

/// Canonical labels for aggregate kinds, used in not-found messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateKind {
    WorkOrder,
}

impl AggregateKind {
    /// Returns the lowercase label for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateKind::WorkOrder => "workorder",
        }
    }
}

impl std::fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// One or more invariant violations, collected at construction time.
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<validation::Error>,
    },

    /// The requested aggregate has no stored instance.
    #[error("{kind} with id {id} was not found")]
    NotFound { kind: AggregateKind, id: WorkOrderId },

    /// An input token does not map to a known value.
    #[error("{message}")]
    InvalidArgument { message: String },

    /// Failure surfaced by a port implementation, passed through unchanged.
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DomainError {
    /// Validation failure aggregating every violation found.
    pub fn validation(message: impl Into<String>, errors: Vec<validation::Error>) -> Self {
        DomainError::Validation {
            message: message.into(),
            errors,
        }
    }

    /// Validation failure carrying exactly one violation.
    pub fn from_violation(error: validation::Error) -> Self {
        DomainError::Validation {
            message: error.message().to_string(),
            errors: vec![error],
        }
    }

    /// Not-found failure for the given aggregate kind and id.
    pub fn not_found(kind: AggregateKind, id: WorkOrderId) -> Self {
        DomainError::NotFound { kind, id }
    }

    /// Invalid-argument failure for an unparseable input token.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        DomainError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Infra failure with no underlying cause to attach.
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Infra failure wrapping an underlying cause.
    pub fn internal_with(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        DomainError::Internal {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// The violations carried by a validation failure, empty otherwise.
    pub fn violations(&self) -> &[validation::Error] {
        match self {
            DomainError::Validation { errors, .. } => errors,
            _ => &[],
        }
    }
}
