//! Validation primitives shared by every aggregate.
//!
//! A [`ValidationHandler`] decides what happens when a violation is reported:
//! the [`Notification`] strategy accumulates every violation so the caller can
//! see all of them at once, while [`FailFast`] surfaces the first one
//! immediately. Aggregates self-check through the accumulating strategy; ad
//! hoc call sites that want stop-at-first-problem semantics pass [`FailFast`].

mod handlers;

pub use handlers::{FailFast, Notification};

use serde::Serialize;

use crate::error::DomainError;

/// A single validation failure message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Error {
    message: String,
}

impl Error {
    /// Creates a validation message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Strategy controlling how validation failures are collected or surfaced.
pub trait ValidationHandler {
    /// Reports a single violation under this handler's policy.
    fn append(&mut self, error: Error) -> Result<(), DomainError>;

    /// Merges every violation accumulated by another run.
    fn append_all(&mut self, errors: Vec<Error>) -> Result<(), DomainError>;

    /// Runs a fallible computation under this handler's policy.
    ///
    /// Accumulating handlers record the failure message and yield `None`;
    /// fail-fast handlers surface the failure immediately.
    fn validate<T>(
        &mut self,
        validation: impl FnOnce() -> Result<T, DomainError>,
    ) -> Result<Option<T>, DomainError>;

    /// Violations recorded so far; always empty for fail-fast handlers.
    fn errors(&self) -> &[Error];

    /// Returns true when at least one violation has been recorded.
    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }
}
