use serde::{Deserialize, Serialize};

/// Unique identifier for a work order.
///
/// Wraps the opaque identifier assigned by the upstream ordering system to
/// provide type safety and prevent mixing up work-order ids with other
/// string-based identifiers. Equality and hashing are by value.
///
/// The identifier itself is never inspected here: emptiness is checked by the
/// aggregate's invariants, not at the identifier boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkOrderId(String);

impl WorkOrderId {
    /// Creates a work-order id from an existing value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for WorkOrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WorkOrderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for WorkOrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for WorkOrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
