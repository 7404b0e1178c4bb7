//! Work order preparation status.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The preparation status of a work order.
///
/// A freshly received order starts in `Received`. There is no enforced
/// transition table: any status may be set from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkOrderStatus {
    /// Order accepted by the kitchen, not started yet.
    Received,

    /// Preparation in progress.
    Preparing,

    /// Ready for pickup.
    Ready,

    /// Handed over to the customer.
    Delivered,
}

impl WorkOrderStatus {
    /// Returns the wire token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkOrderStatus::Received => "RECEIVED",
            WorkOrderStatus::Preparing => "PREPARING",
            WorkOrderStatus::Ready => "READY",
            WorkOrderStatus::Delivered => "DELIVERED",
        }
    }
}

impl std::fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WorkOrderStatus {
    type Err = DomainError;

    /// Parses a status token by exact, case-sensitive match.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "RECEIVED" => Ok(WorkOrderStatus::Received),
            "PREPARING" => Ok(WorkOrderStatus::Preparing),
            "READY" => Ok(WorkOrderStatus::Ready),
            "DELIVERED" => Ok(WorkOrderStatus::Delivered),
            _ => Err(DomainError::invalid_argument(format!(
                "invalid work order status '{token}'"
            ))),
        }
    }
}
