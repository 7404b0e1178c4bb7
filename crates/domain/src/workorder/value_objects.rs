//! Value objects owned by the work order aggregate.

use serde::{Deserialize, Serialize};

/// A single line item on a work order.
///
/// Immutable after creation and compared by value. Items are owned
/// exclusively by their work order, which exposes them as a read-only slice.
/// No validation happens here; the aggregate checks the item list as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderItem {
    name: String,
    quantity: u32,
}

impl WorkOrderItem {
    /// Creates an item line.
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// Returns the dish name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}
