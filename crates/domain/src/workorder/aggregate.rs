//! Work order aggregate root.

use chrono::{DateTime, Utc};
use common::WorkOrderId;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::validation::{Notification, ValidationHandler};

use super::{WorkOrderItem, WorkOrderStatus, WorkOrderValidator};

/// Work order aggregate root.
///
/// Tracks a kitchen order from receipt through delivery. Every construction
/// path runs the full invariant check before the instance becomes observable:
/// a `WorkOrder` that exists is valid, and no partially-built instance ever
/// reaches a port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    id: WorkOrderId,
    order_number: String,
    status: WorkOrderStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    items: Vec<WorkOrderItem>,
}

impl WorkOrder {
    /// Creates a fresh work order for an accepted upstream order.
    ///
    /// The order starts in [`WorkOrderStatus::Received`] with creation and
    /// update timestamps set to the same instant.
    pub fn create(
        id: WorkOrderId,
        order_number: impl Into<String>,
        items: Vec<WorkOrderItem>,
    ) -> Result<Self, DomainError> {
        let now = Utc::now();
        Self::with(id, order_number, WorkOrderStatus::Received, now, now, items)
    }

    /// Reconstitutes a work order from stored state.
    ///
    /// Runs the same invariant check as [`WorkOrder::create`]; loading a
    /// corrupt record fails instead of producing an invalid aggregate.
    pub fn with(
        id: WorkOrderId,
        order_number: impl Into<String>,
        status: WorkOrderStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        items: Vec<WorkOrderItem>,
    ) -> Result<Self, DomainError> {
        let work_order = Self {
            id,
            order_number: order_number.into(),
            status,
            created_at,
            updated_at,
            items,
        };

        let mut notification = Notification::new();
        work_order.validate(&mut notification)?;
        if notification.has_errors() {
            return Err(DomainError::validation(
                "failed to create an aggregate work order",
                notification.into_errors(),
            ));
        }

        Ok(work_order)
    }

    /// Runs the invariant checks, reporting through the supplied handler.
    pub fn validate<H: ValidationHandler>(&self, handler: &mut H) -> Result<(), DomainError> {
        WorkOrderValidator::new(self).validate(handler)
    }

    /// Sets a new status and refreshes the update timestamp.
    ///
    /// The only mutation an existing work order supports; every other field
    /// is fixed for the life of the instance.
    pub fn update_status(&mut self, new_status: WorkOrderStatus) {
        self.status = new_status;
        self.updated_at = Utc::now();
    }
}

// Query methods
impl WorkOrder {
    /// Returns the work order id.
    pub fn id(&self) -> &WorkOrderId {
        &self.id
    }

    /// Returns the upstream order number.
    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    /// Returns the current preparation status.
    pub fn status(&self) -> WorkOrderStatus {
        self.status
    }

    /// Returns the creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-update timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the item lines in submission order, read-only.
    pub fn items(&self) -> &[WorkOrderItem] {
        &self.items
    }
}

#[cfg(test)]
impl WorkOrder {
    /// Builds an instance without running the invariant check, so validator
    /// tests can exercise violating candidates.
    pub(crate) fn unchecked(
        id: WorkOrderId,
        order_number: impl Into<String>,
        status: WorkOrderStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        items: Vec<WorkOrderItem>,
    ) -> Self {
        Self {
            id,
            order_number: order_number.into(),
            status,
            created_at,
            updated_at,
            items,
        }
    }
}
