//! Outbound capability ports consumed by the use cases.
//!
//! Implemented by infrastructure adapters outside this crate. Failures
//! surface as [`DomainError::Internal`] and pass through the use cases
//! unchanged; there is no retry or translation at this layer.

use async_trait::async_trait;
use common::WorkOrderId;

use crate::error::DomainError;
use crate::workorder::{WorkOrder, WorkOrderStatus};

/// Persistence capability for work orders.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait WorkOrderPort: Send + Sync {
    /// Persists a freshly created work order.
    ///
    /// Only ever receives fully validated aggregates.
    async fn create(&self, work_order: &WorkOrder) -> Result<(), DomainError>;

    /// Loads a work order by id.
    async fn find_by_id(&self, id: &WorkOrderId) -> Result<Option<WorkOrder>, DomainError>;

    /// Returns every work order currently in the given status.
    ///
    /// Result order is adapter-defined; the bundled store returns ascending
    /// creation time.
    async fn find_all_by_status(
        &self,
        status: WorkOrderStatus,
    ) -> Result<Vec<WorkOrder>, DomainError>;

    /// Moves the stored work order to a new status.
    ///
    /// May silently do nothing when the id is absent.
    async fn update_status(
        &self,
        id: &WorkOrderId,
        status: WorkOrderStatus,
    ) -> Result<(), DomainError>;

    /// Removes the stored work order; removing an absent id succeeds.
    async fn delete_by_id(&self, id: &WorkOrderId) -> Result<(), DomainError>;
}

/// Status-change broadcast capability.
#[async_trait]
pub trait NotificationPort: Send + Sync {
    /// Announces that a work order moved to a new status.
    ///
    /// Best-effort, and called strictly after the persistence write
    /// committed; the caller never invokes it when the write failed.
    async fn send_work_order_status_update(
        &self,
        id: &WorkOrderId,
        status: WorkOrderStatus,
    ) -> Result<(), DomainError>;
}
