//! Update work order status use case.

use common::WorkOrderId;

use crate::error::DomainError;
use crate::ports::{NotificationPort, WorkOrderPort};
use crate::workorder::WorkOrderStatus;

/// Command to move a work order to a new status.
#[derive(Debug, Clone)]
pub struct UpdateWorkOrderCommand {
    pub id: String,
    pub status: String,
}

/// Persists a status change, then broadcasts it.
pub struct UpdateWorkOrderUseCase<P, N> {
    work_orders: P,
    notifier: N,
}

impl<P: WorkOrderPort, N: NotificationPort> UpdateWorkOrderUseCase<P, N> {
    /// Creates the use case over the persistence and notification ports.
    pub fn new(work_orders: P, notifier: N) -> Self {
        Self {
            work_orders,
            notifier,
        }
    }

    /// Updates the stored status and notifies downstream consumers.
    ///
    /// The persistence write happens-before the notification: when the write
    /// fails, the notification is never attempted. A notification failure
    /// after a successful write propagates with no compensating action.
    #[tracing::instrument(skip(self, command), fields(id = %command.id, status = %command.status))]
    pub async fn execute(&self, command: UpdateWorkOrderCommand) -> Result<(), DomainError> {
        let id = WorkOrderId::new(command.id);
        let status: WorkOrderStatus = command.status.parse()?;

        self.work_orders.update_status(&id, status).await?;
        self.notifier.send_work_order_status_update(&id, status).await?;

        metrics::counter!("work_orders_status_updated").increment(1);
        tracing::info!("work order status updated");
        Ok(())
    }
}
