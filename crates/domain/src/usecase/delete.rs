//! Delete work order use case.

use common::WorkOrderId;

use crate::error::DomainError;
use crate::ports::WorkOrderPort;

/// Command to remove a work order from storage.
#[derive(Debug, Clone)]
pub struct DeleteWorkOrderCommand {
    pub id: String,
}

/// Removes a work order by id.
///
/// No existence check happens first; deleting an absent id is the
/// persistence adapter's concern, not this layer's.
pub struct DeleteWorkOrderUseCase<P> {
    work_orders: P,
}

impl<P: WorkOrderPort> DeleteWorkOrderUseCase<P> {
    /// Creates the use case over the given persistence port.
    pub fn new(work_orders: P) -> Self {
        Self { work_orders }
    }

    /// Deletes the work order with the given id.
    #[tracing::instrument(skip(self, command), fields(id = %command.id))]
    pub async fn execute(&self, command: DeleteWorkOrderCommand) -> Result<(), DomainError> {
        let id = WorkOrderId::new(command.id);

        self.work_orders.delete_by_id(&id).await?;
        metrics::counter!("work_orders_deleted").increment(1);

        tracing::info!("work order deleted");
        Ok(())
    }
}
