//! List work orders use case.

use crate::error::DomainError;
use crate::ports::WorkOrderPort;
use crate::workorder::WorkOrderStatus;

use super::WorkOrderOutput;

/// Query for every work order in a given status.
#[derive(Debug, Clone)]
pub struct ListWorkOrderCommand {
    /// Status token, parsed case-sensitively before any port call.
    pub status: String,
}

/// Lists work orders by status, preserving the port's return order.
pub struct ListWorkOrderUseCase<P> {
    work_orders: P,
}

impl<P: WorkOrderPort> ListWorkOrderUseCase<P> {
    /// Creates the use case over the given persistence port.
    pub fn new(work_orders: P) -> Self {
        Self { work_orders }
    }

    /// Returns the work orders in the requested status.
    ///
    /// An unknown status token fails before the persistence port is called.
    #[tracing::instrument(skip(self, command), fields(status = %command.status))]
    pub async fn execute(
        &self,
        command: ListWorkOrderCommand,
    ) -> Result<Vec<WorkOrderOutput>, DomainError> {
        let status: WorkOrderStatus = command.status.parse()?;

        let work_orders = self.work_orders.find_all_by_status(status).await?;
        tracing::info!(count = work_orders.len(), "listed work orders");

        Ok(work_orders.iter().map(WorkOrderOutput::from).collect())
    }
}
