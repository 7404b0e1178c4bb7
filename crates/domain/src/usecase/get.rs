//! Get work order use case.

use common::WorkOrderId;

use crate::error::{AggregateKind, DomainError};
use crate::ports::WorkOrderPort;

use super::WorkOrderOutput;

/// Query for a single work order by id.
#[derive(Debug, Clone)]
pub struct GetWorkOrderCommand {
    pub id: String,
}

/// Loads one work order and maps it to its read-only output.
pub struct GetWorkOrderUseCase<P> {
    work_orders: P,
}

impl<P: WorkOrderPort> GetWorkOrderUseCase<P> {
    /// Creates the use case over the given persistence port.
    pub fn new(work_orders: P) -> Self {
        Self { work_orders }
    }

    /// Returns the work order with the given id, or a not-found failure.
    #[tracing::instrument(skip(self, command), fields(id = %command.id))]
    pub async fn execute(
        &self,
        command: GetWorkOrderCommand,
    ) -> Result<WorkOrderOutput, DomainError> {
        let id = WorkOrderId::new(command.id);

        let work_order = self
            .work_orders
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(AggregateKind::WorkOrder, id))?;

        Ok(WorkOrderOutput::from(&work_order))
    }
}
