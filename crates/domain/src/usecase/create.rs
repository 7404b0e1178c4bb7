//! Create work order use case.

use common::WorkOrderId;

use crate::error::DomainError;
use crate::ports::WorkOrderPort;
use crate::workorder::{WorkOrder, WorkOrderItem};

/// Command to open a work order for an accepted upstream order.
#[derive(Debug, Clone)]
pub struct CreateWorkOrderCommand {
    pub id: String,
    pub order_number: String,
    pub items: Vec<CreateWorkOrderItemCommand>,
}

/// Item line of [`CreateWorkOrderCommand`].
#[derive(Debug, Clone)]
pub struct CreateWorkOrderItemCommand {
    pub name: String,
    pub quantity: u32,
}

/// Opens a work order, validating the aggregate before any port call.
pub struct CreateWorkOrderUseCase<P> {
    work_orders: P,
}

impl<P: WorkOrderPort> CreateWorkOrderUseCase<P> {
    /// Creates the use case over the given persistence port.
    pub fn new(work_orders: P) -> Self {
        Self { work_orders }
    }

    /// Validates and persists a new work order.
    ///
    /// A validation failure carries every violated invariant at once and is
    /// returned before the persistence port is touched, so the port only ever
    /// receives valid aggregates.
    #[tracing::instrument(skip(self, command), fields(id = %command.id, order_number = %command.order_number))]
    pub async fn execute(&self, command: CreateWorkOrderCommand) -> Result<(), DomainError> {
        let items = command
            .items
            .into_iter()
            .map(|item| WorkOrderItem::new(item.name, item.quantity))
            .collect();

        let work_order =
            WorkOrder::create(WorkOrderId::new(command.id), command.order_number, items)?;

        self.work_orders.create(&work_order).await?;
        metrics::counter!("work_orders_created").increment(1);

        tracing::info!("work order created");
        Ok(())
    }
}
