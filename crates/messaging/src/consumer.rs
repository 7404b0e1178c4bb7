//! Inbound order intake.

use domain::{
    CreateWorkOrderCommand, CreateWorkOrderItemCommand, CreateWorkOrderUseCase, DomainError,
    WorkOrderPort,
};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::notification::Data;

/// Inbound order message as published by the ordering service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivedOrder {
    pub id: String,
    pub order_number: String,
    pub items: Vec<ReceivedOrderItem>,
}

/// Item line of [`ReceivedOrder`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivedOrderItem {
    pub name: String,
    pub quantity: u32,
}

/// Consumes accepted-order messages and opens a work order for each.
pub struct OrderConsumer<P> {
    create_work_order: CreateWorkOrderUseCase<P>,
    receiver: mpsc::Receiver<String>,
}

impl<P: WorkOrderPort> OrderConsumer<P> {
    /// Creates a consumer draining the given queue.
    pub fn new(create_work_order: CreateWorkOrderUseCase<P>, receiver: mpsc::Receiver<String>) -> Self {
        Self {
            create_work_order,
            receiver,
        }
    }

    /// Drains the queue until the sending side closes.
    ///
    /// A message that fails to decode or validate is logged and skipped; the
    /// loop keeps consuming.
    pub async fn run(mut self) {
        while let Some(payload) = self.receiver.recv().await {
            if let Err(error) = self.handle(&payload).await {
                tracing::error!(%error, "failed to process order message");
            }
        }
        tracing::info!("order queue closed, consumer stopping");
    }

    async fn handle(&self, payload: &str) -> Result<(), DomainError> {
        let envelope: Data<ReceivedOrder> = serde_json::from_str(payload)
            .map_err(|error| DomainError::internal_with("malformed order message", error))?;
        let order = envelope.data;
        tracing::info!(id = %order.id, order_number = %order.order_number, "received order message");

        self.create_work_order
            .execute(CreateWorkOrderCommand {
                id: order.id,
                order_number: order.order_number,
                items: order
                    .items
                    .into_iter()
                    .map(|item| CreateWorkOrderItemCommand {
                        name: item.name,
                        quantity: item.quantity,
                    })
                    .collect(),
            })
            .await
    }
}
