//! Outbound status-change notifications.

use async_trait::async_trait;
use common::WorkOrderId;
use domain::{DomainError, NotificationPort, WorkOrderStatus};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Message envelope wrapping every queue payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Data<T> {
    pub data: T,
}

/// Queue payload announcing a work-order status change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrderStatusMessage {
    pub id: String,
    pub status: String,
}

/// Publishes status-change notifications onto the in-process queue.
///
/// Stands in for the broker-backed publisher of the production deployment;
/// consumers receive the same JSON envelope either way.
#[derive(Debug, Clone)]
pub struct QueueNotificationAdapter {
    sender: mpsc::Sender<String>,
}

impl QueueNotificationAdapter {
    /// Creates an adapter publishing onto an existing queue.
    pub fn new(sender: mpsc::Sender<String>) -> Self {
        Self { sender }
    }

    /// Creates an adapter together with the receiving end of its queue.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<String>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl NotificationPort for QueueNotificationAdapter {
    async fn send_work_order_status_update(
        &self,
        id: &WorkOrderId,
        status: WorkOrderStatus,
    ) -> Result<(), DomainError> {
        let message = Data {
            data: WorkOrderStatusMessage {
                id: id.to_string(),
                status: status.to_string(),
            },
        };

        let payload = serde_json::to_string(&message).map_err(|error| {
            DomainError::internal_with("failed to encode status notification", error)
        })?;

        self.sender.send(payload).await.map_err(|error| {
            DomainError::internal_with("status notification queue closed", error)
        })?;

        tracing::info!(%id, %status, "published work order status notification");
        Ok(())
    }
}
