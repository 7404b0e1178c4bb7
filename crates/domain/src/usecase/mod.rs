//! Stateless command and query handlers composing the aggregate and ports.
//!
//! Each handler is a single synchronous call chain over the injected ports:
//! awaits run in order, there is no internal parallelism, and any port
//! failure propagates to the caller unchanged.

mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::{CreateWorkOrderCommand, CreateWorkOrderItemCommand, CreateWorkOrderUseCase};
pub use delete::{DeleteWorkOrderCommand, DeleteWorkOrderUseCase};
pub use get::{GetWorkOrderCommand, GetWorkOrderUseCase};
pub use list::{ListWorkOrderCommand, ListWorkOrderUseCase};
pub use update::{UpdateWorkOrderCommand, UpdateWorkOrderUseCase};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::workorder::{WorkOrder, WorkOrderStatus};

/// Read-only projection of a work order, returned by the query use cases.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkOrderOutput {
    pub id: String,
    pub order_number: String,
    pub items: Vec<WorkOrderItemOutput>,
    pub status: WorkOrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Item line inside [`WorkOrderOutput`]; submission order is preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkOrderItemOutput {
    pub name: String,
    pub quantity: u32,
}

impl From<&WorkOrder> for WorkOrderOutput {
    fn from(work_order: &WorkOrder) -> Self {
        Self {
            id: work_order.id().to_string(),
            order_number: work_order.order_number().to_string(),
            items: work_order
                .items()
                .iter()
                .map(|item| WorkOrderItemOutput {
                    name: item.name().to_string(),
                    quantity: item.quantity(),
                })
                .collect(),
            status: work_order.status(),
            created_at: work_order.created_at(),
            updated_at: work_order.updated_at(),
        }
    }
}

#[cfg(test)]
pub(crate) mod support {
    //! Recording port doubles for the use-case tests.

    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use common::WorkOrderId;

    use crate::error::DomainError;
    use crate::ports::{NotificationPort, WorkOrderPort};
    use crate::workorder::{WorkOrder, WorkOrderStatus};

    #[derive(Debug, Default)]
    struct StoreState {
        orders: Vec<WorkOrder>,
        create_calls: usize,
        find_by_id_calls: usize,
        find_all_by_status_calls: usize,
        update_status_calls: Vec<(WorkOrderId, WorkOrderStatus)>,
        delete_calls: Vec<WorkOrderId>,
        fail_on_create: bool,
        fail_on_update_status: bool,
    }

    /// Recording double for [`WorkOrderPort`].
    #[derive(Debug, Clone, Default)]
    pub(crate) struct RecordingWorkOrderPort {
        state: Arc<Mutex<StoreState>>,
    }

    impl RecordingWorkOrderPort {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        /// Seeds a stored work order before the use case runs.
        pub(crate) fn with_order(self, work_order: WorkOrder) -> Self {
            self.state.lock().unwrap().orders.push(work_order);
            self
        }

        pub(crate) fn set_fail_on_create(&self, fail: bool) {
            self.state.lock().unwrap().fail_on_create = fail;
        }

        pub(crate) fn set_fail_on_update_status(&self, fail: bool) {
            self.state.lock().unwrap().fail_on_update_status = fail;
        }

        pub(crate) fn created(&self) -> Vec<WorkOrder> {
            self.state.lock().unwrap().orders.clone()
        }

        pub(crate) fn create_calls(&self) -> usize {
            self.state.lock().unwrap().create_calls
        }

        pub(crate) fn update_status_calls(&self) -> Vec<(WorkOrderId, WorkOrderStatus)> {
            self.state.lock().unwrap().update_status_calls.clone()
        }

        pub(crate) fn delete_calls(&self) -> Vec<WorkOrderId> {
            self.state.lock().unwrap().delete_calls.clone()
        }

        /// Total number of port invocations of any kind.
        pub(crate) fn total_calls(&self) -> usize {
            let state = self.state.lock().unwrap();
            state.create_calls
                + state.find_by_id_calls
                + state.find_all_by_status_calls
                + state.update_status_calls.len()
                + state.delete_calls.len()
        }
    }

    #[async_trait]
    impl WorkOrderPort for RecordingWorkOrderPort {
        async fn create(&self, work_order: &WorkOrder) -> Result<(), DomainError> {
            let mut state = self.state.lock().unwrap();
            state.create_calls += 1;
            if state.fail_on_create {
                return Err(DomainError::internal("store unavailable"));
            }
            state.orders.push(work_order.clone());
            Ok(())
        }

        async fn find_by_id(&self, id: &WorkOrderId) -> Result<Option<WorkOrder>, DomainError> {
            let mut state = self.state.lock().unwrap();
            state.find_by_id_calls += 1;
            Ok(state.orders.iter().find(|order| order.id() == id).cloned())
        }

        async fn find_all_by_status(
            &self,
            status: WorkOrderStatus,
        ) -> Result<Vec<WorkOrder>, DomainError> {
            let mut state = self.state.lock().unwrap();
            state.find_all_by_status_calls += 1;
            Ok(state
                .orders
                .iter()
                .filter(|order| order.status() == status)
                .cloned()
                .collect())
        }

        async fn update_status(
            &self,
            id: &WorkOrderId,
            status: WorkOrderStatus,
        ) -> Result<(), DomainError> {
            let mut state = self.state.lock().unwrap();
            if state.fail_on_update_status {
                return Err(DomainError::internal("store unavailable"));
            }
            state.update_status_calls.push((id.clone(), status));
            Ok(())
        }

        async fn delete_by_id(&self, id: &WorkOrderId) -> Result<(), DomainError> {
            let mut state = self.state.lock().unwrap();
            state.delete_calls.push(id.clone());
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct NotifierState {
        sent: Vec<(WorkOrderId, WorkOrderStatus)>,
        fail_on_send: bool,
    }

    /// Recording double for [`NotificationPort`].
    #[derive(Debug, Clone, Default)]
    pub(crate) struct RecordingNotificationPort {
        state: Arc<Mutex<NotifierState>>,
    }

    impl RecordingNotificationPort {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn set_fail_on_send(&self, fail: bool) {
            self.state.lock().unwrap().fail_on_send = fail;
        }

        pub(crate) fn sent(&self) -> Vec<(WorkOrderId, WorkOrderStatus)> {
            self.state.lock().unwrap().sent.clone()
        }
    }

    #[async_trait]
    impl NotificationPort for RecordingNotificationPort {
        async fn send_work_order_status_update(
            &self,
            id: &WorkOrderId,
            status: WorkOrderStatus,
        ) -> Result<(), DomainError> {
            let mut state = self.state.lock().unwrap();
            if state.fail_on_send {
                return Err(DomainError::internal("notification queue unavailable"));
            }
            state.sent.push((id.clone(), status));
            Ok(())
        }
    }
}
