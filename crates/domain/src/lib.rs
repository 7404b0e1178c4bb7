//! Domain layer for the kitchen work-order service.
//!
//! This crate provides the core work-order model and its orchestration:
//! - Validation primitives with accumulate-all and fail-fast strategies
//! - The `WorkOrder` aggregate, whose invariants hold on every construction path
//! - The persistence and notification ports consumed (not implemented) here
//! - The five stateless command/query use cases composing aggregate and ports

pub mod error;
pub mod ports;
pub mod usecase;
pub mod validation;
pub mod workorder;

pub use error::{AggregateKind, DomainError};
pub use ports::{NotificationPort, WorkOrderPort};
pub use usecase::{
    CreateWorkOrderCommand, CreateWorkOrderItemCommand, CreateWorkOrderUseCase,
    DeleteWorkOrderCommand, DeleteWorkOrderUseCase, GetWorkOrderCommand, GetWorkOrderUseCase,
    ListWorkOrderCommand, ListWorkOrderUseCase, UpdateWorkOrderCommand, UpdateWorkOrderUseCase,
    WorkOrderItemOutput, WorkOrderOutput,
};
pub use validation::{Error, FailFast, Notification, ValidationHandler};
pub use workorder::{WorkOrder, WorkOrderItem, WorkOrderStatus, WorkOrderValidator};
