//! Queue adapters for the kitchen work-order service.
//!
//! The production system talks to a message broker; here the broker is
//! represented by bounded in-process channels carrying the same JSON
//! `{"data": ...}` envelopes, which keeps the port contracts and message
//! shapes intact end to end.

mod consumer;
mod notification;

pub use consumer::{OrderConsumer, ReceivedOrder, ReceivedOrderItem};
pub use notification::{Data, QueueNotificationAdapter, WorkOrderStatusMessage};
