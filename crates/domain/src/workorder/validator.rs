//! Invariant checks for the work order aggregate.

use crate::error::DomainError;
use crate::validation::{Error, ValidationHandler};

use super::WorkOrder;

/// Runs the work order invariants against a candidate aggregate, reporting
/// through whichever [`ValidationHandler`] the caller supplies.
///
/// Identifier and status presence hold by construction; the runtime checks
/// cover the order number, the item list, and the timestamp ordering. Note
/// that a reversed timestamp pair trips both timestamp checks, so the
/// accumulating strategy reports it twice, once per field.
pub struct WorkOrderValidator<'a> {
    work_order: &'a WorkOrder,
}

impl<'a> WorkOrderValidator<'a> {
    /// Creates a validator for the given candidate.
    pub fn new(work_order: &'a WorkOrder) -> Self {
        Self { work_order }
    }

    /// Runs every invariant check in declaration order.
    pub fn validate<H: ValidationHandler>(&self, handler: &mut H) -> Result<(), DomainError> {
        self.check_order_number(handler)?;
        self.check_items(handler)?;
        self.check_created_at(handler)?;
        self.check_updated_at(handler)
    }

    fn check_order_number<H: ValidationHandler>(&self, handler: &mut H) -> Result<(), DomainError> {
        if self.work_order.order_number().trim().is_empty() {
            handler.append(Error::new("'order_number' should not be empty"))?;
        }
        Ok(())
    }

    fn check_items<H: ValidationHandler>(&self, handler: &mut H) -> Result<(), DomainError> {
        if self.work_order.items().is_empty() {
            handler.append(Error::new("'items' should not be empty"))?;
        }
        Ok(())
    }

    fn check_created_at<H: ValidationHandler>(&self, handler: &mut H) -> Result<(), DomainError> {
        if self.work_order.created_at() > self.work_order.updated_at() {
            handler.append(Error::new("'created_at' should not be after 'updated_at'"))?;
        }
        Ok(())
    }

    fn check_updated_at<H: ValidationHandler>(&self, handler: &mut H) -> Result<(), DomainError> {
        if self.work_order.updated_at() < self.work_order.created_at() {
            handler.append(Error::new("'updated_at' should not be before 'created_at'"))?;
        }
        Ok(())
    }
}
