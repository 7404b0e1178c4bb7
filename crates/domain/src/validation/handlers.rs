//! Concrete validation strategies.

use crate::error::DomainError;

use super::{Error, ValidationHandler};

/// Accumulate-all strategy: records every violation and keeps going.
///
/// Callers check [`ValidationHandler::has_errors`] after running their
/// validations and decide how to report the collected set.
#[derive(Debug, Clone, Default)]
pub struct Notification {
    errors: Vec<Error>,
}

impl Notification {
    /// Creates an empty notification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the notification, returning the violations in report order.
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: Error) -> Result<(), DomainError> {
        self.errors.push(error);
        Ok(())
    }

    fn append_all(&mut self, errors: Vec<Error>) -> Result<(), DomainError> {
        self.errors.extend(errors);
        Ok(())
    }

    fn validate<T>(
        &mut self,
        validation: impl FnOnce() -> Result<T, DomainError>,
    ) -> Result<Option<T>, DomainError> {
        match validation() {
            Ok(value) => Ok(Some(value)),
            Err(failure) => {
                self.errors.push(Error::new(failure.to_string()));
                Ok(None)
            }
        }
    }

    fn errors(&self) -> &[Error] {
        &self.errors
    }
}

/// Fail-fast strategy: surfaces the first violation and never holds state.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailFast;

impl FailFast {
    /// Creates a fail-fast handler.
    pub fn new() -> Self {
        Self
    }
}

impl ValidationHandler for FailFast {
    fn append(&mut self, error: Error) -> Result<(), DomainError> {
        Err(DomainError::from_violation(error))
    }

    fn append_all(&mut self, errors: Vec<Error>) -> Result<(), DomainError> {
        Err(DomainError::validation("validation failed", errors))
    }

    fn validate<T>(
        &mut self,
        validation: impl FnOnce() -> Result<T, DomainError>,
    ) -> Result<Option<T>, DomainError> {
        match validation() {
            Ok(value) => Ok(Some(value)),
            Err(failure) => Err(DomainError::from_violation(Error::new(failure.to_string()))),
        }
    }

    fn errors(&self) -> &[Error] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_accumulates_every_violation() {
        let mut handler = Notification::new();
        handler.append(Error::new("first")).unwrap();
        handler.append(Error::new("second")).unwrap();

        assert!(handler.has_errors());
        assert_eq!(handler.errors().len(), 2);
        assert_eq!(handler.errors()[0].message(), "first");
        assert_eq!(handler.errors()[1].message(), "second");
    }

    #[test]
    fn notification_merges_another_error_set() {
        let mut handler = Notification::new();
        handler.append(Error::new("first")).unwrap();
        handler
            .append_all(vec![Error::new("second"), Error::new("third")])
            .unwrap();

        assert_eq!(handler.errors().len(), 3);
    }

    #[test]
    fn notification_records_failed_validations_and_continues() {
        let mut handler = Notification::new();

        let missing: Option<u32> = handler
            .validate(|| Err(DomainError::invalid_argument("boom")))
            .unwrap();
        let present = handler.validate(|| Ok(42)).unwrap();

        assert_eq!(missing, None);
        assert_eq!(present, Some(42));
        assert_eq!(handler.errors().len(), 1);
        assert_eq!(handler.errors()[0].message(), "boom");
    }

    #[test]
    fn fail_fast_surfaces_the_first_violation() {
        let mut handler = FailFast::new();

        let failure = handler.append(Error::new("first")).unwrap_err();
        match failure {
            DomainError::Validation { message, errors } => {
                assert_eq!(message, "first");
                assert_eq!(errors.len(), 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn fail_fast_surfaces_a_merged_error_set() {
        let mut handler = FailFast::new();

        let failure = handler
            .append_all(vec![Error::new("first"), Error::new("second")])
            .unwrap_err();
        match failure {
            DomainError::Validation { errors, .. } => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn fail_fast_surfaces_failed_validations() {
        let mut handler = FailFast::new();

        let failure = handler
            .validate(|| -> Result<u32, DomainError> {
                Err(DomainError::invalid_argument("boom"))
            })
            .unwrap_err();
        match failure {
            DomainError::Validation { message, errors } => {
                assert_eq!(message, "boom");
                assert_eq!(errors.len(), 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn fail_fast_never_holds_errors() {
        let handler = FailFast::new();
        assert!(handler.errors().is_empty());
        assert!(!handler.has_errors());
    }
}
