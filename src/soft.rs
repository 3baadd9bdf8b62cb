//! Soft assertions: failures collected instead of raised, then reported
//! together.
//!
//! ```rust
//! use shouldbe::{
//!     config::Configuration,
//!     failures::{AssertionInfo, Failures},
//!     message::collections::should_be_empty,
//!     soft::ErrorCollector,
//! };
//!
//! let configuration = Configuration::default();
//! let failures = Failures::new(&configuration);
//! let mut softly = ErrorCollector::with_configuration(&configuration);
//!
//! let info = AssertionInfo::new("names".into(), &configuration);
//! softly.collect(failures.failure(&info, &should_be_empty(vec!["Leia"])));
//! softly.succeeded();
//!
//! let error = softly.assert_all().unwrap_err();
//! assert!(error.to_string().starts_with(
//!     "\nMultiple Failures (1 failure)\n-- failure 1 --\n\n[names] \nExpecting empty but was: [\"Leia\"]\nat "
//! ));
//! ```

use alloc::{string::String, vec::Vec};
use core::panic::Location;

use crate::{
    config::Configuration,
    creator::{AssertionErrorCreator, BoxedError, locate},
};

/// Collects the errors of failed soft assertions, in order.
#[derive(Debug)]
pub struct ErrorCollector {
    errors: Vec<BoxedError>,
    last_succeeded: bool,
    heading: Option<String>,
    creator: AssertionErrorCreator,
}

impl Default for ErrorCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorCollector {
    /// A collector reporting through the current configuration.
    pub fn new() -> Self {
        Self::with_configuration(&Configuration::current())
    }

    /// A collector reporting through `configuration`.
    pub fn with_configuration(configuration: &Configuration) -> Self {
        Self {
            errors: Vec::new(),
            last_succeeded: true,
            heading: None,
            creator: configuration.error_creator(),
        }
    }

    /// Uses `heading` for the final report instead of
    /// `Multiple Failures`.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Records a failed assertion. A built-in error without location is
    /// located at the caller.
    #[track_caller]
    pub fn collect(&mut self, error: impl Into<BoxedError>) {
        self.errors.push(locate(error.into(), Location::caller()));
        self.last_succeeded = false;
        tracing::trace!(collected = self.errors.len(), "soft assertion failed");
    }

    /// Records that the last assertion passed.
    pub fn succeeded(&mut self) {
        self.last_succeeded = true;
    }

    /// Whether the last assertion passed.
    pub fn was_success(&self) -> bool {
        self.last_succeeded
    }

    /// Collects the error of `result`, if any, and keeps its value.
    #[track_caller]
    pub fn check<T, E>(&mut self, result: Result<T, E>) -> Option<T>
    where
        E: Into<BoxedError>,
    {
        match result {
            Ok(value) => {
                self.succeeded();
                Some(value)
            }
            Err(error) => {
                self.collect(error);
                None
            }
        }
    }

    /// The errors collected so far.
    pub fn errors(&self) -> &[BoxedError] {
        &self.errors
    }

    /// Whether any assertion failed.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Gives up the collected errors.
    pub fn into_errors(self) -> Vec<BoxedError> {
        self.errors
    }

    /// Reports every collected error at once.
    ///
    /// # Errors
    ///
    /// Fails with the aggregated report when at least one assertion
    /// failed.
    #[track_caller]
    pub fn assert_all(self) -> Result<(), BoxedError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        Err(self
            .creator
            .multiple_soft_assertions_error(self.heading, self.errors))
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::ToString};

    use super::*;
    use crate::{
        creator::StructuredErrorProvider,
        error::{AssertionError, AssertionFailedError, MultipleFailuresError},
    };

    #[derive(Debug, thiserror::Error)]
    #[error("[parse] invalid digit")]
    struct ParseFailure;

    #[test]
    fn test_success_tracking() {
        let mut softly = ErrorCollector::with_configuration(&Configuration::default());
        assert!(softly.was_success());
        softly.collect(AssertionError::new("boom"));
        assert!(!softly.was_success());
        assert_eq!(softly.check(Ok::<_, ParseFailure>(3)), Some(3));
        assert!(softly.was_success());
        assert_eq!(softly.errors().len(), 1);
        assert!(softly.assert_all().is_err());
    }

    #[test]
    fn test_nothing_collected() {
        let softly = ErrorCollector::with_configuration(&Configuration::default());
        assert!(!softly.has_errors());
        assert!(softly.assert_all().is_ok());
    }

    #[test]
    fn test_report_locates_failures() {
        let mut softly = ErrorCollector::with_configuration(&Configuration::default())
            .with_heading("Person checks");
        let line = line!() + 1;
        softly.collect(AssertionError::new("boom"));
        softly.check(Err::<(), _>(ParseFailure));
        let report = softly.assert_all().unwrap_err().to_string();
        assert!(report.starts_with("\nPerson checks (2 failures)\n-- failure 1 --\nboom\nat "));
        assert!(report.contains(&format!("{}:{line}:", file!())));
        assert!(report.ends_with("\n-- failure 2 --\n\n[parse] invalid digit"));
    }

    #[test]
    fn test_structured_report() {
        let configuration = Configuration::builder()
            .error_provider(StructuredErrorProvider)
            .build()
            .unwrap();
        let mut softly = ErrorCollector::with_configuration(&configuration);
        softly.collect(AssertionError::new("boom"));
        let error = softly.assert_all().unwrap_err();
        let aggregate = error.downcast_ref::<MultipleFailuresError>().unwrap();
        assert_eq!(aggregate.failures()[0].message(), Some("boom"));
        assert!(aggregate.to_string().contains("(1 failure)"));
    }

    #[test]
    fn test_structured_errors_are_located() {
        let mut softly = ErrorCollector::with_configuration(&Configuration::default());
        let line = line!() + 1;
        softly.collect(AssertionFailedError::comparison("\nexpected: 2\n but was: 1", "1", "2"));
        let failed = softly.errors()[0]
            .downcast_ref::<AssertionFailedError>()
            .unwrap();
        assert_eq!(failed.location().unwrap().line(), line);
        assert!(failed.location().unwrap().file().ends_with("soft.rs"));
    }
}
