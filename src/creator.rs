//! The bridge between failed assertions and the errors they produce.
//!
//! Every failure ends up as a [`BoxedError`]. By default that is a plain
//! [`AssertionError`], or a [`MultipleFailuresError`] for soft assertions.
//! An [`ErrorProvider`] registered in the [`Configuration`] can build richer
//! errors instead, for example ones a test runner knows how to diff. A
//! provider declines a request by handing it back, in which case the
//! built-in error is produced with exactly the same message.
//!
//! ```rust
//! use shouldbe::{
//!     config::Configuration,
//!     creator::{AssertionErrorCreator, StructuredErrorProvider},
//!     error::AssertionFailedError,
//! };
//!
//! let plain = AssertionErrorCreator::new().assertion_error_for_comparison(
//!     "\nexpected: 2\n but was: 1".into(),
//!     "1".into(),
//!     "2".into(),
//! );
//! assert!(plain.downcast_ref::<AssertionFailedError>().is_none());
//!
//! let configuration = Configuration::builder()
//!     .error_provider(StructuredErrorProvider)
//!     .build()
//!     .unwrap();
//! let structured = configuration.error_creator().assertion_error_for_comparison(
//!     "\nexpected: 2\n but was: 1".into(),
//!     "1".into(),
//!     "2".into(),
//! );
//! let structured = structured.downcast_ref::<AssertionFailedError>().unwrap();
//! assert_eq!(structured.expected(), Some("2"));
//! assert_eq!(structured.to_string(), plain.to_string());
//! ```

use alloc::{boxed::Box, string::String, sync::Arc, vec::Vec};
use core::{fmt, panic::Location};

use crate::{
    config::Configuration,
    description::Description,
    error::{AssertionError, AssertionFailedError, MultipleAssertionsError, MultipleFailuresError},
    representation::RepresentationLimits,
};

/// The error type produced by failed assertions.
pub type BoxedError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// What an [`ErrorProvider`] is asked to build.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorRequest {
    /// A failure described by its message.
    Message {
        /// The rendered message.
        message: String,
    },
    /// A failure caused by another error.
    WithCause {
        /// The rendered message.
        message: String,
        /// The error that caused the failure.
        cause: BoxedError,
    },
    /// A failed comparison.
    Comparison {
        /// The rendered message.
        message: String,
        /// Rendering of the actual value.
        actual: String,
        /// Rendering of the expected value.
        expected: String,
    },
    /// Several failures collected by soft assertions.
    MultipleFailures {
        /// Heading of the report; `Multiple Failures` when absent.
        heading: Option<String>,
        /// The object the failures are about.
        object_under_test: Option<String>,
        /// The collected failures, in order.
        failures: Vec<BoxedError>,
    },
}

impl ErrorRequest {
    /// Short name of the request kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ErrorRequest::Message { .. } => "message",
            ErrorRequest::WithCause { .. } => "with_cause",
            ErrorRequest::Comparison { .. } => "comparison",
            ErrorRequest::MultipleFailures { .. } => "multiple_failures",
        }
    }

    /// The message the built error must carry.
    pub fn message(&self) -> String {
        match self {
            ErrorRequest::Message { message }
            | ErrorRequest::WithCause { message, .. }
            | ErrorRequest::Comparison { message, .. } => message.clone(),
            ErrorRequest::MultipleFailures {
                heading,
                object_under_test,
                failures,
            } => aggregate(heading.as_deref(), object_under_test.as_deref(), failures).message(),
        }
    }
}

fn aggregate(
    heading: Option<&str>,
    object_under_test: Option<&str>,
    failures: &[BoxedError],
) -> MultipleFailuresError {
    let error = MultipleFailuresError::new(heading, failures);
    match object_under_test {
        Some(object) => error.for_object(object),
        None => error,
    }
}

/// Builds enhanced assertion errors.
///
/// Registered with
/// [`ConfigurationBuilder::error_provider`](crate::config::ConfigurationBuilder::error_provider).
pub trait ErrorProvider: Send + Sync + 'static {
    /// Builds the error for `request`, or hands the request back to decline
    /// it.
    ///
    /// The built error's `Display` must be the request's
    /// [`message`](ErrorRequest::message).
    fn try_build(&self, request: ErrorRequest) -> Result<BoxedError, ErrorRequest>;
}

/// Provider building [`AssertionFailedError`]s, and
/// [`MultipleFailuresError`]s for soft assertions.
#[derive(Copy, Clone, Debug, Default)]
pub struct StructuredErrorProvider;

impl ErrorProvider for StructuredErrorProvider {
    fn try_build(&self, request: ErrorRequest) -> Result<BoxedError, ErrorRequest> {
        Ok(match request {
            ErrorRequest::Message { message } => Box::new(AssertionFailedError::new(message)),
            ErrorRequest::WithCause { message, cause } => {
                Box::new(AssertionFailedError::new(message).with_cause(cause))
            }
            ErrorRequest::Comparison {
                message,
                actual,
                expected,
            } => Box::new(AssertionFailedError::comparison(message, actual, expected)),
            ErrorRequest::MultipleFailures {
                heading,
                object_under_test,
                failures,
            } => Box::new(aggregate(
                heading.as_deref(),
                object_under_test.as_deref(),
                &failures,
            )),
        })
    }
}

/// Creates the errors of failed assertions, through the registered
/// [`ErrorProvider`] when there is one.
#[derive(Clone)]
pub struct AssertionErrorCreator {
    provider: Option<Arc<dyn ErrorProvider>>,
    max_stack_trace_elements: usize,
}

impl fmt::Debug for AssertionErrorCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssertionErrorCreator")
            .field("provider", &self.provider.is_some())
            .field("max_stack_trace_elements", &self.max_stack_trace_elements)
            .finish()
    }
}

impl Default for AssertionErrorCreator {
    fn default() -> Self {
        Self::new()
    }
}

impl AssertionErrorCreator {
    /// A creator producing the built-in errors only.
    pub fn new() -> Self {
        Self {
            provider: None,
            max_stack_trace_elements: RepresentationLimits::DEFAULT
                .max_stack_trace_elements_displayed,
        }
    }

    /// A creator asking `provider` first.
    pub fn with_provider<P: ErrorProvider>(provider: P) -> Self {
        Self {
            provider: Some(Arc::new(provider)),
            ..Self::new()
        }
    }

    /// A creator using the provider and limits of `configuration`.
    pub fn from_configuration(configuration: &Configuration) -> Self {
        Self {
            provider: configuration.error_provider().cloned(),
            max_stack_trace_elements: configuration
                .limits()
                .max_stack_trace_elements_displayed,
        }
    }

    /// Whether a provider is registered.
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// The error for a failure described by `message`.
    #[track_caller]
    pub fn assertion_error(&self, message: String) -> BoxedError {
        self.build(ErrorRequest::Message { message }, Location::caller())
    }

    /// The error for a failure caused by `cause`.
    #[track_caller]
    pub fn assertion_error_with_cause(&self, message: String, cause: BoxedError) -> BoxedError {
        self.build(ErrorRequest::WithCause { message, cause }, Location::caller())
    }

    /// The error for a failed comparison, keeping the renderings of both
    /// values.
    #[track_caller]
    pub fn assertion_error_for_comparison(
        &self,
        message: String,
        actual: String,
        expected: String,
    ) -> BoxedError {
        self.build(
            ErrorRequest::Comparison {
                message,
                actual,
                expected,
            },
            Location::caller(),
        )
    }

    /// The error reporting the failures collected by soft assertions.
    #[track_caller]
    pub fn multiple_soft_assertions_error(
        &self,
        heading: Option<String>,
        failures: Vec<BoxedError>,
    ) -> BoxedError {
        self.build(
            ErrorRequest::MultipleFailures {
                heading,
                object_under_test: None,
                failures,
            },
            Location::caller(),
        )
    }

    /// The error listing the assertion errors collected for one object,
    /// each with at most the configured number of stack frames.
    pub fn multiple_assertions_error(
        &self,
        description: Description,
        object_under_test: Option<String>,
        errors: Vec<AssertionError>,
    ) -> MultipleAssertionsError {
        let error = MultipleAssertionsError::new(description, errors)
            .with_max_stack_trace_elements(self.max_stack_trace_elements);
        match object_under_test {
            Some(object) => error.for_object(object),
            None => error,
        }
    }

    fn build(&self, request: ErrorRequest, location: &'static Location<'static>) -> BoxedError {
        let request = match &self.provider {
            Some(provider) => match provider.try_build(request) {
                Ok(error) => return locate(error, location),
                Err(request) => {
                    tracing::debug!(
                        kind = request.kind(),
                        "error provider declined, using the built-in error"
                    );
                    request
                }
            },
            None => request,
        };
        fallback(request, location)
    }
}

/// Locates a built-in error at `location` unless it already has a location.
/// Other errors are returned as they are.
pub(crate) fn locate(error: BoxedError, location: &'static Location<'static>) -> BoxedError {
    let error = match error.downcast::<AssertionError>() {
        Ok(assertion) if assertion.location().is_none() => {
            return Box::new(assertion.with_location(location));
        }
        Ok(assertion) => return assertion as BoxedError,
        Err(other) => other,
    };
    match error.downcast::<AssertionFailedError>() {
        Ok(failed) if failed.location().is_none() => Box::new(failed.with_location(location)),
        Ok(failed) => failed as BoxedError,
        Err(other) => other,
    }
}

fn fallback(request: ErrorRequest, location: &'static Location<'static>) -> BoxedError {
    let message = request.message();
    let error = AssertionError::new(message).with_location(location);
    match request {
        ErrorRequest::WithCause { cause, .. } => Box::new(error.with_cause(cause)),
        _ => Box::new(error),
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};
    use core::error::Error as _;

    use super::*;

    struct Declining;

    impl ErrorProvider for Declining {
        fn try_build(&self, request: ErrorRequest) -> Result<BoxedError, ErrorRequest> {
            Err(request)
        }
    }

    fn failures() -> Vec<BoxedError> {
        vec![
            Box::new(AssertionError::new("boom")),
            Box::new(AssertionError::new("[desc] boom2")),
        ]
    }

    const AGGREGATE: &str =
        "\nMultiple Failures (2 failures)\n-- failure 1 --\nboom\n-- failure 2 --\n\n[desc] boom2";

    #[test]
    fn test_fallback_without_provider() {
        let creator = AssertionErrorCreator::new();
        let error = creator.assertion_error("boom".to_string());
        let plain = error.downcast_ref::<AssertionError>().unwrap();
        assert_eq!(plain.message(), "boom");
        assert!(plain.location().unwrap().file().ends_with("creator.rs"));

        let aggregate = creator.multiple_soft_assertions_error(None, failures());
        assert!(aggregate.is::<AssertionError>());
        assert_eq!(aggregate.to_string(), AGGREGATE);
    }

    #[test]
    fn test_declining_provider_falls_back() {
        let creator = AssertionErrorCreator::with_provider(Declining);
        assert!(creator.has_provider());
        let error = creator.assertion_error_with_cause(
            "boom".to_string(),
            Box::new(AssertionError::new("root")),
        );
        assert!(error.is::<AssertionError>());
        assert_eq!(error.to_string(), "boom");
        assert_eq!(error.source().unwrap().to_string(), "root");
    }

    #[test]
    fn test_structured_provider() {
        let creator = AssertionErrorCreator::with_provider(StructuredErrorProvider);
        let error = creator.assertion_error_for_comparison(
            "\nexpected: \"Yoda\"\n but was: \"Luke\"".to_string(),
            "\"Luke\"".to_string(),
            "\"Yoda\"".to_string(),
        );
        let failed = error.downcast_ref::<AssertionFailedError>().unwrap();
        assert!(failed.location().unwrap().file().ends_with("creator.rs"));
        assert_eq!(failed.actual(), Some("\"Luke\""));
        assert_eq!(failed.expected(), Some("\"Yoda\""));

        let aggregate = creator.multiple_soft_assertions_error(None, failures());
        let aggregate = aggregate.downcast_ref::<MultipleFailuresError>().unwrap();
        assert_eq!(aggregate.failures().len(), 2);
        assert_eq!(aggregate.to_string(), AGGREGATE);
    }

    #[test]
    fn test_request_message_matches_built_error() {
        let request = ErrorRequest::MultipleFailures {
            heading: Some("checks".to_string()),
            object_under_test: Some("Person[name='tim']".to_string()),
            failures: failures(),
        };
        assert_eq!(request.kind(), "multiple_failures");
        let expected = request.message();
        assert!(expected.starts_with("\nFor Person[name='tim'],\nchecks (2 failures)\n"));
        let built = StructuredErrorProvider.try_build(request).unwrap();
        assert_eq!(built.to_string(), expected);
    }

    #[test]
    fn test_multiple_assertions_error_uses_limits() {
        let configuration = Configuration::builder()
            .max_stack_trace_elements_displayed(1)
            .build()
            .unwrap();
        let error = configuration.error_creator().multiple_assertions_error(
            Description::EMPTY,
            Some("abc".to_string()),
            vec![AssertionError::here("boom")],
        );
        assert!(error.to_string().contains("first 1 stack trace elements:\n\tat "));
    }

    static_assertions::assert_impl_all!(AssertionErrorCreator: Send, Sync, Clone);
    static_assertions::assert_obj_safe!(ErrorProvider);
}
