//! The errors produced by failed assertions.
//!
//! [`AssertionError`] is the plain error every failure can fall back to.
//! [`MultipleFailuresError`] aggregates several failures under one heading,
//! [`MultipleAssertionsError`] lists errors collected for one object with
//! their first stack frames, and [`AssertionFailedError`] keeps the actual
//! and expected renderings of a failed comparison next to its message.

mod assertion_failed;
mod multiple_assertions;
mod multiple_failures;

use alloc::{format, string::String, vec::Vec};
use core::{fmt, panic::Location};

pub use self::{
    assertion_failed::AssertionFailedError,
    multiple_assertions::MultipleAssertionsError,
    multiple_failures::{FailureRecord, MultipleFailuresError},
};
use crate::{creator::BoxedError, value::ErrorValue};
#[cfg(feature = "backtrace")]
use crate::stack_trace::StackTrace;

/// A failed assertion: its message, where it failed and what caused it.
///
/// # Examples
///
/// ```rust
/// use shouldbe::error::AssertionError;
///
/// let error = AssertionError::here("\nExpecting empty but was: [1]");
/// assert_eq!(error.to_string(), "\nExpecting empty but was: [1]");
/// assert!(error.location().is_some());
/// ```
#[derive(Debug)]
pub struct AssertionError {
    message: String,
    location: Option<&'static Location<'static>>,
    cause: Option<BoxedError>,
    #[cfg(feature = "backtrace")]
    stack_trace: Option<StackTrace>,
}

impl AssertionError {
    /// An error with `message` and no location.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            cause: None,
            #[cfg(feature = "backtrace")]
            stack_trace: None,
        }
    }

    /// An error with `message`, located at the caller.
    #[track_caller]
    pub fn here(message: impl Into<String>) -> Self {
        Self::new(message).with_location(Location::caller())
    }

    /// Records what caused this failure.
    pub fn with_cause(mut self, cause: impl Into<BoxedError>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Records where the assertion failed.
    pub fn with_location(mut self, location: &'static Location<'static>) -> Self {
        self.location = Some(location);
        self
    }

    /// Attaches a captured stack trace.
    #[cfg(feature = "backtrace")]
    pub fn with_stack_trace(mut self, stack_trace: StackTrace) -> Self {
        self.stack_trace = Some(stack_trace);
        self
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the assertion failed, if known.
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }

    /// What caused the failure, if anything.
    pub fn cause(&self) -> Option<&BoxedError> {
        self.cause.as_ref()
    }

    /// The captured stack trace, if any.
    #[cfg(feature = "backtrace")]
    pub fn stack_trace(&self) -> Option<&StackTrace> {
        self.stack_trace.as_ref()
    }

    /// The stack frames to show for this error, most recent first: the
    /// captured trace when there is one, otherwise the location alone.
    pub fn stack_elements(&self) -> Vec<String> {
        #[cfg(feature = "backtrace")]
        let captured = self
            .stack_trace
            .as_ref()
            .filter(|trace| !trace.is_empty())
            .map(StackTrace::to_strings);
        #[cfg(not(feature = "backtrace"))]
        let captured: Option<Vec<String>> = None;

        captured
            .or_else(|| {
                self.location
                    .map(|location| alloc::vec![format!("{location}")])
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for AssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for AssertionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}

impl From<&AssertionError> for ErrorValue {
    fn from(error: &AssertionError) -> Self {
        ErrorValue::from_parts("AssertionError", error.message.clone())
            .with_frames(error.stack_elements())
    }
}
