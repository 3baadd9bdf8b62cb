use alloc::string::String;
use core::{fmt, panic::Location};

use crate::creator::BoxedError;

/// A failed assertion that keeps the rendered actual and expected values
/// next to its message, for tools that show a diff.
#[derive(Debug)]
pub struct AssertionFailedError {
    message: String,
    actual: Option<String>,
    expected: Option<String>,
    cause: Option<BoxedError>,
    location: Option<&'static Location<'static>>,
}

impl AssertionFailedError {
    /// An error with `message` only.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            actual: None,
            expected: None,
            cause: None,
            location: None,
        }
    }

    /// An error comparing the `actual` rendering with the `expected` one.
    pub fn comparison(
        message: impl Into<String>,
        actual: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            actual: Some(actual.into()),
            expected: Some(expected.into()),
            ..Self::new(message)
        }
    }

    /// Records what caused the failure.
    pub fn with_cause(mut self, cause: BoxedError) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Records where the failure happened.
    pub fn with_location(mut self, location: &'static Location<'static>) -> Self {
        self.location = Some(location);
        self
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the failure happened, if known.
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }

    /// The rendered actual value, if this is a comparison.
    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    /// The rendered expected value, if this is a comparison.
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }
}

impl fmt::Display for AssertionFailedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for AssertionFailedError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}
