use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
use core::{fmt, fmt::Write as _};

use super::{AssertionError, AssertionFailedError};
use crate::creator::BoxedError;

const DEFAULT_HEADING: &str = "Multiple Failures";
const NO_MESSAGE: &str = "<no message>";

/// One failure of an aggregate: its message and where it happened.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FailureRecord {
    message: Option<String>,
    location: Option<String>,
}

impl FailureRecord {
    /// A failure with `message` and no location.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            location: None,
        }
    }

    /// A failure whose message is missing.
    pub fn without_message() -> Self {
        Self::default()
    }

    /// Records where the failure happened.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Where the failure happened, if known.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn write_block(&self, out: &mut String, index: usize) {
        let message = match self.message.as_deref() {
            Some(message) if !message.trim().is_empty() => message,
            _ => NO_MESSAGE,
        };
        let separator = if message.starts_with('\n') {
            ""
        } else if message.starts_with('[') {
            "\n\n"
        } else {
            "\n"
        };
        let _ = write!(out, "-- failure {index} --{separator}{message}");
        if let Some(location) = &self.location {
            let _ = write!(out, "\nat {location}");
        }
    }
}

impl From<&str> for FailureRecord {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for FailureRecord {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&AssertionError> for FailureRecord {
    fn from(error: &AssertionError) -> Self {
        Self {
            message: Some(String::from(error.message())),
            location: error.location().map(|location| format!("{location}")),
        }
    }
}

impl From<AssertionError> for FailureRecord {
    fn from(error: AssertionError) -> Self {
        Self::from(&error)
    }
}

impl From<&BoxedError> for FailureRecord {
    fn from(error: &BoxedError) -> Self {
        if let Some(assertion_error) = error.downcast_ref::<AssertionError>() {
            return Self::from(assertion_error);
        }
        let record = Self::new(error.to_string());
        match error
            .downcast_ref::<AssertionFailedError>()
            .and_then(AssertionFailedError::location)
        {
            Some(location) => record.with_location(format!("{location}")),
            None => record,
        }
    }
}

/// Several failures reported together under one heading.
///
/// # Examples
///
/// ```rust
/// use shouldbe::error::MultipleFailuresError;
///
/// let error = MultipleFailuresError::new(None, ["boom", "[desc] boom2"]);
/// assert_eq!(
///     error.to_string(),
///     "\nMultiple Failures (2 failures)\n-- failure 1 --\nboom\n-- failure 2 --\n\n[desc] boom2"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultipleFailuresError {
    heading: String,
    object_under_test: Option<String>,
    failures: Vec<FailureRecord>,
}

impl MultipleFailuresError {
    /// Aggregates `failures` under `heading`; a missing or blank heading
    /// becomes `Multiple Failures`.
    pub fn new<I>(heading: Option<&str>, failures: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FailureRecord>,
    {
        let heading = heading
            .map(str::trim)
            .filter(|heading| !heading.is_empty())
            .unwrap_or(DEFAULT_HEADING);
        Self {
            heading: String::from(heading),
            object_under_test: None,
            failures: failures.into_iter().map(Into::into).collect(),
        }
    }

    /// Names the object the failures are about, shown as `For {object},`.
    pub fn for_object(mut self, object: impl Into<String>) -> Self {
        self.object_under_test = Some(object.into());
        self
    }

    /// The resolved heading.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// The object the failures are about, if named.
    pub fn object_under_test(&self) -> Option<&str> {
        self.object_under_test.as_deref()
    }

    /// The aggregated failures, in order.
    pub fn failures(&self) -> &[FailureRecord] {
        &self.failures
    }

    /// The full report. Without failures it is the heading alone.
    pub fn message(&self) -> String {
        if self.failures.is_empty() {
            return self.heading.clone();
        }

        let count = self.failures.len();
        let noun = if count == 1 { "failure" } else { "failures" };
        let mut out = String::from("\n");
        if let Some(object) = &self.object_under_test {
            let _ = writeln!(out, "For {object},");
        }
        let _ = writeln!(out, "{} ({count} {noun})", self.heading);
        for (index, failure) in self.failures.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            failure.write_block(&mut out, index + 1);
        }
        out
    }
}

impl fmt::Display for MultipleFailuresError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl core::error::Error for MultipleFailuresError {}

#[cfg(test)]
mod tests {
    use alloc::{boxed::Box, vec};

    use super::*;

    #[test]
    fn test_single_failure_is_wrapped() {
        let error = MultipleFailuresError::new(Some("  desc  "), ["boom"]);
        assert_eq!(error.to_string(), "\ndesc (1 failure)\n-- failure 1 --\nboom");
    }

    #[test]
    fn test_no_failures_is_the_heading() {
        assert_eq!(
            MultipleFailuresError::new(Some("checks"), Vec::<FailureRecord>::new()).to_string(),
            "checks"
        );
        assert_eq!(
            MultipleFailuresError::new(Some(" "), Vec::<FailureRecord>::new()).to_string(),
            "Multiple Failures"
        );
    }

    #[test]
    fn test_object_and_locations() {
        let error = MultipleFailuresError::new(
            Some("desc"),
            [FailureRecord::new("\nboom").with_location("tests/person.rs:12:5")],
        )
        .for_object("Person[name='tim']");
        assert_eq!(
            error.to_string(),
            "\nFor Person[name='tim'],\ndesc (1 failure)\n-- failure 1 --\nboom\nat tests/person.rs:12:5"
        );
    }

    #[test]
    fn test_missing_messages() {
        let error = MultipleFailuresError::new(
            None,
            vec![FailureRecord::without_message(), FailureRecord::new("  ")],
        );
        assert_eq!(
            error.to_string(),
            "\nMultiple Failures (2 failures)\n-- failure 1 --\n<no message>\n-- failure 2 --\n<no message>"
        );
    }

    #[test]
    fn test_records_from_boxed_errors() {
        let located: BoxedError = Box::new(AssertionError::here("boom"));
        let record = FailureRecord::from(&located);
        assert_eq!(record.message(), Some("boom"));
        assert!(record.location().unwrap().contains("multiple_failures.rs"));

        let other: BoxedError = Box::new(core::fmt::Error);
        assert_eq!(
            FailureRecord::from(&other).message(),
            Some("an error occurred when formatting an argument")
        );
        assert_eq!(FailureRecord::from(&other).location(), None);
    }

    #[test]
    fn test_records_keep_structured_locations() {
        let structured: BoxedError = Box::new(
            AssertionFailedError::comparison("\nexpected: 2\n but was: 1", "1", "2")
                .with_location(core::panic::Location::caller()),
        );
        let record = FailureRecord::from(&structured);
        assert_eq!(record.message(), Some("\nexpected: 2\n but was: 1"));
        assert!(record.location().unwrap().contains("multiple_failures.rs"));
    }
}
