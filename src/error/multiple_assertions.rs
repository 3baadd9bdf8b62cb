use alloc::{string::String, vec::Vec};
use core::{fmt, fmt::Write as _};

use super::AssertionError;
use crate::{
    description::{Description, DescriptionFormatter},
    representation::RepresentationLimits,
};

/// The assertion errors collected while checking one object, each listed
/// with its first stack frames.
///
/// ```rust
/// use shouldbe::error::{AssertionError, MultipleAssertionsError};
///
/// let error = MultipleAssertionsError::new("desc".into(), vec![AssertionError::new("boom")])
///     .for_object("abc");
/// assert_eq!(
///     error.to_string(),
///     "[desc] \n1 assertion error for: abc\n\n-- error 1 --\nboom\n"
/// );
/// ```
#[derive(Debug)]
pub struct MultipleAssertionsError {
    description: Description,
    object_under_test: Option<String>,
    errors: Vec<AssertionError>,
    max_stack_trace_elements: usize,
}

impl MultipleAssertionsError {
    /// Lists `errors`, showing the default number of stack frames for each.
    pub fn new(description: Description, errors: Vec<AssertionError>) -> Self {
        Self {
            description,
            object_under_test: None,
            errors,
            max_stack_trace_elements: RepresentationLimits::DEFAULT
                .max_stack_trace_elements_displayed,
        }
    }

    /// Names the object the errors are about.
    pub fn for_object(mut self, object: impl Into<String>) -> Self {
        self.object_under_test = Some(object.into());
        self
    }

    /// Shows at most `max` stack frames per error.
    pub fn with_max_stack_trace_elements(mut self, max: usize) -> Self {
        self.max_stack_trace_elements = max;
        self
    }

    /// The collected errors, in order.
    pub fn errors(&self) -> &[AssertionError] {
        &self.errors
    }

    /// The full report.
    pub fn message(&self) -> String {
        let mut out = DescriptionFormatter.format(&self.description);
        if !out.is_empty() {
            out.push('\n');
        }

        let count = self.errors.len();
        let noun = if count == 1 { "error" } else { "errors" };
        let _ = write!(out, "{count} assertion {noun}");
        match &self.object_under_test {
            Some(object) => {
                let _ = writeln!(out, " for: {object}");
            }
            None => out.push_str(":\n"),
        }

        for (index, error) in self.errors.iter().enumerate() {
            let _ = write!(out, "\n-- error {} --\n{}", index + 1, error.message());
            let frames = error.stack_elements();
            let shown = frames.len().min(self.max_stack_trace_elements);
            if shown > 0 {
                let _ = write!(out, "\nfirst {shown} stack trace elements:");
                for frame in &frames[..shown] {
                    let _ = write!(out, "\n\tat {frame}");
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for MultipleAssertionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl core::error::Error for MultipleAssertionsError {}
