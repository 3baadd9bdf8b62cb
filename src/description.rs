//! Assertion descriptions and their `[desc] ` message prefix.

use alloc::{borrow::Cow, format, string::String};
use core::fmt;

/// The optional description of an assertion, as given by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Description(Option<Cow<'static, str>>);

impl Description {
    /// An assertion without description.
    pub const EMPTY: Self = Self(None);

    /// Creates a description from its text.
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self(Some(text.into()))
    }

    /// The description text, if any.
    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Whether there is no description, or it is empty.
    pub fn is_empty(&self) -> bool {
        self.value().is_none_or(str::is_empty)
    }
}

impl From<&'static str> for Description {
    fn from(text: &'static str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Description {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value().unwrap_or_default())
    }
}

/// Formats a [`Description`] as the prefix of an error message.
///
/// # Examples
///
/// ```rust
/// use shouldbe::description::{Description, DescriptionFormatter};
///
/// assert_eq!(DescriptionFormatter.format(&Description::EMPTY), "");
/// assert_eq!(DescriptionFormatter.format(&"Jedi".into()), "[Jedi] ");
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct DescriptionFormatter;

impl DescriptionFormatter {
    /// Returns `""` for an empty description, otherwise `"[desc] "`.
    pub fn format(&self, description: &Description) -> String {
        match description.value() {
            Some(text) if !text.is_empty() => format!("[{text}] "),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_formats_as_nothing() {
        assert_eq!(DescriptionFormatter.format(&Description::new("")), "");
        assert!(Description::new("").is_empty());
    }

    #[test]
    fn test_description_prefix() {
        assert_eq!(
            DescriptionFormatter.format(&Description::from(String::from("check"))),
            "[check] "
        );
    }
}
