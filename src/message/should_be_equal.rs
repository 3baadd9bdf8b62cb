//! The equality failure message.
//!
//! ```text
//! [Jedi]
//! expected: "Yoda"
//!  but was: "Luke"
//! when comparing values using CaseInsensitiveComparator
//! ```
//!
//! When either value renders on several lines, both are shown indented on
//! their own lines. When both values render identically (`42` as an `i32`
//! and as an `i64`), their types are added so the difference is visible.

use alloc::{
    string::{String, ToString},
    vec,
};

use super::{AssertionErrorFactory, ErrorMessageFactory};
use crate::{
    comparison::ComparisonStrategy,
    creator::{AssertionErrorCreator, BoxedError},
    description::Description,
    formatter::{FormatError, MessageFormatter},
    representation::Representation,
    value::{Value, unquoted},
};

const EXPECTED_BUT_WAS: &str = "%nexpected: %s%n but was: %s";
const EXPECTED_BUT_WAS_MULTILINE: &str = "%nexpected: %n%s%n but was: %n%s";
const USING_COMPARATOR: &str = "%n%s";
const MULTILINE_INDENTATION: &str = "  ";

/// Failure of an equality assertion.
///
/// Besides rendering the message, this builds the error through the error
/// bridge as a comparison, so a registered provider can expose the actual
/// and expected renderings to tooling that shows diffs.
#[derive(Clone, Debug)]
pub struct ShouldBeEqual {
    actual: Value,
    expected: Value,
    comparison_strategy: ComparisonStrategy,
}

/// Creates the failure message for `actual` not being equal to `expected`.
///
/// # Examples
///
/// ```rust
/// use shouldbe::{message::should_be_equal::should_be_equal, prelude::*};
///
/// let message = should_be_equal("Luke", "Yoda").create(&Description::EMPTY, &StandardRepresentation::new());
/// assert_eq!(message, "\nexpected: \"Yoda\"\n but was: \"Luke\"");
///
/// let message = should_be_equal(42i32, 42i64).create(&Description::EMPTY, &StandardRepresentation::new());
/// assert_eq!(message, "\nexpected: 42 (i64)\n but was: 42 (i32)");
/// ```
pub fn should_be_equal(actual: impl Into<Value>, expected: impl Into<Value>) -> ShouldBeEqual {
    should_be_equal_using(actual, expected, ComparisonStrategy::Standard)
}

/// Same as [`should_be_equal`], for an assertion using a custom comparison
/// strategy.
pub fn should_be_equal_using(
    actual: impl Into<Value>,
    expected: impl Into<Value>,
    comparison_strategy: ComparisonStrategy,
) -> ShouldBeEqual {
    ShouldBeEqual {
        actual: actual.into(),
        expected: expected.into(),
        comparison_strategy,
    }
}

impl ShouldBeEqual {
    /// The actual value.
    pub fn actual(&self) -> &Value {
        &self.actual
    }

    /// The expected value.
    pub fn expected(&self) -> &Value {
        &self.expected
    }

    /// The comparison strategy of the assertion.
    pub fn comparison_strategy(&self) -> &ComparisonStrategy {
        &self.comparison_strategy
    }
}

impl ErrorMessageFactory for ShouldBeEqual {
    fn try_create(
        &self,
        description: &Description,
        representation: &dyn Representation,
    ) -> Result<String, FormatError> {
        let mut actual = representation.to_string_of(&self.actual);
        let mut expected = representation.to_string_of(&self.expected);
        if actual == expected {
            actual = representation.unambiguous_to_string_of(&self.actual);
            expected = representation.unambiguous_to_string_of(&self.expected);
        }

        let mut template = String::new();
        if actual.contains('\n') || expected.contains('\n') {
            template.push_str(EXPECTED_BUT_WAS_MULTILINE);
            actual = indent(&actual);
            expected = indent(&expected);
        } else {
            template.push_str(EXPECTED_BUT_WAS);
        }

        let mut args = vec![unquoted(expected), unquoted(actual)];
        if !self.comparison_strategy.is_standard() {
            template.push_str(USING_COMPARATOR);
            args.push(Value::Strategy(self.comparison_strategy.clone()));
        }
        MessageFormatter.format(description, representation, &template, &args)
    }
}

impl AssertionErrorFactory for ShouldBeEqual {
    #[track_caller]
    fn new_assertion_error(
        &self,
        description: &Description,
        representation: &dyn Representation,
        creator: &AssertionErrorCreator,
    ) -> BoxedError {
        let message = self.create(description, representation);
        creator.assertion_error_for_comparison(
            message,
            representation.to_string_of(&self.actual),
            representation.to_string_of(&self.expected),
        )
    }
}

fn indent(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + MULTILINE_INDENTATION.len());
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(MULTILINE_INDENTATION);
        out.push_str(line);
    }
    out
}

impl core::fmt::Display for ShouldBeEqual {
    /// The message without description, rendered with the current
    /// configuration.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let configuration = crate::config::Configuration::current();
        match self.try_create(&Description::EMPTY, configuration.representation()) {
            Ok(message) => f.write_str(&message),
            Err(error) => f.write_str(&error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representation::StandardRepresentation;

    fn message(factory: &ShouldBeEqual, description: &str) -> String {
        factory.create(
            &Description::new(String::from(description)),
            &StandardRepresentation::new(),
        )
    }

    #[test]
    fn test_comparator_is_mentioned() {
        let factory = should_be_equal_using(
            "Luke",
            "Yoda",
            ComparisonStrategy::comparator("CaseInsensitiveStringComparator"),
        );
        assert_eq!(
            message(&factory, "Jedi"),
            "[Jedi] \nexpected: \"Yoda\"\n but was: \"Luke\"\nwhen comparing values using CaseInsensitiveStringComparator"
        );
    }

    #[test]
    fn test_multiline_values_are_indented() {
        let factory = should_be_equal(
            crate::value::unquoted("<xml>\n  <value>1</value>\n</xml>"),
            "foo",
        );
        assert_eq!(
            message(&factory, ""),
            "\nexpected: \n  \"foo\"\n but was: \n  <xml>\n    <value>1</value>\n  </xml>"
        );
    }

    #[test]
    fn test_same_rendering_adds_types() {
        let factory = should_be_equal(42i32, 42i64);
        assert_eq!(
            message(&factory, ""),
            "\nexpected: 42 (i64)\n but was: 42 (i32)"
        );
        let factory = should_be_equal(1u8, 1u16);
        assert_eq!(
            message(&factory, ""),
            "\nexpected: 1 (u16)\n but was: 1 (u8)"
        );
    }

    #[test]
    fn test_distinct_renderings_keep_no_types() {
        let factory = should_be_equal(1.0f64, 1.0f32);
        assert_eq!(message(&factory, ""), "\nexpected: 1.0f\n but was: 1.0");
    }
}
