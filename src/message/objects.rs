//! Messages about conditions and ranges.

use super::BasicErrorMessage;
use crate::{
    comparison::ComparisonStrategy,
    value::{Value, unquoted},
};

/// The actual value does not satisfy a condition described as an
/// adjective: `to be green`.
pub fn should_be(actual: impl Into<Value>, condition: &str) -> BasicErrorMessage {
    message!("%nExpecting actual:%n  %s%nto be %s", actual, unquoted(condition))
}

/// The actual value does not satisfy a condition described as a
/// possession: `to have green lightsaber`.
pub fn should_have(actual: impl Into<Value>, condition: &str) -> BasicErrorMessage {
    message!("%nExpecting actual:%n  %s%nto have %s", actual, unquoted(condition))
}

/// Bounds of a range: inclusive bounds are shown with brackets facing the
/// range (`[1, 5]`), exclusive ones facing away (`]1, 5[`).
#[derive(Clone, Debug)]
pub struct Range {
    /// Lower bound.
    pub start: Value,
    /// Upper bound.
    pub end: Value,
    /// Whether `start` belongs to the range.
    pub inclusive_start: bool,
    /// Whether `end` belongs to the range.
    pub inclusive_end: bool,
}

impl Range {
    /// A range including both bounds.
    pub fn closed(start: impl Into<Value>, end: impl Into<Value>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            inclusive_start: true,
            inclusive_end: true,
        }
    }

    /// A range excluding both bounds.
    pub fn open(start: impl Into<Value>, end: impl Into<Value>) -> Self {
        Self {
            inclusive_start: false,
            inclusive_end: false,
            ..Self::closed(start, end)
        }
    }
}

/// The actual value is outside `range`.
///
/// # Examples
///
/// ```rust
/// use shouldbe::{comparison::ComparisonStrategy, message::objects::{Range, should_be_between}, prelude::*};
///
/// let range = Range { inclusive_end: false, ..Range::closed(0, 5) };
/// let message = should_be_between(8, range, ComparisonStrategy::Standard)
///     .create(&Description::EMPTY, &StandardRepresentation::new());
/// assert_eq!(message, "\nExpecting actual:\n  8\nto be between:\n  [0, 5[\n");
/// ```
pub fn should_be_between(
    actual: impl Into<Value>,
    range: Range,
    comparison_strategy: ComparisonStrategy,
) -> BasicErrorMessage {
    let opening = if range.inclusive_start { "[" } else { "]" };
    let closing = if range.inclusive_end { "]" } else { "[" };
    message!(
        "%nExpecting actual:%n  %s%nto be between:%n  %s%s, %s%s%n%s",
        actual,
        unquoted(opening),
        range.start,
        range.end,
        unquoted(closing),
        comparison_strategy
    )
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;
    use crate::{message::ErrorMessageFactory, representation::StandardRepresentation};

    fn render(factory: BasicErrorMessage) -> String {
        factory.create(&"Test".into(), &StandardRepresentation::new())
    }

    #[test]
    fn test_conditions() {
        assert_eq!(
            render(should_be("Yoda", "green")),
            "[Test] \nExpecting actual:\n  \"Yoda\"\nto be green"
        );
        assert_eq!(
            render(should_have("Yoda", "green lightsaber")),
            "[Test] \nExpecting actual:\n  \"Yoda\"\nto have green lightsaber"
        );
    }

    #[test]
    fn test_between_brackets() {
        assert_eq!(
            render(should_be_between(8, Range::open(6, 8), ComparisonStrategy::Standard)),
            "[Test] \nExpecting actual:\n  8\nto be between:\n  ]6, 8[\n"
        );
        assert_eq!(
            render(should_be_between(
                8,
                Range::closed(6, 7),
                ComparisonStrategy::comparator("AbsValueComparator")
            )),
            "[Test] \nExpecting actual:\n  8\nto be between:\n  [6, 7]\nwhen comparing values using AbsValueComparator"
        );
    }
}
