//! Messages about text that should contain other text.

use alloc::{format, string::String, vec};
use core::fmt::Write as _;

use super::BasicErrorMessage;
use crate::{
    comparison::ComparisonStrategy,
    value::{ErrorValue, Value, unquoted},
};

const EXPECTING_ACTUAL: &str = "%nExpecting actual:%n  %s%n";
const THROWABLE_THAT_FAILED: &str = "%nThrowable that failed the check:%n%n%s";

/// The actual text does not contain `sequence`.
///
/// # Examples
///
/// ```rust
/// use shouldbe::{comparison::ComparisonStrategy, message::char_sequence::should_contain, prelude::*};
///
/// let message = should_contain("Yoda", "Luke", ComparisonStrategy::Standard)
///     .create(&"Test".into(), &StandardRepresentation::new());
/// assert_eq!(message, "[Test] \nExpecting actual:\n  \"Yoda\"\nto contain:\n  \"Luke\" ");
/// ```
pub fn should_contain(
    actual: impl Into<Value>,
    sequence: impl Into<Value>,
    comparison_strategy: ComparisonStrategy,
) -> BasicErrorMessage {
    BasicErrorMessage::new(
        format!("{EXPECTING_ACTUAL}to contain:%n  %s %s"),
        vec![actual.into(), sequence.into(), comparison_strategy.into()],
    )
}

/// The actual text does not contain some of `values`.
pub fn should_contain_several(
    actual: impl Into<Value>,
    values: impl Into<Value>,
    not_found: impl Into<Value>,
    comparison_strategy: ComparisonStrategy,
) -> BasicErrorMessage {
    BasicErrorMessage::new(
        format!("{EXPECTING_ACTUAL}to contain:%n  %s%nbut could not find:%n  %s%n %s"),
        vec![
            actual.into(),
            values.into(),
            not_found.into(),
            comparison_strategy.into(),
        ],
    )
}

/// The message of `error` does not contain `sequence`. The full error,
/// with its stack frames, follows the message.
pub fn should_contain_in_error_message(error: &ErrorValue, sequence: impl Into<Value>) -> BasicErrorMessage {
    BasicErrorMessage::new(
        format!(
            "%nExpecting throwable message:%n  %s%nto contain:%n  %s%nbut did not.%n{THROWABLE_THAT_FAILED}"
        ),
        vec![
            error.message().into(),
            sequence.into(),
            unquoted(stack_trace_of(error)),
        ],
    )
}

/// The message of `error` does not contain some of `values`.
pub fn should_contain_several_in_error_message(
    error: &ErrorValue,
    values: impl Into<Value>,
    not_found: impl Into<Value>,
) -> BasicErrorMessage {
    BasicErrorMessage::new(
        format!(
            "%nExpecting throwable message:%n  %s%nto contain:%n  %s%nbut could not find:%n  %s%n{THROWABLE_THAT_FAILED}"
        ),
        vec![
            error.message().into(),
            values.into(),
            not_found.into(),
            unquoted(stack_trace_of(error)),
        ],
    )
}

/// The actual text does not contain `sequence`, case aside.
pub fn should_contain_ignoring_case(
    actual: impl Into<Value>,
    sequence: impl Into<Value>,
) -> BasicErrorMessage {
    BasicErrorMessage::new(
        format!("{EXPECTING_ACTUAL}to contain:%n  %s%n (ignoring case)"),
        vec![actual.into(), sequence.into()],
    )
}

/// The actual text does not contain `sequence`, whitespace aside.
pub fn should_contain_ignoring_whitespaces(
    actual: impl Into<Value>,
    sequence: impl Into<Value>,
    comparison_strategy: ComparisonStrategy,
) -> BasicErrorMessage {
    BasicErrorMessage::new(
        format!("{EXPECTING_ACTUAL}to contain (ignoring whitespaces):%n  %s %s"),
        vec![actual.into(), sequence.into(), comparison_strategy.into()],
    )
}

/// The actual text does not contain some of `values`, whitespace aside.
pub fn should_contain_several_ignoring_whitespaces(
    actual: impl Into<Value>,
    values: impl Into<Value>,
    not_found: impl Into<Value>,
    comparison_strategy: ComparisonStrategy,
) -> BasicErrorMessage {
    BasicErrorMessage::new(
        format!(
            "{EXPECTING_ACTUAL}to contain (ignoring whitespaces):%n  %s%nbut could not find:%n  %s%n %s"
        ),
        vec![
            actual.into(),
            values.into(),
            not_found.into(),
            comparison_strategy.into(),
        ],
    )
}

/// The actual text does not contain some of `expected_values`, line breaks
/// aside.
///
/// With a single value not found, only that value is shown.
pub fn should_contain_ignoring_new_lines<V>(
    actual: impl Into<Value>,
    expected_values: impl Into<Value>,
    not_found: impl IntoIterator<Item = V>,
    comparison_strategy: ComparisonStrategy,
) -> BasicErrorMessage
where
    V: Into<Value>,
{
    let start = format!("{EXPECTING_ACTUAL}to contain (ignoring new lines):%n");
    let mut not_found: alloc::vec::Vec<Value> = not_found.into_iter().map(Into::into).collect();

    if not_found.len() == 1
        && let Some(missing) = not_found.pop()
    {
        return BasicErrorMessage::new(
            format!("{start}  %s %s"),
            vec![actual.into(), missing, comparison_strategy.into()],
        );
    }
    BasicErrorMessage::new(
        format!("{start}  %s%nbut could not find:%n  %s%n %s"),
        vec![
            actual.into(),
            expected_values.into(),
            Value::Seq(not_found),
            comparison_strategy.into(),
        ],
    )
}

/// Full text of an error: `Type: message` and every frame.
fn stack_trace_of(error: &ErrorValue) -> String {
    let mut out = if error.message().is_empty() {
        String::from(error.type_name())
    } else {
        format!("{}: {}", error.type_name(), error.message())
    };
    for frame in error.frames() {
        let _ = write!(out, "\n\tat {frame}");
    }
    out
}
