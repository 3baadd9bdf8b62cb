//! Messages about the content of collections and maps.

use alloc::{borrow::Cow, format};

use super::BasicErrorMessage;
use crate::{comparison::ComparisonStrategy, formatter::escape_percent, value::Value};

/// The actual value should have been empty.
///
/// ```text
/// Expecting empty but was: ["a"]
/// ```
pub fn should_be_empty(actual: impl Into<Value>) -> BasicErrorMessage {
    message!("%nExpecting empty but was: %s", actual)
}

/// The actual collection does not contain some of the expected elements.
///
/// The heading names the type of the actual value, `Expecting Vec:` for a
/// vector.
pub fn should_contain_elements(
    actual: impl Into<Value>,
    expected: impl Into<Value>,
    not_found: impl Into<Value>,
    comparison_strategy: ComparisonStrategy,
) -> BasicErrorMessage {
    let actual = actual.into();
    let template = format!(
        "%nExpecting {}:%n  %s%nto contain:%n  %s%nbut could not find the following element(s):%n  %s%n%s",
        escape_percent(&actual.type_name())
    );
    BasicErrorMessage::new(
        template,
        alloc::vec![actual, expected.into(), not_found.into(), comparison_strategy.into()],
    )
}

/// The actual collection contains values it should not.
pub fn should_not_contain(
    actual: impl Into<Value>,
    values: impl Into<Value>,
    found: impl Into<Value>,
    comparison_strategy: ComparisonStrategy,
) -> BasicErrorMessage {
    message!(
        "%nExpecting%n  %s%nnot to contain%n  %s%nbut found%n  %s%n%s",
        actual,
        values,
        found,
        comparison_strategy
    )
}

/// The actual collection does not contain only the expected values.
///
/// The wording depends on which of `not_found` and `not_expected` are
/// empty; maps talk about map entries rather than elements.
///
/// # Examples
///
/// ```rust
/// use shouldbe::{comparison::ComparisonStrategy, message::collections::should_contain_only, prelude::*};
///
/// let empty: Vec<&str> = Vec::new();
/// let message = should_contain_only(
///     vec!["Yoda", "Leia"],
///     vec!["Yoda"],
///     empty,
///     vec!["Leia"],
///     ComparisonStrategy::Standard,
/// )
/// .create(&Description::EMPTY, &StandardRepresentation::new());
/// assert_eq!(
///     message,
///     "\nExpecting Vec:\n  [\"Yoda\", \"Leia\"]\nto contain only:\n  [\"Yoda\"]\nbut the following element(s) were unexpected:\n  [\"Leia\"]\n"
/// );
/// ```
pub fn should_contain_only(
    actual: impl Into<Value>,
    expected: impl Into<Value>,
    not_found: impl Into<Value>,
    not_expected: impl Into<Value>,
    comparison_strategy: ComparisonStrategy,
) -> BasicErrorMessage {
    let actual = actual.into();
    let not_found = not_found.into();
    let not_expected = not_expected.into();

    let (kind, items): (Cow<'static, str>, &str) = match &actual {
        Value::Map(_) => (Cow::Borrowed("map"), "map entries"),
        other => (other.type_name(), "element(s)"),
    };
    let heading = format!(
        "%nExpecting {}:%n  %s%nto contain only:%n  %s%n",
        escape_percent(&kind)
    );
    let strategy = Value::from(comparison_strategy);

    match (is_empty(&not_found), is_empty(&not_expected)) {
        (false, false) => BasicErrorMessage::new(
            format!("{heading}{items} not found:%n  %s%nand {items} not expected:%n  %s%n%s"),
            alloc::vec![actual, expected.into(), not_found, not_expected, strategy],
        ),
        (false, true) => BasicErrorMessage::new(
            format!("{heading}but could not find the following {items}:%n  %s%n%s"),
            alloc::vec![actual, expected.into(), not_found, strategy],
        ),
        (true, _) => BasicErrorMessage::new(
            format!("{heading}but the following {items} were unexpected:%n  %s%n%s"),
            alloc::vec![actual, expected.into(), not_expected, strategy],
        ),
    }
}

pub(crate) fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Seq(items) | Value::Tuple(items) => items.is_empty(),
        Value::Map(entries) => entries.is_empty(),
        Value::Str(text) => text.is_empty(),
        _ => false,
    }
}
