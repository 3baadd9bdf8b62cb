//! Messages about the query parameters of a URI.
//!
//! The URI under test is usually wrapped with [`Value::display`], so it is
//! shown as-is between angle brackets while parameter names and values are
//! quoted:
//!
//! ```text
//! Expecting actual:
//!   <http://example.org/news?article=11>
//! to have parameter:
//!   <"article">
//! with value:
//!   <"10">
//! but had value:
//!   <"11">
//! ```

use alloc::{
    collections::{BTreeMap, BTreeSet},
    format,
    string::String,
    vec::Vec,
};

use super::BasicErrorMessage;
use crate::value::Value;

const SHOULD_HAVE_PARAMETER_BUT_WAS_MISSING: &str =
    "%nExpecting actual:%n  <%s>%nto have parameter:%n  <%s>%nbut was missing";
const SHOULD_HAVE_PARAMETER_WITHOUT_VALUE_BUT_PARAMETER_WAS_MISSING: &str =
    "%nExpecting actual:%n  <%s>%nto have parameter:%n  <%s>%nwith no value, but parameter was missing";
const SHOULD_HAVE_PARAMETER_WITH_VALUE_BUT_PARAMETER_WAS_MISSING: &str =
    "%nExpecting actual:%n  <%s>%nto have parameter:%n  <%s>%nwith value:%n  <%s>%nbut parameter was missing";
const SHOULD_HAVE_PARAMETER_WITHOUT_VALUE_BUT_HAD_VALUE: &str =
    "%nExpecting actual:%n  <%s>%nto have parameter:%n  <%s>%nwith no value, but parameter had value:%n  <%s>";
const SHOULD_HAVE_PARAMETER_WITHOUT_VALUE_BUT_HAD_VALUES: &str =
    "%nExpecting actual:%n  <%s>%nto have parameter:%n  <%s>%nwith no value, but parameter had values:%n  <%s>";
const SHOULD_HAVE_PARAMETER_WITH_VALUE_BUT_HAD_NO_VALUE: &str =
    "%nExpecting actual:%n  <%s>%nto have parameter:%n  <%s>%nwith value:%n  <%s>%nbut parameter had no value";
const SHOULD_HAVE_PARAMETER_VALUE_BUT_HAD_WRONG_VALUE: &str =
    "%nExpecting actual:%n  <%s>%nto have parameter:%n  <%s>%nwith value:%n  <%s>%nbut had value:%n  <%s>";
const SHOULD_HAVE_PARAMETER_VALUE_BUT_HAD_WRONG_VALUES: &str =
    "%nExpecting actual:%n  <%s>%nto have parameter:%n  <%s>%nwith value:%n  <%s>%nbut had values:%n  <%s>";
const SHOULD_HAVE_SAME_PARAMETERS: &str =
    "%nExpecting parameters:%n%s%nbut had:%n%s%nnot expected:%n%s%nmissing:%n%s";
const SHOULD_HAVE_SAME_PARAMETERS_EMPTY_NOT_EXPECTED: &str =
    "%nExpecting parameters:%n%s%nbut had:%n%s%nmissing:%n%s";
const SHOULD_HAVE_SAME_PARAMETERS_EMPTY_MISSING: &str =
    "%nExpecting parameters:%n%s%nbut had:%n%s%nnot expected:%n%s";
const SHOULD_HAVE_NO_PARAMETER_BUT_HAD_ONE_WITHOUT_VALUE: &str =
    "%nExpecting actual:%n  <%s>%nnot to have parameter:%n  <%s>%nbut parameter was present with no value";
const SHOULD_HAVE_NO_PARAMETER_BUT_HAD_ONE_VALUE: &str =
    "%nExpecting actual:%n  <%s>%nnot to have parameter:%n  <%s>%nbut parameter was present with value:%n  <%s>";
const SHOULD_HAVE_NO_PARAMETER_BUT_HAD_MULTIPLE_VALUES: &str =
    "%nExpecting actual:%n  <%s>%nnot to have parameter:%n  <%s>%nbut parameter was present with values:%n  <%s>";
const SHOULD_HAVE_NO_PARAMETER_WITHOUT_VALUE_BUT_FOUND_ONE: &str =
    "%nExpecting actual:%n  <%s>%nnot to have parameter:%n  <%s>%nwith no value, but did";
const SHOULD_HAVE_NO_PARAMETER_WITH_GIVEN_VALUE_BUT_FOUND_ONE: &str =
    "%nExpecting actual:%n  <%s>%nnot to have parameter:%n  <%s>%nwith value:%n  <%s>%nbut did";
const SHOULD_HAVE_NO_PARAMETERS: &str =
    "%nExpecting actual:%n  <%s>%nnot to have any parameters but found:%n  <%s>";

/// Parameters of a URI: each name with its values, `None` standing for a
/// parameter present without value (`?flag`).
pub type Parameters = BTreeMap<String, Vec<Option<String>>>;

/// The URI has no parameter `name`.
pub fn should_have_parameter(actual: impl Into<Value>, name: &str) -> BasicErrorMessage {
    message!(SHOULD_HAVE_PARAMETER_BUT_WAS_MISSING, actual, name)
}

/// The URI has no parameter `name`, expected with the given value or with
/// no value at all.
pub fn should_have_parameter_with_value(
    actual: impl Into<Value>,
    name: &str,
    expected_value: Option<&str>,
) -> BasicErrorMessage {
    match expected_value {
        None => message!(
            SHOULD_HAVE_PARAMETER_WITHOUT_VALUE_BUT_PARAMETER_WAS_MISSING,
            actual,
            name
        ),
        Some(expected) => message!(
            SHOULD_HAVE_PARAMETER_WITH_VALUE_BUT_PARAMETER_WAS_MISSING,
            actual,
            name,
            expected
        ),
    }
}

/// The URI has parameter `name`, but not with the expected value.
///
/// # Examples
///
/// ```rust
/// use shouldbe::{message::uri::should_have_parameter_with_values, prelude::*, value::Value};
///
/// let message = should_have_parameter_with_values(
///     Value::display("http://example.org/news?article=11"),
///     "article",
///     Some("10"),
///     &[Some("11"), Some("12")],
/// )
/// .create(&Description::EMPTY, &StandardRepresentation::new());
/// assert!(message.ends_with("but had values:\n  <\"[11, 12]\">"));
/// ```
pub fn should_have_parameter_with_values(
    actual: impl Into<Value>,
    name: &str,
    expected_value: Option<&str>,
    actual_values: &[Option<&str>],
) -> BasicErrorMessage {
    let Some(expected) = expected_value else {
        let template = if has_multiple_values(actual_values) {
            SHOULD_HAVE_PARAMETER_WITHOUT_VALUE_BUT_HAD_VALUES
        } else {
            SHOULD_HAVE_PARAMETER_WITHOUT_VALUE_BUT_HAD_VALUE
        };
        return message!(template, actual, name, value_description(actual_values));
    };
    if has_no_value(Some(actual_values)) {
        return message!(
            SHOULD_HAVE_PARAMETER_WITH_VALUE_BUT_HAD_NO_VALUE,
            actual,
            name,
            expected
        );
    }
    let template = if has_multiple_values(actual_values) {
        SHOULD_HAVE_PARAMETER_VALUE_BUT_HAD_WRONG_VALUES
    } else {
        SHOULD_HAVE_PARAMETER_VALUE_BUT_HAD_WRONG_VALUE
    };
    message!(
        template,
        actual,
        name,
        expected,
        value_description(actual_values)
    )
}

/// The URI parameters differ from the expected ones.
///
/// Each parameter set is listed one `name=[values]` per line, sorted; the
/// `not expected` and `missing` sections are left out when empty.
pub fn should_have_same_parameters(
    actual: &Parameters,
    expected: &Parameters,
    missing: &Parameters,
    not_expected: &Parameters,
) -> BasicErrorMessage {
    if not_expected.is_empty() {
        return message!(
            SHOULD_HAVE_SAME_PARAMETERS_EMPTY_NOT_EXPECTED,
            format_parameters(expected),
            format_parameters(actual),
            format_parameters(missing)
        );
    }
    if missing.is_empty() {
        return message!(
            SHOULD_HAVE_SAME_PARAMETERS_EMPTY_MISSING,
            format_parameters(expected),
            format_parameters(actual),
            format_parameters(not_expected)
        );
    }
    message!(
        SHOULD_HAVE_SAME_PARAMETERS,
        format_parameters(expected),
        format_parameters(actual),
        format_parameters(not_expected),
        format_parameters(missing)
    )
}

/// The URI should have no parameters at all.
pub fn should_have_no_parameters(
    actual: impl Into<Value>,
    parameter_names: &BTreeSet<String>,
) -> BasicErrorMessage {
    let description = match parameter_names.first() {
        Some(name) if parameter_names.len() == 1 => name.clone(),
        _ => list_to_string(parameter_names.iter().map(String::as_str)),
    };
    message!(SHOULD_HAVE_NO_PARAMETERS, actual, description)
}

/// The URI should not have parameter `name`; `actual_values` are the
/// values it was found with.
pub fn should_have_no_parameter(
    actual: impl Into<Value>,
    name: &str,
    actual_values: Option<&[Option<&str>]>,
) -> BasicErrorMessage {
    match actual_values {
        Some(values) if !has_no_value(actual_values) => {
            let template = if has_multiple_values(values) {
                SHOULD_HAVE_NO_PARAMETER_BUT_HAD_MULTIPLE_VALUES
            } else {
                SHOULD_HAVE_NO_PARAMETER_BUT_HAD_ONE_VALUE
            };
            message!(template, actual, name, value_description(values))
        }
        _ => message!(
            SHOULD_HAVE_NO_PARAMETER_BUT_HAD_ONE_WITHOUT_VALUE,
            actual,
            name
        ),
    }
}

/// The URI should not have parameter `name` with `unwanted_value`.
pub fn should_have_no_parameter_with_value(
    actual: impl Into<Value>,
    name: &str,
    unwanted_value: Option<&str>,
    actual_values: Option<&[Option<&str>]>,
) -> BasicErrorMessage {
    if has_no_value(actual_values) {
        return message!(
            SHOULD_HAVE_NO_PARAMETER_WITHOUT_VALUE_BUT_FOUND_ONE,
            actual,
            name
        );
    }
    message!(
        SHOULD_HAVE_NO_PARAMETER_WITH_GIVEN_VALUE_BUT_FOUND_ONE,
        actual,
        name,
        unwanted_value
    )
}

/// No values, or a single parameter occurrence without value.
fn has_no_value(values: Option<&[Option<&str>]>) -> bool {
    match values {
        None => true,
        Some(values) => matches!(values, [None]),
    }
}

fn has_multiple_values(values: &[Option<&str>]) -> bool {
    values.len() > 1
}

/// Several values are shown as one list; a single value as itself.
fn value_description(values: &[Option<&str>]) -> Value {
    match values {
        [single] => Value::from(*single),
        _ if has_multiple_values(values) => {
            Value::Str(list_to_string(values.iter().map(|v| v.unwrap_or("null"))))
        }
        _ => Value::Null,
    }
}

fn list_to_string<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let items: Vec<&str> = items.collect();
    format!("[{}]", items.join(", "))
}

fn format_parameters(parameters: &Parameters) -> String {
    let mut lines: Vec<String> = parameters
        .iter()
        .map(|(name, values)| {
            let values = list_to_string(values.iter().map(|v| v.as_deref().unwrap_or("null")));
            format!("{name}={values}")
        })
        .collect();
    lines.sort();
    lines.join(",\n")
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::*;
    use crate::{
        description::Description, message::ErrorMessageFactory,
        representation::StandardRepresentation,
    };

    const URI: &str = "http://example.org/news?article=10";

    fn render(factory: BasicErrorMessage) -> String {
        factory.create(&Description::from("TEST"), &StandardRepresentation::new())
    }

    fn uri() -> Value {
        Value::display(URI)
    }

    #[test]
    fn test_missing_parameter() {
        assert_eq!(
            render(should_have_parameter(uri(), "author")),
            "[TEST] \nExpecting actual:\n  <http://example.org/news?article=10>\nto have parameter:\n  <\"author\">\nbut was missing"
        );
        assert_eq!(
            render(should_have_parameter_with_value(uri(), "author", None)),
            "[TEST] \nExpecting actual:\n  <http://example.org/news?article=10>\nto have parameter:\n  <\"author\">\nwith no value, but parameter was missing"
        );
    }

    #[test]
    fn test_parameter_value_selection() {
        assert_eq!(
            render(should_have_parameter_with_values(uri(), "article", None, &[Some("10")])),
            "[TEST] \nExpecting actual:\n  <http://example.org/news?article=10>\nto have parameter:\n  <\"article\">\nwith no value, but parameter had value:\n  <\"10\">"
        );
        assert_eq!(
            render(should_have_parameter_with_values(uri(), "article", Some("10"), &[None])),
            "[TEST] \nExpecting actual:\n  <http://example.org/news?article=10>\nto have parameter:\n  <\"article\">\nwith value:\n  <\"10\">\nbut parameter had no value"
        );
        assert_eq!(
            render(should_have_parameter_with_values(
                uri(),
                "article",
                Some("10"),
                &[Some("11")]
            )),
            "[TEST] \nExpecting actual:\n  <http://example.org/news?article=10>\nto have parameter:\n  <\"article\">\nwith value:\n  <\"10\">\nbut had value:\n  <\"11\">"
        );
    }

    #[test]
    fn test_no_parameter() {
        assert_eq!(
            render(should_have_no_parameter(uri(), "article", None)),
            "[TEST] \nExpecting actual:\n  <http://example.org/news?article=10>\nnot to have parameter:\n  <\"article\">\nbut parameter was present with no value"
        );
        assert_eq!(
            render(should_have_no_parameter(
                uri(),
                "article",
                Some(&[Some("10"), Some("11")])
            )),
            "[TEST] \nExpecting actual:\n  <http://example.org/news?article=10>\nnot to have parameter:\n  <\"article\">\nbut parameter was present with values:\n  <\"[10, 11]\">"
        );
        assert_eq!(
            render(should_have_no_parameter_with_value(
                uri(),
                "article",
                Some("10"),
                Some(&[Some("10")])
            )),
            "[TEST] \nExpecting actual:\n  <http://example.org/news?article=10>\nnot to have parameter:\n  <\"article\">\nwith value:\n  <\"10\">\nbut did"
        );
        assert_eq!(
            render(should_have_no_parameter_with_value(uri(), "article", None, Some(&[None]))),
            "[TEST] \nExpecting actual:\n  <http://example.org/news?article=10>\nnot to have parameter:\n  <\"article\">\nwith no value, but did"
        );
    }

    #[test]
    fn test_no_parameters() {
        let mut names = BTreeSet::new();
        names.insert("article".to_string());
        assert_eq!(
            render(should_have_no_parameters(uri(), &names)),
            "[TEST] \nExpecting actual:\n  <http://example.org/news?article=10>\nnot to have any parameters but found:\n  <\"article\">"
        );
        names.insert("author".to_string());
        assert!(render(should_have_no_parameters(uri(), &names)).ends_with("<\"[article, author]\">"));
    }

    #[test]
    fn test_same_parameters() {
        let mut actual = Parameters::new();
        actual.insert("b".to_string(), vec![Some("2".to_string())]);
        actual.insert("a".to_string(), vec![None]);
        let mut expected = Parameters::new();
        expected.insert("a".to_string(), vec![None]);
        expected.insert("c".to_string(), vec![Some("3".to_string())]);
        let mut missing = Parameters::new();
        missing.insert("c".to_string(), vec![Some("3".to_string())]);
        let mut not_expected = Parameters::new();
        not_expected.insert("b".to_string(), vec![Some("2".to_string())]);

        assert_eq!(
            render(should_have_same_parameters(&actual, &expected, &missing, &not_expected)),
            "[TEST] \nExpecting parameters:\n\"a=[null],\nc=[3]\"\nbut had:\n\"a=[null],\nb=[2]\"\nnot expected:\n\"b=[2]\"\nmissing:\n\"c=[3]\""
        );
        assert_eq!(
            render(should_have_same_parameters(&actual, &expected, &missing, &Parameters::new())),
            "[TEST] \nExpecting parameters:\n\"a=[null],\nc=[3]\"\nbut had:\n\"a=[null],\nb=[2]\"\nmissing:\n\"c=[3]\""
        );
    }
}
