//! Messages about a collection that should contain exactly some elements,
//! in the same order.

use alloc::{format, string::String, vec};
use core::fmt::Write as _;

use super::{BasicErrorMessage, collections::is_empty};
use crate::{
    comparison::ComparisonStrategy,
    config::MAX_INDICES_FOR_PRINTING,
    value::{Value, unquoted},
};

const EXPECTING_TO_CONTAIN_EXACTLY: &str =
    "%nExpecting actual:%n  %s%nto contain exactly (and in same order):%n  %s%n";

/// An index at which the actual and expected collections differ.
#[derive(Clone, Debug)]
pub struct IndexedDiff {
    /// The actual element.
    pub actual: Value,
    /// The expected element.
    pub expected: Value,
    /// Position of both elements.
    pub index: usize,
}

impl IndexedDiff {
    /// Records the difference at `index`.
    pub fn new(actual: impl Into<Value>, expected: impl Into<Value>, index: usize) -> Self {
        Self {
            actual: actual.into(),
            expected: expected.into(),
            index,
        }
    }
}

/// The actual collection does not contain exactly the expected elements.
///
/// The wording depends on which of `not_found` and `not_expected` are
/// empty. When both are, the elements are the same but not in the same
/// order.
///
/// # Examples
///
/// ```rust
/// use shouldbe::{comparison::ComparisonStrategy, message::contain_exactly::should_contain_exactly, prelude::*};
///
/// let message = should_contain_exactly(
///     vec!["Yoda", "Han"],
///     vec!["Luke", "Yoda"],
///     vec!["Luke"],
///     vec!["Han"],
///     ComparisonStrategy::Standard,
/// )
/// .create(&"Test".into(), &StandardRepresentation::new());
/// assert_eq!(
///     message,
///     "[Test] \nExpecting actual:\n  [\"Yoda\", \"Han\"]\nto contain exactly (and in same order):\n  [\"Luke\", \"Yoda\"]\nbut some elements were not found:\n  [\"Luke\"]\nand others were not expected:\n  [\"Han\"]\n"
/// );
/// ```
pub fn should_contain_exactly(
    actual: impl Into<Value>,
    expected: impl Into<Value>,
    not_found: impl Into<Value>,
    not_expected: impl Into<Value>,
    comparison_strategy: ComparisonStrategy,
) -> BasicErrorMessage {
    let actual = actual.into();
    let expected = expected.into();
    let not_found = not_found.into();
    let not_expected = not_expected.into();
    let strategy = Value::from(comparison_strategy);

    match (is_empty(&not_found), is_empty(&not_expected)) {
        (true, true) => BasicErrorMessage::new(EXPECTING_TO_CONTAIN_EXACTLY, vec![actual, expected]),
        (false, true) => BasicErrorMessage::new(
            format!(
                "{EXPECTING_TO_CONTAIN_EXACTLY}but could not find the following elements:%n  %s%n%s"
            ),
            vec![actual, expected, not_found, strategy],
        ),
        (true, false) => BasicErrorMessage::new(
            format!("{EXPECTING_TO_CONTAIN_EXACTLY}but some elements were not expected:%n  %s%n%s"),
            vec![actual, expected, not_expected, strategy],
        ),
        (false, false) => BasicErrorMessage::new(
            format!(
                "{EXPECTING_TO_CONTAIN_EXACTLY}but some elements were not found:%n  %s%nand others were not expected:%n  %s%n%s"
            ),
            vec![actual, expected, not_found, not_expected, strategy],
        ),
    }
}

/// The actual collection has the expected elements but differs at some
/// indexes.
///
/// At most [`MAX_INDICES_FOR_PRINTING`] differences are listed; elements
/// are shown as plain text between double quotes.
pub fn should_contain_exactly_with_indexes(
    actual: impl Into<Value>,
    expected: impl Into<Value>,
    index_differences: &[IndexedDiff],
) -> BasicErrorMessage {
    let mut differences = String::from("but there were differences at these indexes");
    if index_differences.len() >= MAX_INDICES_FOR_PRINTING {
        let _ = write!(
            differences,
            " (only showing the first {MAX_INDICES_FOR_PRINTING} mismatches)"
        );
    }
    differences.push_str(":\n");
    for diff in index_differences.iter().take(MAX_INDICES_FOR_PRINTING) {
        let _ = writeln!(
            differences,
            "  - element at index {}: expected \"{}\" but was \"{}\"",
            diff.index,
            diff.expected.to_plain_string(),
            diff.actual.to_plain_string()
        );
    }

    BasicErrorMessage::new(
        format!("{EXPECTING_TO_CONTAIN_EXACTLY}%s"),
        vec![actual.into(), expected.into(), unquoted(differences)],
    )
}

/// Both collections have the same elements, but not in the same order.
pub fn elements_differ_at_index(
    actual_element: impl Into<Value>,
    expected_element: impl Into<Value>,
    index: usize,
    comparison_strategy: ComparisonStrategy,
) -> BasicErrorMessage {
    message!(
        "%nActual and expected have the same elements but not in the same order, at index %s actual element was:%n  %s%nwhereas expected element was:%n  %s%n%s",
        index,
        actual_element,
        expected_element,
        comparison_strategy
    )
}

/// The actual and expected collections should have the same size.
pub fn should_have_same_size(
    actual: impl Into<Value>,
    expected: impl Into<Value>,
    actual_size: usize,
    expected_size: usize,
    comparison_strategy: ComparisonStrategy,
) -> BasicErrorMessage {
    message!(
        "%nActual and expected should have same size but actual size was:%n  %s%nwhile expected size was:%n  %s%nActual was:%n  %s%nExpected was:%n  %s%n%s",
        actual_size,
        expected_size,
        actual,
        expected,
        comparison_strategy
    )
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::{
        description::Description, message::ErrorMessageFactory,
        representation::StandardRepresentation,
    };

    fn render(factory: BasicErrorMessage) -> String {
        factory.create(&Description::from("Test"), &StandardRepresentation::new())
    }

    #[test]
    fn test_only_not_found() {
        let message = render(should_contain_exactly(
            vec!["Yoda"],
            vec!["Luke", "Yoda"],
            vec!["Luke"],
            Vec::<&str>::new(),
            ComparisonStrategy::Standard,
        ));
        assert_eq!(
            message,
            "[Test] \nExpecting actual:\n  [\"Yoda\"]\nto contain exactly (and in same order):\n  [\"Luke\", \"Yoda\"]\nbut could not find the following elements:\n  [\"Luke\"]\n"
        );
    }

    #[test]
    fn test_only_not_expected_with_comparator() {
        let message = render(should_contain_exactly(
            vec!["Yoda", "Han"],
            vec!["Yoda"],
            Vec::<&str>::new(),
            vec!["Han"],
            ComparisonStrategy::comparator("CaseInsensitiveStringComparator"),
        ));
        assert_eq!(
            message,
            "[Test] \nExpecting actual:\n  [\"Yoda\", \"Han\"]\nto contain exactly (and in same order):\n  [\"Yoda\"]\nbut some elements were not expected:\n  [\"Han\"]\nwhen comparing values using CaseInsensitiveStringComparator"
        );
    }

    #[test]
    fn test_same_elements_in_other_order() {
        let message = render(should_contain_exactly(
            vec!["Han", "Yoda"],
            vec!["Yoda", "Han"],
            Value::Null,
            Value::Null,
            ComparisonStrategy::Standard,
        ));
        assert_eq!(
            message,
            "[Test] \nExpecting actual:\n  [\"Han\", \"Yoda\"]\nto contain exactly (and in same order):\n  [\"Yoda\", \"Han\"]\n"
        );
    }

    #[test]
    fn test_index_differences() {
        let diffs = [IndexedDiff::new("Han", "Yoda", 0), IndexedDiff::new("50%", "Luke", 2)];
        let message = render(should_contain_exactly_with_indexes(
            vec!["Han", "Leia", "50%"],
            vec!["Yoda", "Leia", "Luke"],
            &diffs,
        ));
        assert_eq!(
            message,
            "[Test] \nExpecting actual:\n  [\"Han\", \"Leia\", \"50%\"]\nto contain exactly (and in same order):\n  [\"Yoda\", \"Leia\", \"Luke\"]\nbut there were differences at these indexes:\n  - element at index 0: expected \"Yoda\" but was \"Han\"\n  - element at index 2: expected \"Luke\" but was \"50%\"\n"
        );
    }

    #[test]
    fn test_index_differences_are_capped() {
        let diffs: Vec<IndexedDiff> = (0..60).map(|i| IndexedDiff::new(i, i + 1, i)).collect();
        let message = render(should_contain_exactly_with_indexes(
            Value::Null,
            Value::Null,
            &diffs,
        ));
        assert!(message.contains("(only showing the first 50 mismatches):\n"));
        assert_eq!(message.matches("  - element at index").count(), 50);
        assert!(message.ends_with("  - element at index 49: expected \"50\" but was \"49\"\n"));
    }

    #[test]
    fn test_elements_differ_at_index() {
        let message = render(elements_differ_at_index(
            "Luke",
            "Han",
            1,
            ComparisonStrategy::Standard,
        ));
        assert_eq!(
            message,
            "[Test] \nActual and expected have the same elements but not in the same order, at index 1 actual element was:\n  \"Luke\"\nwhereas expected element was:\n  \"Han\"\n"
        );
    }

    #[test]
    fn test_should_have_same_size() {
        let message = render(should_have_same_size(
            vec!["Luke", "Yoda"],
            vec!["Luke"],
            2,
            1,
            ComparisonStrategy::Standard,
        ));
        assert_eq!(
            message,
            "[Test] \nActual and expected should have same size but actual size was:\n  2\nwhile expected size was:\n  1\nActual was:\n  [\"Luke\", \"Yoda\"]\nExpected was:\n  [\"Luke\"]\n"
        );
    }
}
