//! Messages about two-dimensional arrays.

use alloc::string::String;

use super::BasicErrorMessage;
use crate::value::{Value, unquoted};

const SHOULD_HAVE_SAME_SIZE_OF_SUB_ARRAY_AS: &str = "%nActual and expected should have same size but actual[%s] size is:%n <%s>%nwhile expected[%s] size is:%n <%s>%nActual[%s] was:%n %s%nExpected[%s] was:%n %s%nActual was:%n %s%nExpected was:%n %s";

/// The sub-arrays at `index` of two 2D arrays have different sizes.
///
/// The sub-arrays are shown as plain text; the whole arrays go through the
/// representation.
///
/// # Examples
///
/// ```rust
/// use shouldbe::{message::arrays::should_have_same_size_of_sub_array_as, prelude::*};
///
/// let actual = vec![vec![1, 2], vec![3]];
/// let expected = vec![vec![1, 2], vec![3, 4]];
/// let message = should_have_same_size_of_sub_array_as(
///     actual.clone(),
///     expected.clone(),
///     actual[1].clone(),
///     expected[1].clone(),
///     1,
/// )
/// .create(&Description::EMPTY, &StandardRepresentation::new());
/// assert!(message.starts_with("\nActual and expected should have same size but actual[1] size is:\n <1>\n"));
/// ```
pub fn should_have_same_size_of_sub_array_as(
    actual: impl Into<Value>,
    expected: impl Into<Value>,
    actual_sub_array: impl Into<Value>,
    expected_sub_array: impl Into<Value>,
    index: usize,
) -> BasicErrorMessage {
    let actual_sub_array = actual_sub_array.into();
    let expected_sub_array = expected_sub_array.into();
    let actual_size = size_of(&actual_sub_array);
    let expected_size = size_of(&expected_sub_array);
    message!(
        SHOULD_HAVE_SAME_SIZE_OF_SUB_ARRAY_AS,
        index,
        actual_size,
        index,
        expected_size,
        index,
        plain(&actual_sub_array),
        index,
        plain(&expected_sub_array),
        actual,
        expected
    )
}

fn size_of(value: &Value) -> usize {
    match value {
        Value::Seq(items) | Value::Tuple(items) => items.len(),
        Value::Null => 0,
        _ => 1,
    }
}

fn plain(value: &Value) -> Value {
    let text: String = value.to_plain_string();
    unquoted(text)
}
