/// Builds a [`BasicErrorMessage`](crate::message::BasicErrorMessage) from a
/// template and its arguments.
///
/// Every argument is converted into a [`Value`](crate::value::Value),
/// so strings, numbers, collections, options and
/// [`Value`](crate::value::Value)s can be mixed freely.
///
/// # Examples
///
/// ```
/// use shouldbe::{message, prelude::*, value::unquoted};
///
/// let factory = message!(
///     "%nExpecting actual:%n  %s%nto have size %s but had %s",
///     vec!["a", "b"],
///     3usize,
///     unquoted("2")
/// );
/// assert_eq!(
///     factory.create(&Description::EMPTY, &StandardRepresentation::new()),
///     "\nExpecting actual:\n  [\"a\", \"b\"]\nto have size 3 but had 2"
/// );
///
/// // Templates without arguments work too.
/// let factory = message!("%nExpecting a failure");
/// assert_eq!(factory.template(), "%nExpecting a failure");
/// ```
#[macro_export]
macro_rules! message {
    ($template:expr $(,)?) => {
        $crate::message::BasicErrorMessage::new($template, $crate::__private::Vec::new())
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::message::BasicErrorMessage::new(
            $template,
            $crate::__private::vec![$($crate::__private::Into::<$crate::value::Value>::into($arg)),+],
        )
    };
}
