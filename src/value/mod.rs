//! The values a message template can carry.
//!
//! Assertion code hands arbitrary values to message templates: the actual
//! value under test, the expected one, sizes, indices, comparison
//! strategies and so on. [`Value`] is the closed set of shapes a
//! [`Representation`](crate::representation::Representation) knows how to
//! render. Conversions exist from the primitive and collection types, and
//! any other type enters through a [handler](crate::handlers).
//!
//! # Examples
//!
//! ```rust
//! use shouldbe::value::{Value, unquoted};
//!
//! let values: [Value; 4] = [
//!     "Yoda".into(),
//!     42u8.into(),
//!     vec!["a", "b"].into(),
//!     unquoted("verbatim"),
//! ];
//! assert!(matches!(values[3], Value::Unquoted(_)));
//! ```

mod number;
mod object;

use alloc::{
    borrow::Cow,
    boxed::Box,
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};
use core::{cmp::Ordering, fmt, time::Duration};

pub use self::{
    number::Number,
    object::{ObjectValue, short_type_name},
};
use crate::{comparison::ComparisonStrategy, handlers};

/// A value substituted into a message template.
#[derive(Clone, Debug)]
pub enum Value {
    /// The absence of a value, rendered `null`.
    Null,
    /// A boolean.
    Bool(bool),
    /// A single character, rendered quoted: `'c'`.
    Char(char),
    /// A primitive number.
    Number(Number),
    /// A string, rendered quoted: `"s"`.
    Str(String),
    /// Text spliced verbatim, bypassing quoting.
    Unquoted(String),
    /// A list, slice or array.
    Seq(Vec<Value>),
    /// A tuple, always rendered on a single line.
    Tuple(Vec<Value>),
    /// A map, as ordered key/value pairs.
    Map(Vec<(Value, Value)>),
    /// A single map entry, rendered `key=value`.
    Entry(Box<(Value, Value)>),
    /// The description of a predicate.
    Predicate(PredicateDescription),
    /// The comparison strategy used by an assertion.
    Strategy(ComparisonStrategy),
    /// A time span.
    Duration(Duration),
    /// A captured error.
    Error(ErrorValue),
    /// Any other object, rendered through its handler.
    Object(ObjectValue),
}

/// Wraps `text` so it is rendered verbatim, without surrounding quotes.
///
/// # Examples
///
/// ```rust
/// use shouldbe::{prelude::*, value::unquoted};
///
/// let representation = StandardRepresentation::new();
/// assert_eq!(representation.to_string_of(&"abc".into()), "\"abc\"");
/// assert_eq!(representation.to_string_of(&unquoted("abc")), "abc");
/// ```
pub fn unquoted(text: impl Into<String>) -> Value {
    Value::Unquoted(text.into())
}

impl Value {
    /// Wraps an object rendered with its [`Display`](core::fmt::Display) impl.
    pub fn display<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Value::Object(ObjectValue::new::<T, handlers::Display>(value))
    }

    /// Wraps an object rendered with its [`Debug`](core::fmt::Debug) impl.
    pub fn debug<T>(value: T) -> Self
    where
        T: fmt::Debug + Send + Sync + 'static,
    {
        Value::Object(ObjectValue::new::<T, handlers::Debug>(value))
    }

    /// Wraps an object rendered by a specific handler.
    pub fn object<T, H>(value: T) -> Self
    where
        T: Send + Sync + 'static,
        H: handlers::ObjectHandler<T>,
    {
        Value::Object(ObjectValue::new::<T, H>(value))
    }

    /// Builds a sequence out of anything iterable.
    pub fn seq<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Builds a map out of key/value pairs, keeping their order.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds a single `key=value` entry.
    pub fn entry(key: impl Into<Value>, value: impl Into<Value>) -> Self {
        Value::Entry(Box::new((key.into(), value.into())))
    }

    /// The label used when two values would otherwise render identically.
    pub fn type_name(&self) -> Cow<'static, str> {
        let name = match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Number(n) => n.type_name(),
            Value::Str(_) | Value::Unquoted(_) => "String",
            Value::Seq(_) => "Vec",
            Value::Tuple(_) => "tuple",
            Value::Map(_) => "Map",
            Value::Entry(_) => "Entry",
            Value::Predicate(_) => "Predicate",
            Value::Strategy(_) => "ComparisonStrategy",
            Value::Duration(_) => "Duration",
            Value::Error(e) => return Cow::Owned(e.type_name().to_string()),
            Value::Object(o) => short_type_name(o.type_name()),
        };
        Cow::Borrowed(name)
    }

    /// Orders two values when both are naturally comparable.
    ///
    /// Numbers compare by value across types, text and characters
    /// lexicographically, booleans with `false < true`. Any other pairing
    /// yields `None`.
    pub fn natural_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.natural_cmp(b),
            (
                Value::Str(a) | Value::Unquoted(a),
                Value::Str(b) | Value::Unquoted(b),
            ) => Some(a.cmp(b)),
            (Value::Char(a), Value::Char(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Plain text of the value, without any quoting.
    ///
    /// Used where a message embeds a value inside its own quotes, such as
    /// the index differences of an exact containment failure.
    pub fn to_plain_string(&self) -> String {
        match self {
            Value::Null => String::from("null"),
            Value::Bool(b) => b.to_string(),
            Value::Char(c) => c.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Str(s) | Value::Unquoted(s) => s.clone(),
            Value::Seq(items) => join_plain(items, "[", "]"),
            Value::Tuple(items) => join_plain(items, "(", ")"),
            Value::Map(entries) => {
                let mut out = String::from("{");
                for (index, (k, v)) in entries.iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&k.to_plain_string());
                    out.push('=');
                    out.push_str(&v.to_plain_string());
                }
                out.push('}');
                out
            }
            Value::Entry(entry) => {
                let (k, v) = &**entry;
                let mut out = k.to_plain_string();
                out.push('=');
                out.push_str(&v.to_plain_string());
                out
            }
            Value::Predicate(p) => p.description().to_string(),
            Value::Strategy(s) => s.as_text(),
            Value::Duration(d) => crate::representation::duration_to_string(*d),
            Value::Error(e) => e.message().to_string(),
            Value::Object(o) => o.to_string(),
        }
    }
}

fn join_plain(items: &[Value], start: &str, end: &str) -> String {
    let mut out = String::from(start);
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push_str(&item.to_plain_string());
    }
    out.push_str(end);
    out
}

/// Describes the predicate an assertion evaluated.
///
/// The default description, `given`, is rendered unquoted; any other
/// description is rendered in single quotes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredicateDescription {
    description: Cow<'static, str>,
}

impl PredicateDescription {
    /// The description used when none was provided.
    pub const GIVEN: Self = Self {
        description: Cow::Borrowed("given"),
    };

    /// Creates a description for a predicate.
    pub fn new(description: impl Into<Cow<'static, str>>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// The description text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether this is the default `given` description.
    pub fn is_default(&self) -> bool {
        *self == Self::GIVEN
    }
}

impl Default for PredicateDescription {
    fn default() -> Self {
        Self::GIVEN
    }
}

/// An error captured as a value, so it can appear inside a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorValue {
    type_name: Cow<'static, str>,
    message: String,
    frames: Vec<String>,
}

impl ErrorValue {
    /// Captures the type name and message of `error`.
    pub fn new<E>(error: &E) -> Self
    where
        E: core::error::Error + 'static,
    {
        Self {
            type_name: Cow::Borrowed(short_type_name(core::any::type_name::<E>())),
            message: error.to_string(),
            frames: Vec::new(),
        }
    }

    /// Builds an error value from its parts.
    pub fn from_parts(type_name: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            frames: Vec::new(),
        }
    }

    /// Attaches the stack frames of the error, most recent first.
    pub fn with_frames<I>(mut self, frames: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.frames = frames.into_iter().map(Into::into).collect();
        self
    }

    /// The short type name of the error.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The captured stack frames.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }
}

macro_rules! value_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(value.into())
                }
            }
        )*
    };
}

value_from_number!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Value::Str(value.into_owned())
    }
}

impl From<Duration> for Value {
    fn from(value: Duration) -> Self {
        Value::Duration(value)
    }
}

impl From<ComparisonStrategy> for Value {
    fn from(value: ComparisonStrategy) -> Self {
        Value::Strategy(value)
    }
}

impl From<&ComparisonStrategy> for Value {
    fn from(value: &ComparisonStrategy) -> Self {
        Value::Strategy(value.clone())
    }
}

impl From<PredicateDescription> for Value {
    fn from(value: PredicateDescription) -> Self {
        Value::Predicate(value)
    }
}

impl From<ErrorValue> for Value {
    fn from(value: ErrorValue) -> Self {
        Value::Error(value)
    }
}

impl From<ObjectValue> for Value {
    fn from(value: ObjectValue) -> Self {
        Value::Object(value)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::seq(value)
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(value: &[T]) -> Self {
        Value::seq(value.iter().cloned())
    }
}

impl<T: Into<Value> + Clone> From<&Vec<T>> for Value {
    fn from(value: &Vec<T>) -> Self {
        Value::seq(value.iter().cloned())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(value: [T; N]) -> Self {
        Value::seq(value)
    }
}

impl<T: Into<Value> + Clone, const N: usize> From<&[T; N]> for Value {
    fn from(value: &[T; N]) -> Self {
        Value::seq(value.iter().cloned())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(value: BTreeMap<K, V>) -> Self {
        Value::map(value)
    }
}

impl<K: Into<Value>, V: Into<Value>, S> From<indexmap::IndexMap<K, V, S>> for Value {
    fn from(value: indexmap::IndexMap<K, V, S>) -> Self {
        Value::map(value)
    }
}

macro_rules! value_from_tuple {
    ($($name:ident),+) => {
        impl<$($name: Into<Value>),+> From<($($name,)+)> for Value {
            #[allow(non_snake_case)]
            fn from(($($name,)+): ($($name,)+)) -> Self {
                Value::Tuple(alloc::vec![$($name.into()),+])
            }
        }
    };
}

value_from_tuple!(A, B);
value_from_tuple!(A, B, C);
value_from_tuple!(A, B, C, D);

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn test_option_none_is_null() {
        assert!(matches!(Value::from(None::<i32>), Value::Null));
        assert!(matches!(Value::from(Some(3)), Value::Number(Number::I32(3))));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::from(42f32).type_name(), "f32");
        assert_eq!(Value::from("a").type_name(), "String");
        assert_eq!(Value::debug(vec![1u8]).type_name(), "Vec<u8>");
    }

    #[test]
    fn test_plain_string_does_not_quote() {
        let value = Value::from(vec!["a", "b"]);
        assert_eq!(value.to_plain_string(), "[a, b]");
        assert_eq!(Value::entry("k", 'v').to_plain_string(), "k=v");
    }

    #[test]
    fn test_natural_cmp() {
        assert_eq!(
            Value::from("a").natural_cmp(&Value::from("b")),
            Some(Ordering::Less)
        );
        assert_eq!(Value::from("a").natural_cmp(&Value::from(1)), None);
    }

    #[test]
    fn test_predicate_default() {
        assert!(PredicateDescription::default().is_default());
        assert!(!PredicateDescription::new("is even").is_default());
    }

    static_assertions::assert_impl_all!(Value: Send, Sync, Clone);
}
