//! Handlers that control how opaque user objects are rendered.
//!
//! A value that is not one of the built-in [`Value`](crate::value::Value)
//! shapes (strings, numbers, sequences, ...) is carried as an
//! [`ObjectValue`](crate::value::ObjectValue). The handler picked when the
//! object is wrapped decides how it turns into text, unless a custom
//! formatter was registered for its type on the representation in use.
//!
//! # Built-in Handlers
//!
//! - [`Display`]: uses the type's [`Display`](core::fmt::Display) impl.
//! - [`struct@Debug`]: uses the type's [`Debug`](core::fmt::Debug) impl.
//! - [`Any`]: works for any type and only shows its type name.
//!
//! # Examples
//!
//! ```rust
//! use shouldbe::{prelude::*, value::Value};
//!
//! #[derive(Debug)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let value = Value::debug(Point { x: 1, y: 2 });
//! assert_eq!(
//!     StandardRepresentation::new().to_string_of(&value),
//!     "Point { x: 1, y: 2 }"
//! );
//! ```

use core::fmt;

use crate::value::short_type_name;

/// Renders values of type `T`.
///
/// Handlers are stateless marker types; the rendering function is resolved
/// statically when an object is wrapped and stored as a plain function
/// pointer next to the erased value.
pub trait ObjectHandler<T>: 'static {
    /// Writes the textual form of `value`.
    fn render(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Handler for types implementing [`Display`](core::fmt::Display).
///
/// # Examples
///
/// ```rust
/// use shouldbe::{prelude::*, value::Value};
///
/// let value = Value::display(std::net::Ipv4Addr::LOCALHOST);
/// assert_eq!(StandardRepresentation::new().to_string_of(&value), "127.0.0.1");
/// ```
#[derive(Copy, Clone)]
pub struct Display;

impl<T: fmt::Display> ObjectHandler<T> for Display {
    fn render(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(value, f)
    }
}

/// Handler for types implementing [`Debug`](core::fmt::Debug).
#[derive(Copy, Clone)]
pub struct Debug;

impl<T: fmt::Debug> ObjectHandler<T> for Debug {
    fn render(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(value, f)
    }
}

/// Handler for any type, showing only `an object of type Name`.
///
/// Useful for values that have no textual form but still need to appear in
/// a message, typically together with a custom formatter registered on the
/// representation.
#[derive(Copy, Clone)]
pub struct Any;

impl<T> ObjectHandler<T> for Any {
    fn render(_value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "an object of type {}",
            short_type_name(core::any::type_name::<T>())
        )
    }
}
