//! Messages about errors that were expected but not raised.

use super::BasicErrorMessage;
use crate::value::{short_type_name, unquoted};

/// An error of type `E` should have been raised.
///
/// ```rust
/// use shouldbe::{message::errors::expected_error_not_raised, prelude::*};
///
/// let message = expected_error_not_raised::<core::fmt::Error>()
///     .create(&Description::EMPTY, &StandardRepresentation::new());
/// assert_eq!(message, "Error should have been thrown");
/// ```
pub fn expected_error_not_raised<E: ?Sized>() -> BasicErrorMessage {
    expected_error_named_not_raised(short_type_name(core::any::type_name::<E>()))
}

/// An error of the named type should have been raised.
pub fn expected_error_named_not_raised(type_name: &str) -> BasicErrorMessage {
    message!("%s should have been thrown", unquoted(type_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        description::Description, message::ErrorMessageFactory,
        representation::StandardRepresentation,
    };

    #[derive(Debug)]
    struct Timeout;

    #[test]
    fn test_uses_short_type_name() {
        assert_eq!(
            expected_error_not_raised::<Timeout>()
                .create(&"io".into(), &StandardRepresentation::new()),
            "[io] Timeout should have been thrown"
        );
        assert_eq!(
            expected_error_named_not_raised("ParseIntError")
                .create(&Description::EMPTY, &StandardRepresentation::new()),
            "ParseIntError should have been thrown"
        );
    }
}
