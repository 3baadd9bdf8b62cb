//! Error message templates and the catalog of assertion failure messages.
//!
//! A message is data: a template string plus the values to substitute into
//! it ([`BasicErrorMessage`]). The catalog functions in the submodules pick
//! the right template variant for a failure (inclusive or exclusive bounds,
//! singular or plural wording, with or without a custom comparator) and
//! return it ready to render.
//!
//! # Examples
//!
//! ```rust
//! use shouldbe::{message::collections::should_be_empty, prelude::*};
//!
//! let message = should_be_empty(vec![""]).create(&Description::EMPTY, &StandardRepresentation::new());
//! assert_eq!(message, "\nExpecting empty but was: [\"\"]");
//! ```
//!
//! Custom messages are built with the [`message!`](crate::message!) macro:
//!
//! ```rust
//! use shouldbe::{message, prelude::*};
//!
//! let factory = message!("%nExpecting %s to be a Jedi", "Han");
//! assert_eq!(
//!     factory.create(&"check".into(), &StandardRepresentation::new()),
//!     "[check] \nExpecting \"Han\" to be a Jedi"
//! );
//! ```

pub mod arrays;
pub mod char_sequence;
pub mod collections;
pub mod contain_exactly;
pub mod errors;
pub mod objects;
pub mod should_be_equal;
pub mod uri;

use alloc::{borrow::Cow, string::String, vec::Vec};

use crate::{
    config::Configuration,
    creator::{AssertionErrorCreator, BoxedError},
    description::Description,
    formatter::{FormatError, MessageFormatter},
    representation::Representation,
    value::Value,
};

/// Something that renders an error message.
pub trait ErrorMessageFactory {
    /// Renders the message, reporting a malformed template.
    fn try_create(
        &self,
        description: &Description,
        representation: &dyn Representation,
    ) -> Result<String, FormatError>;

    /// Renders the message.
    ///
    /// # Panics
    ///
    /// Panics when the template and its arguments do not match. Catalog
    /// templates are written together with their arguments, so this only
    /// happens for a malformed custom message.
    #[track_caller]
    fn create(&self, description: &Description, representation: &dyn Representation) -> String {
        match self.try_create(description, representation) {
            Ok(message) => message,
            Err(error) => panic!("malformed error message template: {error}"),
        }
    }

    /// Renders the message with the representation of the current
    /// [`Configuration`].
    #[track_caller]
    fn create_default(&self, description: &Description) -> String {
        let configuration = Configuration::current();
        self.create(description, configuration.representation())
    }
}

/// Something that builds a complete assertion error, possibly through the
/// error bridge, rather than only a message.
pub trait AssertionErrorFactory {
    /// Builds the error for the failed assertion, located at the caller.
    #[track_caller]
    fn new_assertion_error(
        &self,
        description: &Description,
        representation: &dyn Representation,
        creator: &AssertionErrorCreator,
    ) -> BoxedError;
}

/// An immutable template and its arguments.
///
/// The number of `%s` placeholders in the template must equal the number
/// of arguments; [`try_create`](ErrorMessageFactory::try_create) reports a
/// [`FormatError`] otherwise.
#[derive(Clone, Debug)]
pub struct BasicErrorMessage {
    template: Cow<'static, str>,
    args: Vec<Value>,
}

/// Alias naming the data side of a [`BasicErrorMessage`].
pub type MessageTemplate = BasicErrorMessage;

impl BasicErrorMessage {
    /// Pairs a template with its arguments.
    pub fn new(template: impl Into<Cow<'static, str>>, args: Vec<Value>) -> Self {
        Self {
            template: template.into(),
            args,
        }
    }

    /// The template string.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The arguments, in placeholder order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

impl ErrorMessageFactory for BasicErrorMessage {
    fn try_create(
        &self,
        description: &Description,
        representation: &dyn Representation,
    ) -> Result<String, FormatError> {
        MessageFormatter.format(description, representation, &self.template, &self.args)
    }
}

impl<F: ErrorMessageFactory + ?Sized> ErrorMessageFactory for &F {
    fn try_create(
        &self,
        description: &Description,
        representation: &dyn Representation,
    ) -> Result<String, FormatError> {
        (**self).try_create(description, representation)
    }
}
