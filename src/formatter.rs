//! Substitution of values into message templates.
//!
//! Templates use three directives:
//!
//! - `%s`: the next argument, rendered through the representation;
//! - `%n`: a line break (always `\n`);
//! - `%%`: a literal `%`.
//!
//! Arguments are substituted in a single pass, so a `%` inside a rendered
//! value is never interpreted as a directive.

use alloc::string::String;
use core::fmt;

use crate::{
    description::{Description, DescriptionFormatter},
    representation::Representation,
    value::Value,
};

/// A template and its arguments did not match.
///
/// Templates are authored together with their arguments, so these errors
/// point at a bug in the message catalog rather than at user input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// A `%` followed by something other than `s`, `n` or `%`.
    UnknownDirective {
        /// The character following the `%`.
        directive: char,
        /// Byte offset of the `%` in the template.
        position: usize,
    },
    /// The template ends with a lone `%`.
    DanglingPercent {
        /// Byte offset of the `%` in the template.
        position: usize,
    },
    /// More `%s` placeholders than arguments.
    MissingArgument {
        /// Zero-based index of the first argument that was missing.
        index: usize,
    },
    /// Fewer `%s` placeholders than arguments.
    UnusedArguments {
        /// Number of placeholders in the template.
        placeholders: usize,
        /// Number of arguments provided.
        arguments: usize,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownDirective {
                directive,
                position,
            } => write!(f, "unknown directive '%{directive}' at byte {position}"),
            FormatError::DanglingPercent { position } => {
                write!(f, "dangling '%' at byte {position}")
            }
            FormatError::MissingArgument { index } => {
                write!(f, "no argument for placeholder #{index}")
            }
            FormatError::UnusedArguments {
                placeholders,
                arguments,
            } => write!(
                f,
                "{arguments} argument(s) given for {placeholders} placeholder(s)"
            ),
        }
    }
}

impl core::error::Error for FormatError {}

/// Renders error messages: the description prefix followed by the template
/// with its arguments substituted.
///
/// Each argument is rendered through the representation, except comparison
/// strategies, which render as their
/// [`as_text`](crate::comparison::ComparisonStrategy::as_text) sentence.
///
/// # Examples
///
/// ```rust
/// use shouldbe::{formatter::MessageFormatter, prelude::*, value::unquoted};
///
/// let message = MessageFormatter
///     .format(
///         &"Jedi".into(),
///         &StandardRepresentation::new(),
///         "%nExpecting %s to be %s",
///         &["Luke".into(), unquoted("a master")],
///     )
///     .unwrap();
/// assert_eq!(message, "[Jedi] \nExpecting \"Luke\" to be a master");
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct MessageFormatter;

impl MessageFormatter {
    /// Formats a complete message.
    pub fn format(
        &self,
        description: &Description,
        representation: &dyn Representation,
        template: &str,
        args: &[Value],
    ) -> Result<String, FormatError> {
        let mut message = DescriptionFormatter.format(description);
        message.push_str(&self.substitute(representation, template, args)?);
        Ok(message)
    }

    /// Substitutes `args` into `template`, without description prefix.
    pub fn substitute(
        &self,
        representation: &dyn Representation,
        template: &str,
        args: &[Value],
    ) -> Result<String, FormatError> {
        let mut out = String::with_capacity(template.len());
        let mut next_arg = 0;
        let mut chars = template.char_indices();

        while let Some((position, c)) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some((_, 's')) => {
                    let arg = args
                        .get(next_arg)
                        .ok_or(FormatError::MissingArgument { index: next_arg })?;
                    out.push_str(&self.render_argument(representation, arg));
                    next_arg += 1;
                }
                Some((_, 'n')) => out.push('\n'),
                Some((_, '%')) => out.push('%'),
                Some((_, directive)) => {
                    return Err(FormatError::UnknownDirective {
                        directive,
                        position,
                    });
                }
                None => return Err(FormatError::DanglingPercent { position }),
            }
        }

        if next_arg != args.len() {
            return Err(FormatError::UnusedArguments {
                placeholders: next_arg,
                arguments: args.len(),
            });
        }
        Ok(out)
    }

    /// Renders a single template argument.
    pub fn render_argument(&self, representation: &dyn Representation, arg: &Value) -> String {
        match arg {
            Value::Strategy(strategy) => strategy.as_text(),
            Value::Unquoted(text) => text.clone(),
            other => representation.to_string_of(other),
        }
    }
}

/// Replaces `%` with `%%` so `text` can be embedded in a template.
pub fn escape_percent(text: &str) -> String {
    text.replace('%', "%%")
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::{
        comparison::ComparisonStrategy, representation::StandardRepresentation, value::unquoted,
    };

    fn substitute(template: &str, args: &[Value]) -> Result<String, FormatError> {
        MessageFormatter.substitute(&StandardRepresentation::new(), template, args)
    }

    #[test]
    fn test_directives() {
        assert_eq!(
            substitute("a%nb %% %s", &["c".into()]).unwrap(),
            "a\nb % \"c\""
        );
    }

    #[test]
    fn test_percent_in_argument_is_not_a_directive() {
        assert_eq!(
            substitute("%s", &[unquoted("100%s")]).unwrap(),
            "100%s"
        );
    }

    #[test]
    fn test_strategy_renders_as_text() {
        let args = vec![
            Value::from("a"),
            ComparisonStrategy::comparator("Lenient").into(),
        ];
        assert_eq!(
            substitute("%s%n%s", &args).unwrap(),
            "\"a\"\nwhen comparing values using Lenient"
        );
        assert_eq!(
            substitute("%s", &[ComparisonStrategy::Standard.into()]).unwrap(),
            ""
        );
    }

    #[test]
    fn test_mismatches_are_errors() {
        assert_eq!(
            substitute("%s %s", &["a".into()]),
            Err(FormatError::MissingArgument { index: 1 })
        );
        assert_eq!(
            substitute("%s", &["a".into(), "b".into()]),
            Err(FormatError::UnusedArguments {
                placeholders: 1,
                arguments: 2
            })
        );
        assert_eq!(
            substitute("%d", &[]),
            Err(FormatError::UnknownDirective {
                directive: 'd',
                position: 0
            })
        );
        assert_eq!(
            substitute("50%", &[]),
            Err(FormatError::DanglingPercent { position: 2 })
        );
    }

    #[test]
    fn test_escape_percent() {
        assert_eq!(escape_percent("H%an"), "H%%an");
    }

    static_assertions::assert_impl_all!(FormatError: core::error::Error, Send, Sync);
}
