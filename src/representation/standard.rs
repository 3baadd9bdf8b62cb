use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
use core::{any::TypeId, cmp::Ordering, fmt::Write as _};

use super::{FormatterMap, Representation, RepresentationLimits, duration_to_string};
use crate::{
    config::ConfigError,
    value::{ErrorValue, Number, Value},
};

const ELEMENT_SEPARATOR: &str = ", ";
const ELEMENT_SEPARATOR_WITH_NEWLINE: &str = ",\n";
const INDENTATION_FOR_MULTI_LINE_FORMAT: &str = "    ";
const MAX_ELEMENTS_EXCEEDED: &str = "...";

/// The default representation.
///
/// - `null` for [`Value::Null`], strings in double quotes, characters in
///   single quotes, `f32` values with an `f` suffix;
/// - sequences as `[a, b]`, or one element per line when the single-line
///   form exceeds
///   [`max_length_for_single_line_description`](RepresentationLimits::max_length_for_single_line_description);
/// - sequences and maps longer than
///   [`max_elements_for_printing`](RepresentationLimits::max_elements_for_printing)
///   are truncated around `...`;
/// - maps as `{k=v, ...}`, sorted by key when the keys are comparable;
/// - objects through a registered custom formatter, or their handler.
///
/// # Examples
///
/// ```rust
/// use shouldbe::{prelude::*, value::Value};
///
/// struct Jedi(&'static str);
///
/// let representation = StandardRepresentation::new()
///     .with_formatter(|jedi: &Jedi| format!("Master {}", jedi.0));
///
/// let jedis = Value::seq([Value::object::<_, shouldbe::handlers::Any>(Jedi("Yoda"))]);
/// assert_eq!(representation.to_string_of(&jedis), "[Master Yoda]");
/// ```
#[derive(Clone, Debug, Default)]
pub struct StandardRepresentation {
    limits: RepresentationLimits,
    formatters: FormatterMap,
}

impl StandardRepresentation {
    /// A representation with the default limits and no custom formatters.
    pub fn new() -> Self {
        Self::default()
    }

    /// A representation with the given limits.
    pub fn with_limits(limits: RepresentationLimits) -> Result<Self, ConfigError> {
        Ok(Self {
            limits: limits.validate()?,
            formatters: FormatterMap::default(),
        })
    }

    /// The limits in use.
    pub fn limits(&self) -> RepresentationLimits {
        self.limits
    }

    /// Registers a formatter for objects of type `T`, replacing any
    /// formatter previously registered for that type.
    pub fn register_formatter<T, F>(&mut self, formatter: F)
    where
        T: 'static,
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.formatters.insert::<T, F>(formatter);
    }

    /// Builder form of [`register_formatter`](Self::register_formatter).
    pub fn with_formatter<T, F>(mut self, formatter: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.register_formatter(formatter);
        self
    }

    /// Whether a custom formatter applies to `value`.
    pub fn has_custom_formatter_for(&self, value: &Value) -> bool {
        match value {
            Value::Object(object) => self.formatters.contains(object.type_id()),
            _ => false,
        }
    }

    /// Whether a custom formatter is registered for the type `T`.
    pub fn has_formatter_for<T: 'static>(&self) -> bool {
        self.formatters.contains(TypeId::of::<T>())
    }

    /// Drops every registered custom formatter.
    pub fn remove_all_registered_formatters(&mut self) {
        self.formatters.clear();
    }

    /// Renders `value`, using `outer` for nested values so wrapping
    /// representations apply inside collections too.
    pub(crate) fn render(&self, value: &Value, outer: &dyn Representation) -> String {
        match value {
            Value::Null => String::from("null"),
            Value::Bool(b) => b.to_string(),
            Value::Char(c) => format!("'{c}'"),
            Value::Number(Number::F32(v)) => format!("{v:?}f"),
            Value::Number(n) => n.to_string(),
            Value::Str(s) => format!("\"{s}\""),
            Value::Unquoted(s) => s.clone(),
            Value::Seq(items) => self.smart_format(items, outer),
            Value::Tuple(items) => {
                let rendered: Vec<String> =
                    items.iter().map(|item| outer.to_string_of(item)).collect();
                join(&rendered, ELEMENT_SEPARATOR, "(", ")")
            }
            Value::Map(entries) => self.format_map(entries, outer),
            Value::Entry(entry) => {
                let (key, value) = &**entry;
                format!("{}={}", outer.to_string_of(key), outer.to_string_of(value))
            }
            Value::Predicate(predicate) if predicate.is_default() => {
                predicate.description().to_string()
            }
            Value::Predicate(predicate) => format!("'{}'", predicate.description()),
            Value::Strategy(strategy) => strategy.comparator_description(),
            Value::Duration(duration) => duration_to_string(*duration),
            Value::Error(error) => self.format_error(error),
            Value::Object(object) => self
                .formatters
                .format(object.type_id(), object.as_any())
                .unwrap_or_else(|| object.to_string()),
        }
    }

    fn smart_format(&self, items: &[Value], outer: &dyn Representation) -> String {
        let rendered = self.printable_elements(items, outer);
        let single_line = join(&rendered, ELEMENT_SEPARATOR, "[", "]");
        if single_line.chars().count() <= self.limits.max_length_for_single_line_description {
            return single_line;
        }
        let mut separator = String::from(ELEMENT_SEPARATOR_WITH_NEWLINE);
        separator.push_str(INDENTATION_FOR_MULTI_LINE_FORMAT);
        join(&rendered, &separator, "[", "]")
    }

    /// Renders the elements to print: all of them, or the first and last
    /// halves around a `...` marker when there are too many.
    fn printable_elements(&self, items: &[Value], outer: &dyn Representation) -> Vec<String> {
        let max = self.limits.max_elements_for_printing;
        if items.len() <= max {
            return items.iter().map(|item| outer.to_string_of(item)).collect();
        }
        let head = max.div_ceil(2);
        let tail = max / 2;
        let mut rendered: Vec<String> = Vec::with_capacity(max + 1);
        rendered.extend(items[..head].iter().map(|item| outer.to_string_of(item)));
        rendered.push(String::from(MAX_ELEMENTS_EXCEEDED));
        rendered.extend(
            items[items.len() - tail..]
                .iter()
                .map(|item| outer.to_string_of(item)),
        );
        rendered
    }

    fn format_map(&self, entries: &[(Value, Value)], outer: &dyn Representation) -> String {
        let mut sorted: Vec<&(Value, Value)> = entries.iter().collect();
        let sortable = sorted
            .windows(2)
            .all(|pair| pair[0].0.natural_cmp(&pair[1].0).is_some());
        if sortable {
            sorted.sort_by(|a, b| a.0.natural_cmp(&b.0).unwrap_or(Ordering::Equal));
        }

        let max = self.limits.max_elements_for_printing;
        let mut out = String::from("{");
        for (index, (key, value)) in sorted.iter().take(max).enumerate() {
            if index > 0 {
                out.push_str(ELEMENT_SEPARATOR);
            }
            let _ = write!(out, "{}={}", outer.to_string_of(key), outer.to_string_of(value));
        }
        if sorted.len() > max {
            out.push_str(ELEMENT_SEPARATOR);
            out.push_str(MAX_ELEMENTS_EXCEEDED);
        }
        out.push('}');
        out
    }

    fn format_error(&self, error: &ErrorValue) -> String {
        let mut out = if error.message().is_empty() {
            String::from(error.type_name())
        } else {
            format!("{}: {}", error.type_name(), error.message())
        };

        let max = self.limits.max_stack_trace_elements_displayed;
        let frames = error.frames();
        if max == 0 {
            return out;
        }
        for frame in frames.iter().take(max) {
            let _ = write!(out, "\n\tat {frame}");
        }
        if frames.len() > max {
            let _ = write!(
                out,
                "\n\t...({} remaining lines not displayed - this can be changed with max_stack_trace_elements_displayed)",
                frames.len() - max
            );
        }
        out
    }
}

impl Representation for StandardRepresentation {
    fn to_string_of(&self, value: &Value) -> String {
        self.render(value, self)
    }
}

fn join(items: &[String], separator: &str, start: &str, end: &str) -> String {
    let mut out = String::from(start);
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push_str(separator);
        }
        out.push_str(item);
    }
    out.push_str(end);
    out
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::value::{PredicateDescription, unquoted};

    fn render(value: impl Into<Value>) -> String {
        StandardRepresentation::new().to_string_of(&value.into())
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render(Value::Null), "null");
        assert_eq!(render("abc"), "\"abc\"");
        assert_eq!(render('a'), "'a'");
        assert_eq!(render(1.5f32), "1.5f");
        assert_eq!(render(1.5f64), "1.5");
        assert_eq!(render(42u64), "42");
        assert_eq!(render(unquoted("abc")), "abc");
    }

    #[test]
    fn test_predicates() {
        assert_eq!(render(PredicateDescription::GIVEN), "given");
        assert_eq!(render(PredicateDescription::new("even")), "'even'");
    }

    #[test]
    fn test_tuple_stays_on_one_line() {
        let long = "x".repeat(100);
        let rendered = render((long.clone(), 1));
        assert_eq!(rendered, format!("(\"{long}\", 1)"));
    }

    #[test]
    fn test_truncation_keeps_head_and_tail() {
        let limits = RepresentationLimits {
            max_elements_for_printing: 3,
            ..RepresentationLimits::DEFAULT
        };
        let representation = StandardRepresentation::with_limits(limits).unwrap();
        let value = Value::from(vec![1, 2, 3, 4, 5]);
        assert_eq!(representation.to_string_of(&value), "[1, 2, ..., 5]");
    }

    #[test]
    fn test_error_with_frames() {
        let limits = RepresentationLimits {
            max_stack_trace_elements_displayed: 1,
            ..RepresentationLimits::DEFAULT
        };
        let representation = StandardRepresentation::with_limits(limits).unwrap();
        let error = ErrorValue::from_parts("IoError", "disk full").with_frames(["a", "b"]);
        assert_eq!(
            representation.to_string_of(&error.into()),
            "IoError: disk full\n\tat a\n\t...(1 remaining lines not displayed - this can be changed with max_stack_trace_elements_displayed)"
        );
    }

    static_assertions::assert_impl_all!(StandardRepresentation: Send, Sync, Clone);
}
