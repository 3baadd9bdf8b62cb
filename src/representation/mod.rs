//! Strategies that turn [`Value`]s into the text shown in error messages.
//!
//! # Quick Start
//!
//! ```rust
//! use shouldbe::prelude::*;
//!
//! let representation = StandardRepresentation::new();
//! assert_eq!(representation.to_string_of(&"Yoda".into()), "\"Yoda\"");
//! assert_eq!(representation.to_string_of(&vec![1, 2].into()), "[1, 2]");
//! assert_eq!(representation.to_string_of(&1.5f32.into()), "1.5f");
//!
//! let hex = HexadecimalRepresentation::new();
//! assert_eq!(hex.to_string_of(&3u16.into()), "0x0003");
//! ```
//!
//! # Built-in Representations
//!
//! - [`StandardRepresentation`]: quotes text, formats collections on one or
//!   several lines depending on their length, truncates very long ones.
//! - [`HexadecimalRepresentation`]: numbers and characters in grouped
//!   hexadecimal, everything else as the standard representation does.
//! - [`BinaryRepresentation`]: numbers and characters in grouped binary.
//!
//! Custom formatters can be registered per Rust type on a
//! [`StandardRepresentation`]; they apply to objects wrapped with
//! [`Value::display`], [`Value::debug`] or [`Value::object`], including
//! when those objects appear inside collections.

mod binary;
mod formatters;
mod hexadecimal;
mod standard;

use alloc::{format, string::String};
use core::{fmt::Write as _, time::Duration};

pub use self::{
    binary::BinaryRepresentation, hexadecimal::HexadecimalRepresentation,
    standard::StandardRepresentation,
};
pub(crate) use self::formatters::FormatterMap;
use crate::{config::ConfigError, value::Value};

/// Converts values to the text displayed in error messages.
pub trait Representation: Send + Sync + 'static {
    /// Renders `value`.
    fn to_string_of(&self, value: &Value) -> String;

    /// Renders `value` so it can be told apart from a different value with
    /// the same rendering, by appending its type: `42 (i32)`.
    fn unambiguous_to_string_of(&self, value: &Value) -> String {
        format!("{} ({})", self.to_string_of(value), value.type_name())
    }

    /// Name of the representation, as listed by
    /// [`Configuration::describe`](crate::config::Configuration::describe).
    fn name(&self) -> &'static str {
        crate::value::short_type_name(core::any::type_name::<Self>())
    }
}

impl<R: Representation + ?Sized> Representation for alloc::sync::Arc<R> {
    fn to_string_of(&self, value: &Value) -> String {
        (**self).to_string_of(value)
    }

    fn unambiguous_to_string_of(&self, value: &Value) -> String {
        (**self).unambiguous_to_string_of(value)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Limits applied when rendering collections and errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RepresentationLimits {
    /// Collections whose single-line rendering is longer than this are
    /// rendered one element per line.
    pub max_length_for_single_line_description: usize,
    /// Collections with more elements than this are truncated around a
    /// `...` marker.
    pub max_elements_for_printing: usize,
    /// Number of stack frames shown when an error is rendered. Zero hides
    /// frames entirely.
    pub max_stack_trace_elements_displayed: usize,
}

impl RepresentationLimits {
    /// Default limits: 80 characters, 1000 elements, 3 stack frames.
    pub const DEFAULT: Self = Self {
        max_length_for_single_line_description: 80,
        max_elements_for_printing: 1000,
        max_stack_trace_elements_displayed: 3,
    };

    /// Checks that the collection limits are positive.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.max_length_for_single_line_description == 0 {
            return Err(ConfigError::NonPositiveLimit {
                name: "max_length_for_single_line_description",
            });
        }
        if self.max_elements_for_printing == 0 {
            return Err(ConfigError::NonPositiveLimit {
                name: "max_elements_for_printing",
            });
        }
        Ok(self)
    }
}

impl Default for RepresentationLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Renders a duration as `8h6m12.345s`, `1m`, `0.5s` or `0s`.
pub(crate) fn duration_to_string(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let nanos = duration.subsec_nanos();
    if total_seconds == 0 && nanos == 0 {
        return String::from("0s");
    }

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut out = String::new();
    if hours != 0 {
        let _ = write!(out, "{hours}h");
    }
    if minutes != 0 {
        let _ = write!(out, "{minutes}m");
    }
    if seconds == 0 && nanos == 0 {
        return out;
    }
    let _ = write!(out, "{seconds}");
    if nanos > 0 {
        let fraction = format!("{nanos:09}");
        let _ = write!(out, ".{}", fraction.trim_end_matches('0'));
    }
    out.push('s');
    out
}
