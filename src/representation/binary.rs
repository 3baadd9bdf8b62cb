use alloc::{format, string::String, vec::Vec};

use super::{Representation, StandardRepresentation, hexadecimal::char_width};
use crate::value::Value;

/// Renders numbers and characters in binary, one group of eight digits
/// per byte: `0b00000011` for a `u8`,
/// `0b00000000_00000000_00000000_00000011` for an `i32`.
///
/// Characters render as `'0b00000000_01100001'`, strings as the list of
/// their characters; other values as the wrapped
/// [`StandardRepresentation`] does.
#[derive(Clone, Debug, Default)]
pub struct BinaryRepresentation {
    standard: StandardRepresentation,
}

impl BinaryRepresentation {
    /// Wraps a default [`StandardRepresentation`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the given standard representation.
    pub fn wrapping(standard: StandardRepresentation) -> Self {
        Self { standard }
    }
}

impl Representation for BinaryRepresentation {
    fn to_string_of(&self, value: &Value) -> String {
        if self.standard.has_custom_formatter_for(value) {
            return self.standard.render(value, self);
        }
        match value {
            Value::Number(number) => format!("0b{}", grouped_binary(number.bits(), number.byte_width())),
            Value::Char(c) => format!("'0b{}'", grouped_binary(u32::from(*c).into(), char_width(*c))),
            Value::Str(s) => {
                let chars: Vec<Value> = s.chars().map(Value::Char).collect();
                self.standard.render(&Value::Seq(chars), self)
            }
            _ => self.standard.render(value, self),
        }
    }
}

fn grouped_binary(bits: u128, byte_width: usize) -> String {
    let mut out = String::with_capacity(byte_width * 9);
    for byte_index in (0..byte_width).rev() {
        let byte = (bits >> (byte_index * 8)) as u8;
        if !out.is_empty() {
            out.push('_');
        }
        out.push_str(&format!("{byte:08b}"));
    }
    out
}
