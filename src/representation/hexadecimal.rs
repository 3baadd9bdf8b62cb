use alloc::{format, string::String, vec::Vec};

use super::{Representation, StandardRepresentation};
use crate::value::Value;

/// Renders numbers and characters in hexadecimal.
///
/// Numbers are zero-padded to the byte width of their type, in upper case,
/// grouped by four digits: `0x03` for a `u8`, `0x0000_0003` for an `i32`.
/// Floats show their bit pattern. Characters render as `'0x0061'` and
/// strings as the list of their characters. Other values render as the
/// wrapped [`StandardRepresentation`] does, with this representation
/// applied to their elements.
///
/// # Examples
///
/// ```rust
/// use shouldbe::prelude::*;
///
/// let hex = HexadecimalRepresentation::new();
/// assert_eq!(hex.to_string_of(&3i32.into()), "0x0000_0003");
/// assert_eq!(hex.to_string_of(&"ab".into()), "['0x0061', '0x0062']");
/// assert_eq!(hex.to_string_of(&vec![1u8, 255].into()), "[0x01, 0xFF]");
/// ```
#[derive(Clone, Debug, Default)]
pub struct HexadecimalRepresentation {
    standard: StandardRepresentation,
}

impl HexadecimalRepresentation {
    /// Wraps a default [`StandardRepresentation`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the given standard representation, keeping its limits and
    /// custom formatters.
    pub fn wrapping(standard: StandardRepresentation) -> Self {
        Self { standard }
    }
}

impl Representation for HexadecimalRepresentation {
    fn to_string_of(&self, value: &Value) -> String {
        if self.standard.has_custom_formatter_for(value) {
            return self.standard.render(value, self);
        }
        match value {
            Value::Number(number) => format!("0x{}", grouped_hex(number.bits(), number.byte_width())),
            Value::Char(c) => format!("'0x{}'", grouped_hex(u32::from(*c).into(), char_width(*c))),
            Value::Str(s) => {
                let chars: Vec<Value> = s.chars().map(Value::Char).collect();
                self.standard.render(&Value::Seq(chars), self)
            }
            _ => self.standard.render(value, self),
        }
    }
}

/// Characters outside the basic multilingual plane need four bytes.
pub(super) fn char_width(c: char) -> usize {
    if u32::from(c) > 0xFFFF { 4 } else { 2 }
}

fn grouped_hex(bits: u128, byte_width: usize) -> String {
    let digits = format!("{bits:0width$X}", width = byte_width * 2);
    let mut out = String::with_capacity(digits.len() + digits.len() / 4);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && index % 4 == 0 {
            out.push('_');
        }
        out.push(digit);
    }
    out
}
