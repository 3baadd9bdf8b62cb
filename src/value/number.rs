use core::{cmp::Ordering, fmt, mem::size_of};

/// A primitive number, tagged with the Rust type it came from.
///
/// Keeping the original type around matters for two things: the
/// hexadecimal and binary representations pad to the type's byte width, and
/// the unambiguous rendering of equal-looking values (`42` vs `42.0`) names
/// the type.
#[derive(Copy, Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
}

enum Key {
    Signed(i128),
    Unsigned(u128),
    Float(f64),
}

impl Number {
    /// The name of the Rust type holding this number.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Number::I8(_) => "i8",
            Number::I16(_) => "i16",
            Number::I32(_) => "i32",
            Number::I64(_) => "i64",
            Number::I128(_) => "i128",
            Number::Isize(_) => "isize",
            Number::U8(_) => "u8",
            Number::U16(_) => "u16",
            Number::U32(_) => "u32",
            Number::U64(_) => "u64",
            Number::U128(_) => "u128",
            Number::Usize(_) => "usize",
            Number::F32(_) => "f32",
            Number::F64(_) => "f64",
        }
    }

    /// Size of the underlying type in bytes.
    pub const fn byte_width(&self) -> usize {
        match self {
            Number::I8(_) | Number::U8(_) => 1,
            Number::I16(_) | Number::U16(_) => 2,
            Number::I32(_) | Number::U32(_) | Number::F32(_) => 4,
            Number::I64(_) | Number::U64(_) | Number::F64(_) => 8,
            Number::I128(_) | Number::U128(_) => 16,
            Number::Isize(_) => size_of::<isize>(),
            Number::Usize(_) => size_of::<usize>(),
        }
    }

    /// The raw bit pattern of the number, zero-extended to 128 bits.
    ///
    /// Signed integers yield their two's complement pattern at their own
    /// width, floats their IEEE 754 bits.
    pub const fn bits(&self) -> u128 {
        match *self {
            Number::I8(v) => v as u8 as u128,
            Number::I16(v) => v as u16 as u128,
            Number::I32(v) => v as u32 as u128,
            Number::I64(v) => v as u64 as u128,
            Number::I128(v) => v as u128,
            Number::Isize(v) => v as usize as u128,
            Number::U8(v) => v as u128,
            Number::U16(v) => v as u128,
            Number::U32(v) => v as u128,
            Number::U64(v) => v as u128,
            Number::U128(v) => v,
            Number::Usize(v) => v as u128,
            Number::F32(v) => v.to_bits() as u128,
            Number::F64(v) => v.to_bits() as u128,
        }
    }

    /// Whether this is a floating point number.
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::F32(_) | Number::F64(_))
    }

    fn key(&self) -> Key {
        match *self {
            Number::I8(v) => Key::Signed(v.into()),
            Number::I16(v) => Key::Signed(v.into()),
            Number::I32(v) => Key::Signed(v.into()),
            Number::I64(v) => Key::Signed(v.into()),
            Number::I128(v) => Key::Signed(v),
            Number::Isize(v) => Key::Signed(v as i128),
            Number::U8(v) => Key::Unsigned(v.into()),
            Number::U16(v) => Key::Unsigned(v.into()),
            Number::U32(v) => Key::Unsigned(v.into()),
            Number::U64(v) => Key::Unsigned(v.into()),
            Number::U128(v) => Key::Unsigned(v),
            Number::Usize(v) => Key::Unsigned(v as u128),
            Number::F32(v) => Key::Float(v.into()),
            Number::F64(v) => Key::Float(v),
        }
    }

    /// Compares two numbers by value, regardless of their types.
    ///
    /// Returns `None` only when a NaN is involved.
    pub fn natural_cmp(&self, other: &Number) -> Option<Ordering> {
        match (self.key(), other.key()) {
            (Key::Signed(a), Key::Signed(b)) => Some(a.cmp(&b)),
            (Key::Unsigned(a), Key::Unsigned(b)) => Some(a.cmp(&b)),
            (Key::Signed(a), Key::Unsigned(b)) => Some(match u128::try_from(a) {
                Ok(a) => a.cmp(&b),
                Err(_) => Ordering::Less,
            }),
            (Key::Unsigned(a), Key::Signed(b)) => Some(match u128::try_from(b) {
                Ok(b) => a.cmp(&b),
                Err(_) => Ordering::Greater,
            }),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl Key {
    fn as_f64(&self) -> f64 {
        match *self {
            Key::Signed(v) => v as f64,
            Key::Unsigned(v) => v as f64,
            Key::Float(v) => v,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I8(v) => fmt::Display::fmt(v, f),
            Number::I16(v) => fmt::Display::fmt(v, f),
            Number::I32(v) => fmt::Display::fmt(v, f),
            Number::I64(v) => fmt::Display::fmt(v, f),
            Number::I128(v) => fmt::Display::fmt(v, f),
            Number::Isize(v) => fmt::Display::fmt(v, f),
            Number::U8(v) => fmt::Display::fmt(v, f),
            Number::U16(v) => fmt::Display::fmt(v, f),
            Number::U32(v) => fmt::Display::fmt(v, f),
            Number::U64(v) => fmt::Display::fmt(v, f),
            Number::U128(v) => fmt::Display::fmt(v, f),
            Number::Usize(v) => fmt::Display::fmt(v, f),
            // Debug keeps the fractional part: `1.0` rather than `1`.
            Number::F32(v) => fmt::Debug::fmt(v, f),
            Number::F64(v) => fmt::Debug::fmt(v, f),
        }
    }
}

macro_rules! number_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::$variant(value)
                }
            }
        )*
    };
}

number_from! {
    i8 => I8, i16 => I16, i32 => I32, i64 => I64, i128 => I128, isize => Isize,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64, u128 => U128, usize => Usize,
    f32 => F32, f64 => F64,
}
