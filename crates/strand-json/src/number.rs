//! Numeric codec shared by the parser and the serializer.
//!
//! Formatting goes through `itoa` for the integer variants and `ryu` for
//! floats; ryu emits the shortest decimal text that parses back to the
//! exact same double, which is what makes `text_to_float(float_to_text(d))
//! == d` hold bit-for-bit. Decoding goes through `str::parse::<f64>`,
//! which is correctly rounded for every valid JSON number literal,
//! including subnormals and values that overflow to infinity.

use crate::error::{JsonError, Result};
use crate::value::Value;

/// Append a signed integer in its canonical decimal form.
pub fn write_integer(out: &mut String, value: i64) {
    let mut buf = itoa::Buffer::new();
    out.push_str(buf.format(value));
}

/// Append an unsigned integer in its canonical decimal form.
pub fn write_unsigned(out: &mut String, value: u64) {
    let mut buf = itoa::Buffer::new();
    out.push_str(buf.format(value));
}

/// Append a float as the shortest text that round-trips to the same bits.
///
/// The output always contains a `.` or an exponent, so a re-parse yields
/// the `Float` variant again rather than an integer. NaN and infinities
/// have no JSON representation and fail with [`JsonError::NonFiniteNumber`].
pub fn write_float(out: &mut String, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(JsonError::NonFiniteNumber(value));
    }
    let mut buf = ryu::Buffer::new();
    out.push_str(buf.format_finite(value));
    Ok(())
}

/// Correctly rounded conversion from a valid JSON number literal to the
/// nearest representable double.
pub fn text_to_float(literal: &str) -> f64 {
    // The parser has already validated the grammar, and every valid JSON
    // number literal is a valid Rust float literal.
    literal.parse::<f64>().unwrap_or(f64::NAN)
}

/// Pick the numeric variant for a validated number literal.
///
/// The textual form decides: a `.` or exponent means `Float`. Otherwise a
/// leading `-` selects `Integer` and an unsigned form selects `Unsigned`,
/// falling back to `Float` when the literal does not fit in 64 bits
/// (overflow promotion — the value becomes the nearest double rather than
/// an error or a truncation).
pub fn classify(literal: &str, has_fraction_or_exponent: bool) -> Value {
    if has_fraction_or_exponent {
        return Value::Float(text_to_float(literal));
    }
    if literal.starts_with('-') {
        match literal.parse::<i64>() {
            Ok(i) => Value::Integer(i),
            Err(_) => Value::Float(text_to_float(literal)),
        }
    } else {
        match literal.parse::<u64>() {
            Ok(u) => Value::Unsigned(u),
            Err(_) => Value::Float(text_to_float(literal)),
        }
    }
}
