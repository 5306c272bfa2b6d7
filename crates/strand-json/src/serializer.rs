//! JSON serializer with compact and indented output modes.
//!
//! Compact mode emits no inter-token whitespace. Indented mode lays out
//! one element per line with a fixed number of spaces per depth level and
//! `": "` after object keys; a width of zero is legal and produces
//! newline-separated but non-indented output. Empty containers collapse
//! to `[]` / `{}` in both modes.
//!
//! Output for a given [`Value`] is deterministic: object fields are
//! written in insertion order and numbers go through the shared codec in
//! [`crate::number`], so serializing the same tree twice yields
//! byte-identical text.
//!
//! Non-finite floats (NaN, ±infinity) have no JSON representation; the
//! serializer fails fast with [`crate::JsonError::NonFiniteNumber`]
//! rather than emitting invalid text or silently substituting `null`.

use std::io::Write;

use crate::error::Result;
use crate::number;
use crate::value::Value;

/// Serialize a value to compact JSON text.
pub fn dump(value: &Value) -> Result<String> {
    let mut writer = Serializer::new(None);
    writer.write_value(value, 0)?;
    Ok(writer.out)
}

/// Serialize a value with `width` spaces of indentation per depth level.
pub fn dump_indented(value: &Value, width: usize) -> Result<String> {
    let mut writer = Serializer::new(Some(width));
    writer.write_value(value, 0)?;
    Ok(writer.out)
}

/// Serialize into a caller-supplied stream. `indent` selects the mode as
/// in [`dump`] / [`dump_indented`].
pub fn dump_to_writer(value: &Value, indent: Option<usize>, mut out: impl Write) -> Result<()> {
    let mut writer = Serializer::new(indent);
    writer.write_value(value, 0)?;
    out.write_all(writer.out.as_bytes())?;
    Ok(())
}

struct Serializer {
    out: String,
    indent: Option<usize>,
}

impl Serializer {
    fn new(indent: Option<usize>) -> Self {
        Serializer {
            out: String::new(),
            indent,
        }
    }

    fn write_value(&mut self, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Integer(i) => number::write_integer(&mut self.out, *i),
            Value::Unsigned(u) => number::write_unsigned(&mut self.out, *u),
            Value::Float(f) => number::write_float(&mut self.out, *f)?,
            Value::String(s) => self.write_string(s),
            Value::Array(items) => self.write_array(items, depth)?,
            Value::Object(map) => self.write_object(map, depth)?,
        }
        Ok(())
    }

    fn write_array(&mut self, items: &[Value], depth: usize) -> Result<()> {
        if items.is_empty() {
            self.out.push_str("[]");
            return Ok(());
        }
        self.out.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline_and_indent(depth + 1);
            self.write_value(item, depth + 1)?;
        }
        self.newline_and_indent(depth);
        self.out.push(']');
        Ok(())
    }

    fn write_object(&mut self, map: &crate::value::Map, depth: usize) -> Result<()> {
        if map.is_empty() {
            self.out.push_str("{}");
            return Ok(());
        }
        self.out.push('{');
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline_and_indent(depth + 1);
            self.write_string(key);
            self.out.push(':');
            if self.indent.is_some() {
                self.out.push(' ');
            }
            self.write_value(value, depth + 1)?;
        }
        self.newline_and_indent(depth);
        self.out.push('}');
        Ok(())
    }

    /// In indented mode, start a new line and indent to `depth`.
    /// No-op in compact mode.
    fn newline_and_indent(&mut self, depth: usize) {
        if let Some(width) = self.indent {
            self.out.push('\n');
            for _ in 0..depth * width {
                self.out.push(' ');
            }
        }
    }

    /// Write a quoted, escaped string. The escape set mirrors what the
    /// parser accepts: `\" \\ \b \f \n \r \t`, other control bytes as
    /// `\u00XX`. Non-ASCII passes through as raw UTF-8 and `/` is not
    /// escaped.
    fn write_string(&mut self, s: &str) {
        self.out.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\u{0008}' => self.out.push_str("\\b"),
                '\u{000C}' => self.out.push_str("\\f"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                ch if (ch as u32) < 0x20 => {
                    self.out.push_str(&format!("\\u{:04x}", ch as u32));
                }
                ch => self.out.push(ch),
            }
        }
        self.out.push('"');
    }
}
