//! Recursive-descent JSON parser.
//!
//! Parses RFC 8259 text into a [`Value`] tree with one byte of lookahead.
//! Every error carries the byte offset where parsing stopped plus a
//! human-readable expectation, so malformed input can be pinpointed
//! exactly ("expected ',' or ']'").
//!
//! # Key design decisions
//!
//! - **Explicit depth counter**: each `[` or `{` entered bumps a counter
//!   checked against a configurable limit (default
//!   [`DEFAULT_MAX_DEPTH`]). Adversarial deeply-nested input fails with
//!   [`JsonError::DepthExceeded`] instead of exhausting the stack.
//! - **Whole-input consumption**: trailing non-whitespace after the root
//!   value is an error; a successful parse accounts for every byte.
//! - **Duplicate keys**: last write wins, and the key keeps the position
//!   of its first occurrence, so serialization order stays deterministic.
//! - **No partial results**: a failed parse yields only the error, never
//!   a half-populated tree.

use std::io::Read;

use crate::error::{JsonError, Result};
use crate::number;
use crate::value::{Map, Value};

/// Default nesting depth limit. Deep enough for any sane document,
/// shallow enough that recursion stays well inside the thread stack.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parse a complete JSON document from text.
pub fn parse(text: &str) -> Result<Value> {
    parse_with_limit(text, DEFAULT_MAX_DEPTH)
}

/// Parse with a caller-chosen nesting depth limit.
pub fn parse_with_limit(text: &str, max_depth: usize) -> Result<Value> {
    Parser::new(text, max_depth).parse_document()
}

/// Parse a raw byte stream, validating UTF-8 first.
pub fn parse_bytes(bytes: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(bytes).map_err(|e| JsonError::InvalidUtf8 {
        offset: e.valid_up_to(),
    })?;
    parse(text)
}

/// Read a caller-supplied stream to its end, then parse the contents.
pub fn parse_reader(mut reader: impl Read) -> Result<Value> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    parse_bytes(&buf)
}

struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, max_depth: usize) -> Self {
        Parser {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Parse one value and require that nothing but whitespace follows.
    fn parse_document(&mut self) -> Result<Value> {
        self.skip_whitespace();
        let value = self.parse_value()?;
        self.skip_whitespace();
        if self.pos < self.bytes.len() {
            return Err(self.err("end of input"));
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.peek() {
            Some(b'n') => self.parse_keyword("null", Value::Null),
            Some(b't') => self.parse_keyword("true", Value::Bool(true)),
            Some(b'f') => self.parse_keyword("false", Value::Bool(false)),
            Some(b'"') => Ok(Value::String(self.parse_string()?)),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(b'-') | Some(b'0'..=b'9') => self.parse_number(),
            _ => Err(self.err("a JSON value")),
        }
    }

    /// Match an exact literal keyword (`null`, `true`, `false`).
    fn parse_keyword(&mut self, keyword: &'static str, value: Value) -> Result<Value> {
        if self.bytes[self.pos..].starts_with(keyword.as_bytes()) {
            self.pos += keyword.len();
            Ok(value)
        } else {
            Err(self.err("a JSON value"))
        }
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter_container()?;
        self.pos += 1; // consume '['
        self.skip_whitespace();

        let mut items = Vec::new();
        if self.peek() == Some(b']') {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                _ => return Err(self.err("',' or ']'")),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter_container()?;
        self.pos += 1; // consume '{'
        self.skip_whitespace();

        let mut map = Map::new();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Object(map));
        }

        loop {
            if self.peek() != Some(b'"') {
                return Err(self.err("a string key"));
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.err("':'"));
            }
            self.pos += 1;
            self.skip_whitespace();
            let value = self.parse_value()?;
            // Duplicate keys: last write wins, first-seen position kept.
            map.insert(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b'}') => {
                    self.pos += 1;
                    break;
                }
                _ => return Err(self.err("',' or '}'")),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    /// Parse a string literal, unescaping as it goes. Assumes the cursor
    /// is on the opening quote.
    fn parse_string(&mut self) -> Result<String> {
        self.pos += 1; // consume '"'
        let mut out = String::new();
        let mut segment_start = self.pos;

        loop {
            match self.peek() {
                None => return Err(self.err("closing '\"'")),
                Some(b'"') => {
                    out.push_str(&self.input[segment_start..self.pos]);
                    self.pos += 1;
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(&self.input[segment_start..self.pos]);
                    self.pos += 1;
                    self.parse_escape(&mut out)?;
                    segment_start = self.pos;
                }
                Some(byte) if byte < 0x20 => {
                    return Err(JsonError::Parse {
                        offset: self.pos,
                        expected: "an escaped control character",
                        found: format!("control character 0x{byte:02X}"),
                    });
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    /// Parse the escape following a backslash and append the decoded
    /// character.
    fn parse_escape(&mut self, out: &mut String) -> Result<()> {
        let byte = match self.peek() {
            Some(b) => b,
            None => return Err(self.err("an escape sequence")),
        };
        self.pos += 1;
        match byte {
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'/' => out.push('/'),
            b'b' => out.push('\u{0008}'),
            b'f' => out.push('\u{000C}'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            b'u' => {
                let ch = self.parse_unicode_escape()?;
                out.push(ch);
            }
            _ => {
                self.pos -= 1;
                return Err(self.err("a valid escape sequence"));
            }
        }
        Ok(())
    }

    /// Parse the `XXXX` of a `\uXXXX` escape, combining surrogate pairs
    /// into a single code point.
    fn parse_unicode_escape(&mut self) -> Result<char> {
        let unit = self.parse_hex4()?;

        // High surrogate: a low surrogate escape must follow.
        if (0xD800..=0xDBFF).contains(&unit) {
            if self.peek() != Some(b'\\') || self.bytes.get(self.pos + 1) != Some(&b'u') {
                return Err(self.err("a low surrogate escape"));
            }
            self.pos += 2;
            let low = self.parse_hex4()?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(JsonError::Parse {
                    offset: self.pos - 4,
                    expected: "a low surrogate",
                    found: format!("\\u{low:04X}"),
                });
            }
            let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
            return char::from_u32(code).ok_or_else(|| self.err("a valid code point"));
        }

        // A low surrogate with no preceding high surrogate is invalid.
        if (0xDC00..=0xDFFF).contains(&unit) {
            return Err(JsonError::Parse {
                offset: self.pos - 4,
                expected: "a high surrogate before a low surrogate",
                found: format!("\\u{unit:04X}"),
            });
        }

        char::from_u32(unit).ok_or_else(|| self.err("a valid code point"))
    }

    /// Read exactly four hex digits.
    fn parse_hex4(&mut self) -> Result<u32> {
        let mut value = 0u32;
        for _ in 0..4 {
            let digit = match self.peek().and_then(|b| (b as char).to_digit(16)) {
                Some(d) => d,
                None => return Err(self.err("a hex digit")),
            };
            value = value * 16 + digit;
            self.pos += 1;
        }
        Ok(value)
    }

    /// Parse a number literal and classify it into the right variant.
    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        let mut has_fraction_or_exponent = false;

        if self.peek() == Some(b'-') {
            self.pos += 1;
        }

        // Integer part: '0' alone, or a nonzero-led digit run.
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                if matches!(self.peek(), Some(b'0'..=b'9')) {
                    return Err(self.err("no digit after a leading zero"));
                }
            }
            Some(b'1'..=b'9') => {
                self.skip_digits();
            }
            _ => return Err(self.err("a digit")),
        }

        // Fractional part.
        if self.peek() == Some(b'.') {
            self.pos += 1;
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(self.err("a digit in the fraction"));
            }
            self.skip_digits();
            has_fraction_or_exponent = true;
        }

        // Exponent part.
        if matches!(self.peek(), Some(b'e') | Some(b'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some(b'+') | Some(b'-')) {
                self.pos += 1;
            }
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(self.err("a digit in the exponent"));
            }
            self.skip_digits();
            has_fraction_or_exponent = true;
        }

        Ok(number::classify(
            &self.input[start..self.pos],
            has_fraction_or_exponent,
        ))
    }

    fn skip_digits(&mut self) {
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r')) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Bump the depth counter on container entry, enforcing the limit.
    fn enter_container(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(JsonError::DepthExceeded {
                offset: self.pos,
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    /// Build a parse error at the current position, describing what was
    /// found there.
    fn err(&self, expected: &'static str) -> JsonError {
        let found = match self.input[self.pos..].chars().next() {
            Some(ch) => format!("'{ch}'"),
            None => "end of input".to_string(),
        };
        JsonError::Parse {
            offset: self.pos,
            expected,
            found,
        }
    }
}
