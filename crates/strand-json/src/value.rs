//! The in-memory JSON document model.
//!
//! [`Value`] is a closed sum type over the JSON value kinds, with integers
//! kept apart from floats (the textual form decides the variant at parse
//! time and is preserved until explicitly converted). Objects use
//! [`IndexMap`] so that serialization order matches insertion order —
//! serialization order is observable and must be deterministic.
//!
//! Containers exclusively own their children: every constructor takes
//! children by value, so the tree is acyclic by construction and a `Value`
//! is freed recursively when its owner drops it.

use std::fmt;

use indexmap::IndexMap;

use crate::error::{JsonError, Result};

/// Object representation: string keys to values, insertion order preserved.
pub type Map = IndexMap<String, Value>;

/// One JSON document or subtree.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// JSON `null`.
    #[default]
    Null,
    /// JSON `true` / `false`.
    Bool(bool),
    /// A number written without `.` or exponent and with a leading `-`.
    Integer(i64),
    /// A number written without `.`, exponent, or sign.
    Unsigned(u64),
    /// A number written with a `.` or an exponent, or an integer literal
    /// that overflowed 64 bits and was promoted to the nearest double.
    Float(f64),
    /// JSON string (owned UTF-8).
    String(String),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Key-value mapping, insertion order preserved.
    Object(Map),
}

/// Discriminant of a [`Value`], used in inspection and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Unsigned,
    Float,
    String,
    Array,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Unsigned => "unsigned integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

impl Value {
    /// The active variant's kind.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Integer(_) => ValueKind::Integer,
            Value::Unsigned(_) => ValueKind::Unsigned,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    fn mismatch(&self, expected: ValueKind) -> JsonError {
        JsonError::TypeMismatch {
            expected,
            actual: self.kind(),
        }
    }

    /// Returns true if this is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is any numeric variant.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Unsigned(_) | Value::Float(_))
    }

    /// Returns true if this is the signed-integer variant.
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Returns true if this is the unsigned-integer variant.
    pub fn is_unsigned(&self) -> bool {
        matches!(self, Value::Unsigned(_))
    }

    /// Returns true if this is the float variant.
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns true if this is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The boolean payload, or `TypeMismatch`.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch(ValueKind::Bool)),
        }
    }

    /// The value as a signed 64-bit integer.
    ///
    /// Accepts `Integer` directly and `Unsigned` when the value fits;
    /// anything else (including an out-of-range `Unsigned`) is a
    /// `TypeMismatch`.
    pub fn as_i64(&self) -> Result<i64> {
        match self {
            Value::Integer(i) => Ok(*i),
            Value::Unsigned(u) if *u <= i64::MAX as u64 => Ok(*u as i64),
            other => Err(other.mismatch(ValueKind::Integer)),
        }
    }

    /// The value as an unsigned 64-bit integer.
    ///
    /// Accepts `Unsigned` directly and non-negative `Integer`.
    pub fn as_u64(&self) -> Result<u64> {
        match self {
            Value::Unsigned(u) => Ok(*u),
            Value::Integer(i) if *i >= 0 => Ok(*i as u64),
            other => Err(other.mismatch(ValueKind::Unsigned)),
        }
    }

    /// The value as a double. Accepts all three numeric variants;
    /// integers above 2^53 lose precision in the usual way.
    pub fn as_f64(&self) -> Result<f64> {
        match self {
            Value::Float(f) => Ok(*f),
            Value::Integer(i) => Ok(*i as f64),
            Value::Unsigned(u) => Ok(*u as f64),
            other => Err(other.mismatch(ValueKind::Float)),
        }
    }

    /// The string payload, or `TypeMismatch`.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    /// The array payload, or `TypeMismatch`.
    pub fn as_array(&self) -> Result<&Vec<Value>> {
        match self {
            Value::Array(a) => Ok(a),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    /// Mutable array payload, or `TypeMismatch`.
    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self {
            Value::Array(a) => Ok(a),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    /// The object payload, or `TypeMismatch`.
    pub fn as_object(&self) -> Result<&Map> {
        match self {
            Value::Object(o) => Ok(o),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }

    /// Mutable object payload, or `TypeMismatch`.
    pub fn as_object_mut(&mut self) -> Result<&mut Map> {
        match self {
            Value::Object(o) => Ok(o),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }

    /// Look up a field on an object. `None` for a missing key or a
    /// non-object value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Look up an element on an array by index.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    /// Append to an array. Amortized O(1).
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        self.as_array_mut()?.push(value.into());
        Ok(())
    }

    /// Insert into an object, returning the previous value if the key
    /// existed. Replacing a key keeps its original position, so insertion
    /// order (and therefore serialization order) stays stable.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Option<Value>> {
        Ok(self.as_object_mut()?.insert(key.into(), value.into()))
    }

    /// Remove a key from an object, preserving the order of the
    /// remaining entries.
    pub fn remove(&mut self, key: &str) -> Result<Option<Value>> {
        Ok(self.as_object_mut()?.shift_remove(key))
    }

    /// Remove an array element by index, shifting later elements down.
    /// `None` if the index is out of range.
    pub fn remove_index(&mut self, index: usize) -> Result<Option<Value>> {
        let arr = self.as_array_mut()?;
        if index >= arr.len() {
            return Ok(None);
        }
        Ok(Some(arr.remove(index)))
    }

    /// Number of children for containers, string length in bytes for
    /// strings, 0 otherwise.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(a) => a.len(),
            Value::Object(o) => o.len(),
            Value::String(s) => s.len(),
            _ => 0,
        }
    }

    /// True when `len() == 0`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Structural, deep equality.
///
/// Arrays are order-sensitive; objects compare by key set and values,
/// not insertion order (IndexMap's equality). Numeric variants compare
/// by mathematical value across `Integer`/`Unsigned`/`Float` — required
/// for the round-trip property, since a non-negative `Integer`
/// serializes to text that re-parses as `Unsigned`. Floats follow
/// IEEE-754, so `NaN != NaN`.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,

            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Unsigned(a), Value::Unsigned(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Integer(a), Value::Unsigned(b)) | (Value::Unsigned(b), Value::Integer(a)) => {
                *a >= 0 && *a as u64 == *b
            }
            (Value::Integer(a), Value::Float(b)) | (Value::Float(b), Value::Integer(a)) => {
                *a as f64 == *b
            }
            (Value::Unsigned(a), Value::Float(b)) | (Value::Float(b), Value::Unsigned(a)) => {
                *a as f64 == *b
            }

            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Value {
        Value::Integer(i64::from(i))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Value {
        Value::Unsigned(u)
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Value {
        Value::Unsigned(u64::from(u))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Value {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Value {
        Value::Array(values)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Value {
        Value::Object(map)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Value {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Value {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
