//! Error types for parsing, serialization, and typed value access.

use thiserror::Error;

use crate::value::ValueKind;

/// Errors that can occur while parsing JSON text, serializing a value
/// tree, or accessing a [`crate::Value`] through a typed accessor.
#[derive(Error, Debug)]
pub enum JsonError {
    /// The input was not valid JSON syntax.
    /// `offset` is the byte position where the parser gave up.
    #[error("parse error at offset {offset}: expected {expected}, found {found}")]
    Parse {
        offset: usize,
        expected: &'static str,
        found: String,
    },

    /// Container nesting exceeded the configured depth limit.
    /// Reported instead of overflowing the stack on adversarial input.
    #[error("parse error at offset {offset}: nesting depth exceeds limit of {limit}")]
    DepthExceeded { offset: usize, limit: usize },

    /// The input byte stream was not valid UTF-8.
    #[error("parse error at offset {offset}: invalid UTF-8")]
    InvalidUtf8 { offset: usize },

    /// A typed accessor or mutation was used on the wrong variant.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },

    /// A NaN or infinite float was encountered during serialization.
    /// These have no JSON representation; the serializer fails rather
    /// than emit invalid text.
    #[error("number {0} cannot be represented in JSON")]
    NonFiniteNumber(f64),

    /// An underlying reader or writer failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl JsonError {
    /// Byte offset of a parse-family error, if this is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            JsonError::Parse { offset, .. }
            | JsonError::DepthExceeded { offset, .. }
            | JsonError::InvalidUtf8 { offset } => Some(*offset),
            _ => None,
        }
    }
}

/// Convenience alias used throughout strand-json.
pub type Result<T> = std::result::Result<T, JsonError>;
