//! # strand-json
//!
//! An in-memory JSON document model ([`Value`]) with an offset-reporting
//! recursive-descent parser and a compact/indented serializer, RFC 8259
//! semantics throughout.
//!
//! The design favors predictable, auditable behavior: a closed sum type
//! for values, a strict ownership tree (containers exclusively own their
//! children, no cycles are constructible), insertion-ordered objects so
//! serialization is deterministic, and an explicit nesting depth limit so
//! adversarial input fails with an error instead of a stack overflow.
//!
//! ## Quick start
//!
//! ```rust
//! use strand_json::{parse, dump};
//!
//! let value = parse(r#"{"name":"Alice","scores":[95,87,92]}"#).unwrap();
//! assert_eq!(value.get("name").unwrap().as_str().unwrap(), "Alice");
//!
//! // Round trip: compact serialization re-parses to an equal tree.
//! let text = dump(&value).unwrap();
//! assert_eq!(parse(&text).unwrap(), value);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the [`Value`] tree, typed accessors, mutation
//! - [`parser`] — text → [`Value`], with byte-offset errors
//! - [`serializer`] — [`Value`] → text, compact or indented
//! - [`number`] — shared numeric codec (shortest round-trip float text)
//! - [`error`] — [`JsonError`] taxonomy
//!
//! ## Threading
//!
//! There is no internal shared state: any number of threads may parse and
//! serialize concurrently as long as each works on its own tree. Mutating
//! one `Value` from several threads needs external synchronization, which
//! the ordinary `&mut` rules already enforce.

pub mod error;
pub mod number;
pub mod parser;
pub mod serializer;
pub mod value;

pub use error::{JsonError, Result};
pub use parser::{parse, parse_bytes, parse_reader, parse_with_limit, DEFAULT_MAX_DEPTH};
pub use serializer::{dump, dump_indented, dump_to_writer};
pub use value::{Map, Value, ValueKind};
