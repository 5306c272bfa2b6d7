//! Property-based round-trip tests.
//!
//! Uses the `proptest` crate to generate random value trees and verify
//! that `parse(dump(v)) == v` holds for all of them, in both output
//! modes. This catches edge cases hand-written tests miss.
//!
//! Strategies generate:
//! - All leaf variants, with finite floats across the full double range
//!   (NaN/infinity excluded — they are unserializable by policy)
//! - Strings including empty, unicode, and escape-heavy content
//! - Arrays and objects nested several levels deep
//!
//! The numeric codec gets its own properties: float → text → float must
//! be bit-for-bit exact, and the integer variants must survive textual
//! round trips unchanged.

use proptest::prelude::*;
use strand_json::number::{text_to_float, write_float};
use strand_json::{dump, dump_indented, parse, Map, Value};

// ============================================================================
// Strategies
// ============================================================================

/// Object keys: anything goes, including empty and unicode.
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,12}",
        ".{0,8}",
        Just(String::new()),
    ]
}

/// String payloads with escape-relevant content mixed in.
fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,20}",
        ".{0,12}",
        Just("\"quoted\" and \\slashed\\".to_string()),
        Just("line\nbreak\ttab\rret".to_string()),
        Just("caf\u{00e9} \u{4f60}\u{597d} \u{1F600}".to_string()),
        Just("\u{0000}\u{0001}\u{001F}".to_string()),
    ]
}

fn arb_finite_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>().prop_filter("finite", |f| f.is_finite()),
        Just(0.0),
        Just(-0.0),
        Just(f64::MIN),
        Just(f64::MAX),
        Just(f64::MIN_POSITIVE),
        Just(5e-324),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        any::<u64>().prop_map(Value::Unsigned),
        arb_finite_f64().prop_map(Value::Float),
        arb_string().prop_map(Value::String),
    ]
}

/// Trees up to 4 levels deep with containers of up to 6 children.
fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..6).prop_map(|pairs| {
                Value::Object(pairs.into_iter().collect::<Map>())
            }),
        ]
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn compact_roundtrip(v in arb_value()) {
        let text = dump(&v).unwrap();
        let back = parse(&text).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn indented_roundtrip(v in arb_value(), width in 0usize..8) {
        let text = dump_indented(&v, width).unwrap();
        let back = parse(&text).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn compact_dump_is_idempotent(v in arb_value()) {
        let once = dump(&v).unwrap();
        let twice = dump(&parse(&once).unwrap()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn float_text_roundtrips_bit_for_bit(f in arb_finite_f64()) {
        let mut text = String::new();
        write_float(&mut text, f).unwrap();
        let back = text_to_float(&text);
        prop_assert_eq!(back.to_bits(), f.to_bits());
    }

    #[test]
    fn integer_text_roundtrips_exactly(i in any::<i64>()) {
        let back = parse(&dump(&Value::Integer(i)).unwrap()).unwrap();
        prop_assert_eq!(back.as_i64().unwrap(), i);
    }

    #[test]
    fn unsigned_text_roundtrips_exactly(u in any::<u64>()) {
        let back = parse(&dump(&Value::Unsigned(u)).unwrap()).unwrap();
        prop_assert_eq!(back.as_u64().unwrap(), u);
    }

    #[test]
    fn dump_output_always_parses_under_serde(v in arb_value()) {
        let text = dump(&v).unwrap();
        prop_assert!(serde_json::from_str::<serde_json::Value>(&text).is_ok());
    }
}
