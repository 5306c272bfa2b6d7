//! Round-trip and differential tests.
//!
//! The core invariants: `parse(dump(v)) == v` in both output modes, and
//! compact serialization is idempotent (two dumps of the same tree are
//! byte-identical). `serde_json` serves as the comparison oracle for
//! documents both libraries accept.

use strand_json::{dump, dump_indented, parse, Value};

/// Documents exercising every variant, nesting, escapes, and numeric
/// edge cases.
const FIXTURES: &[&str] = &[
    "null",
    "true",
    "-12345",
    "18446744073709551615",
    "0.0625",
    r#""plain string""#,
    "[]",
    "{}",
    r#"[null, true, false, 0, -1, 2.5, "x"]"#,
    r#"{"a": 1, "b": [2, 3], "c": {"d": null}}"#,
    r#"{"nested": [[1], [[2]], {"deep": [{"deeper": 3}]}]}"#,
    r#"{"escapes": "quote \" slash \\ tab \t newline \n", "unicode": "Aé😀"}"#,
    r#"[1e-10, 1.7976931348623157e308, 2.2250738585072014e-308, 5e-324]"#,
    r#"{"z": 26, "a": 1, "m": 13}"#,
];

fn roundtrip(text: &str) -> (Value, Value) {
    let v = parse(text).expect("fixture should parse");
    let back = parse(&dump(&v).unwrap()).expect("dump should re-parse");
    (v, back)
}

// ============================================================================
// parse ∘ dump identity
// ============================================================================

#[test]
fn compact_roundtrip_preserves_structure() {
    for text in FIXTURES {
        let (v, back) = roundtrip(text);
        assert_eq!(v, back, "compact roundtrip failed for {text}");
    }
}

#[test]
fn indented_roundtrip_preserves_structure() {
    for text in FIXTURES {
        let v = parse(text).unwrap();
        for width in [0, 1, 4] {
            let pretty = dump_indented(&v, width).unwrap();
            assert_eq!(
                parse(&pretty).unwrap(),
                v,
                "indented({width}) roundtrip failed for {text}"
            );
        }
    }
}

#[test]
fn numeric_variants_survive_a_roundtrip() {
    let (v, back) = roundtrip(r#"[0, -1, 1.0, 18446744073709551615, -9223372036854775808]"#);
    let arr = back.as_array().unwrap();
    assert!(arr[0].is_unsigned());
    assert!(arr[1].is_integer());
    assert!(arr[2].is_float(), "1.0 must stay a float through text");
    assert!(arr[3].is_unsigned());
    assert!(arr[4].is_integer());
    assert_eq!(v, back);
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn compact_dump_is_idempotent() {
    for text in FIXTURES {
        let v = parse(text).unwrap();
        let once = dump(&v).unwrap();
        let twice = dump(&parse(&once).unwrap()).unwrap();
        assert_eq!(once, twice, "dump unstable for {text}");
    }
}

#[test]
fn indented_dump_is_idempotent() {
    for text in FIXTURES {
        let v = parse(text).unwrap();
        let once = dump_indented(&v, 4).unwrap();
        let twice = dump_indented(&parse(&once).unwrap(), 4).unwrap();
        assert_eq!(once, twice);
    }
}

// ============================================================================
// Differential checks against serde_json
// ============================================================================

#[test]
fn dump_output_is_valid_json_per_serde() {
    for text in FIXTURES {
        let v = parse(text).unwrap();
        let compact = dump(&v).unwrap();
        serde_json::from_str::<serde_json::Value>(&compact)
            .unwrap_or_else(|e| panic!("serde_json rejected {compact:?}: {e}"));
        let pretty = dump_indented(&v, 4).unwrap();
        serde_json::from_str::<serde_json::Value>(&pretty).unwrap();
    }
}

#[test]
fn dump_output_means_the_same_document_to_serde() {
    for text in FIXTURES {
        let ours: serde_json::Value =
            serde_json::from_str(&dump(&parse(text).unwrap()).unwrap()).unwrap();
        let theirs: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(ours, theirs, "semantic drift for {text}");
    }
}

#[test]
fn rejection_agrees_with_serde_on_malformed_inputs() {
    let malformed = [
        "", "[1,]", "{,}", "[1 2]", r#"{"a" 1}"#, "01", "+1", "1.", "tru", "nul",
        r#""unterminated"#, "[1, 2", r#"{"a": }"#,
    ];
    for text in malformed {
        assert!(parse(text).is_err(), "accepted malformed input {text:?}");
        assert!(
            serde_json::from_str::<serde_json::Value>(text).is_err(),
            "fixture {text:?} is not actually malformed"
        );
    }
}
