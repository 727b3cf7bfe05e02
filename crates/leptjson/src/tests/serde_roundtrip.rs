//! Coverage for the serde derive on [`Value`].
//!
//! The derive is untagged, so a tree must encode to plain JSON through
//! serde_json and decode back to an equal tree.

use quickcheck::QuickCheck;

use crate::{Value, parse, stringify};

#[test]
fn values_survive_a_serde_json_trip() {
    let value =
        parse("{\"n\":null,\"deep\":[true,1.5,\"a/b\",{\"k\":[]}]}").expect("valid input");
    let encoded = serde_json::to_string(&value).expect("value serializes");
    let decoded: Value = serde_json::from_str(&encoded).expect("encoding parses back");
    assert_eq!(decoded, value);
}

#[test]
fn serde_json_accepts_our_compact_output() {
    let value = parse("[0.5,\"text\",{\"k\":1e17}]").expect("valid input");
    let via_serde: Value = serde_json::from_str(&stringify(&value)).expect("output is JSON");
    assert_eq!(via_serde, value);
}

#[test]
fn serde_roundtrip_holds_for_arbitrary_values() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value) -> bool {
        let encoded = serde_json::to_string(&value).expect("value serializes");
        serde_json::from_str::<Value>(&encoded).is_ok_and(|decoded| decoded == value)
    }

    let tests = if is_ci::cached() { 10_000 } else { 1_000 };

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Value) -> bool);
}
