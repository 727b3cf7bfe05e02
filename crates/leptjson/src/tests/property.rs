use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{Value, parse, stringify};

fn test_count() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

#[test]
fn parse_inverts_stringify() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value) -> bool {
        parse(&stringify(&value)) == Ok(value)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Value) -> bool);
}

#[test]
fn emitted_text_is_valid_json() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value) -> bool {
        serde_json::from_str::<serde_json::Value>(&stringify(&value)).is_ok()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Value) -> bool);
}

/// Serialization reaches a fixed point after one trip: re-parsing the
/// output and serializing again changes nothing.
#[quickcheck]
fn stringify_is_stable(value: Value) -> bool {
    let text = stringify(&value);
    let reparsed = parse(&text).expect("stringify output must parse");
    stringify(&reparsed) == text
}

/// Every rejection maps to one of the thirteen canonical messages.
#[quickcheck]
fn rejections_use_canonical_messages(text: alloc::string::String) -> bool {
    use alloc::string::ToString;

    match parse(&text) {
        Ok(_) => true,
        Err(error) => error.to_string().starts_with("lept parse "),
    }
}
