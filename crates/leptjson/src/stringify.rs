//! Serialization of [`Value`] trees to JSON text.
//!
//! The serializer always emits the compact form: no whitespace, object
//! entries in map iteration order, strings with only the required escapes,
//! and numbers in a `%.17g`-equivalent rendering that re-parses to the
//! identical binary64 value.

use alloc::{format, string::String};
use core::fmt::{self, Write};

use crate::value::Value;

/// Serializes a value tree to compact JSON text.
///
/// Serialization is total: every `Value` has a rendering, including numbers
/// down to the minimum positive denormal. The output re-parses to an equal
/// tree.
///
/// # Examples
///
/// ```
/// use leptjson::{Value, stringify};
///
/// let value = Value::Array(vec![Value::Null, Value::Number(123.0)]);
/// assert_eq!(stringify(&value), "[null,123]");
/// ```
#[must_use]
pub fn stringify(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value).expect("writing to a String cannot fail");
    out
}

pub(crate) fn write_value<W: Write>(f: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(f, *n),
        Value::String(s) => write_quoted(f, s),
        Value::Array(items) => {
            f.write_char('[')?;
            let mut first = true;
            for item in items {
                if !first {
                    f.write_char(',')?;
                }
                first = false;
                write_value(f, item)?;
            }
            f.write_char(']')
        }
        Value::Object(entries) => {
            f.write_char('{')?;
            let mut first = true;
            for (key, item) in entries {
                if !first {
                    f.write_char(',')?;
                }
                first = false;
                write_quoted(f, key)?;
                f.write_char(':')?;
                write_value(f, item)?;
            }
            f.write_char('}')
        }
    }
}

/// Writes a string enclosed in quotes, escaping only what RFC 7159
/// requires: the quote, the backslash, and control characters below U+0020.
/// Everything else, `/` and non-ASCII included, passes through verbatim.
fn write_quoted<W: Write>(f: &mut W, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\u{000C}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            _ if u32::from(ch) < 0x20 => write!(f, "\\u{:04x}", u32::from(ch))?,
            _ => f.write_char(ch)?,
        }
    }
    f.write_char('"')
}

/// Formats a finite double the way C's `%.17g` would: 17 significant
/// digits, trailing fraction zeros trimmed, fixed notation while the
/// decimal exponent lies in `[-4, 16]` and scientific notation beyond.
///
/// Seventeen digits are always enough to pin down a binary64, so the text
/// re-parses to the exact same value.
fn write_number<W: Write>(f: &mut W, n: f64) -> fmt::Result {
    if n == 0.0 {
        return f.write_str(if n.is_sign_negative() { "-0" } else { "0" });
    }
    let magnitude = if n.is_sign_negative() {
        f.write_char('-')?;
        -n
    } else {
        n
    };

    let rendered = format!("{magnitude:.16e}");
    let (mantissa, exponent) = rendered
        .split_once('e')
        .expect("the `e` formatter always emits an exponent");
    let exponent: i32 = exponent
        .parse()
        .expect("the `e` formatter emits a decimal exponent");

    let mut digits = String::with_capacity(17);
    for ch in mantissa.chars() {
        if ch != '.' {
            digits.push(ch);
        }
    }
    let digits = digits.trim_end_matches('0');

    if (-4..17).contains(&exponent) {
        write_fixed(f, digits, exponent)
    } else {
        write_scientific(f, digits, exponent)
    }
}

/// Positional notation for `0.d…` through 17-digit integers.
fn write_fixed<W: Write>(f: &mut W, digits: &str, exponent: i32) -> fmt::Result {
    // Number of digits before the decimal point.
    let point = exponent + 1;
    if point <= 0 {
        f.write_str("0.")?;
        for _ in 0..-point {
            f.write_char('0')?;
        }
        f.write_str(digits)
    } else if point >= digits.len() as i32 {
        f.write_str(digits)?;
        for _ in 0..point - digits.len() as i32 {
            f.write_char('0')?;
        }
        Ok(())
    } else {
        let (int_part, frac_part) = digits.split_at(point as usize);
        f.write_str(int_part)?;
        f.write_char('.')?;
        f.write_str(frac_part)
    }
}

/// `d[.ddd]e±XX` notation with a signed, at-least-two-digit exponent.
fn write_scientific<W: Write>(f: &mut W, digits: &str, exponent: i32) -> fmt::Result {
    let (first, rest) = digits.split_at(1);
    f.write_str(first)?;
    if !rest.is_empty() {
        f.write_char('.')?;
        f.write_str(rest)?;
    }
    if exponent < 0 {
        write!(f, "e-{:02}", -exponent)
    } else {
        write!(f, "e+{exponent:02}")
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::write_number;

    fn rendered(n: f64) -> String {
        let mut out = String::new();
        write_number(&mut out, n).unwrap();
        out
    }

    #[test]
    fn zero_keeps_its_sign() {
        assert_eq!(rendered(0.0), "0");
        assert_eq!(rendered(-0.0), "-0");
    }

    #[test]
    fn integer_valued_doubles_drop_the_fraction() {
        assert_eq!(rendered(1.0), "1");
        assert_eq!(rendered(-1.0), "-1");
        assert_eq!(rendered(123.0), "123");
        assert_eq!(rendered(1e16), "10000000000000000");
    }

    #[test]
    fn fractions_are_trimmed() {
        assert_eq!(rendered(1.5), "1.5");
        assert_eq!(rendered(-1.5), "-1.5");
        assert_eq!(rendered(3.25), "3.25");
        assert_eq!(rendered(1.000_000_000_000_000_2), "1.0000000000000002");
    }

    #[test]
    fn small_magnitudes_stay_fixed_down_to_1e_minus_4() {
        assert_eq!(rendered(0.0001), "0.0001");
        assert_eq!(rendered(0.5), "0.5");
    }

    #[test]
    fn scientific_notation_starts_at_1e17() {
        assert_eq!(rendered(1e17), "1e+17");
        assert_eq!(rendered(1.234e20), "1.234e+20");
        assert_eq!(rendered(1.234e-20), "1.234e-20");
    }

    #[test]
    fn exponents_are_padded_to_two_digits() {
        // 2^-15 is exact, so its digits are short and the padding shows.
        assert_eq!(rendered(3.051_757_812_5e-5), "3.0517578125e-05");
    }

    #[test]
    fn extremes_of_the_double_range() {
        assert_eq!(rendered(f64::MAX), "1.7976931348623157e+308");
        assert_eq!(rendered(-f64::MAX), "-1.7976931348623157e+308");
        assert_eq!(rendered(f64::MIN_POSITIVE), "2.2250738585072014e-308");
        assert_eq!(rendered(5e-324), "4.9406564584124654e-324");
        assert_eq!(rendered(-5e-324), "-4.9406564584124654e-324");
    }
}
