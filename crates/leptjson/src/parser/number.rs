//! The number sub-grammar.
//!
//! Four strict stages (sign, integer, fraction, exponent) validate the
//! lexeme before any conversion happens, so malformed numbers fail as
//! invalid values rather than with whatever the float converter would
//! report. Conversion itself is delegated to `str::parse::<f64>()`, which
//! is correctly rounded.

use super::scanner::Scanner;
use crate::{error::ParseError, value::Value};

pub(crate) fn parse_number(scanner: &mut Scanner<'_>) -> Result<Value, ParseError> {
    let start = scanner.offset();
    scanner.eat('-');
    parse_integer(scanner)?;
    parse_fraction(scanner)?;
    parse_exponent(scanner)?;

    let number: f64 = scanner
        .lexeme(start)
        .parse()
        .map_err(|_| ParseError::InvalidValue)?;
    // Overflow to an infinity is rejected; underflow to zero is accepted.
    if number.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }
    Ok(Value::Number(number))
}

/// `0`, or a nonzero digit followed by any digits. After a single `0` the
/// stage ends immediately; a digit following it is left in place for the
/// caller to reject as trailing garbage.
fn parse_integer(scanner: &mut Scanner<'_>) -> Result<(), ParseError> {
    match scanner.peek() {
        Some('0') => {
            scanner.advance();
            Ok(())
        }
        Some('1'..='9') => {
            skip_digits(scanner);
            Ok(())
        }
        _ => Err(ParseError::InvalidValue),
    }
}

/// `.` followed by at least one digit, or nothing.
fn parse_fraction(scanner: &mut Scanner<'_>) -> Result<(), ParseError> {
    if !scanner.eat('.') {
        return Ok(());
    }
    expect_digits(scanner)
}

/// `e`/`E`, an optional sign, then at least one digit, or nothing.
fn parse_exponent(scanner: &mut Scanner<'_>) -> Result<(), ParseError> {
    if !(scanner.eat('e') || scanner.eat('E')) {
        return Ok(());
    }
    if matches!(scanner.peek(), Some('+' | '-')) {
        scanner.advance();
    }
    expect_digits(scanner)
}

fn skip_digits(scanner: &mut Scanner<'_>) {
    while matches!(scanner.peek(), Some('0'..='9')) {
        scanner.advance();
    }
}

fn expect_digits(scanner: &mut Scanner<'_>) -> Result<(), ParseError> {
    if !matches!(scanner.peek(), Some('0'..='9')) {
        return Err(ParseError::InvalidValue);
    }
    skip_digits(scanner);
    Ok(())
}
