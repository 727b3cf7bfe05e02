//! Recursive-descent JSON parser.
//!
//! [`parse`] runs a single scanner over the whole input: skip whitespace,
//! dispatch on the first significant character, recurse through composite
//! values, then require end of input. The string and number sub-grammars
//! live in sibling modules; every failure propagates a [`ParseError`] and
//! nothing recovers mid-parse.

mod number;
mod scanner;
mod string;

use crate::{
    error::ParseError,
    value::{Array, Map, Value},
};
use number::parse_number;
use scanner::Scanner;
use string::parse_string;

/// Parses a JSON text into a [`Value`] tree.
///
/// The input must hold exactly one JSON value, optionally surrounded by
/// whitespace (space, tab, line feed, carriage return). Parsing is strict:
/// no comments, no trailing commas, no `NaN`/`Infinity`, and numbers whose
/// magnitude rounds to an infinity are rejected.
///
/// # Errors
///
/// Returns the [`ParseError`] variant classifying the first failure; see
/// the variant list for the exhaustive set of conditions.
///
/// # Examples
///
/// ```
/// use leptjson::{Value, parse};
///
/// assert_eq!(parse("[true]"), Ok(Value::Array(vec![Value::Boolean(true)])));
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let mut scanner = Scanner::new(text);
    scanner.skip_whitespace();
    let value = parse_value(&mut scanner)?;
    scanner.skip_whitespace();
    if !scanner.at_end() {
        return Err(ParseError::RootNotSingular);
    }
    Ok(value)
}

/// Dispatches on the leading character of a value. Anything that does not
/// announce a literal, string, array, or object is handed to the number
/// grammar, which rejects it as an invalid value if it is not one.
fn parse_value(scanner: &mut Scanner<'_>) -> Result<Value, ParseError> {
    match scanner.peek() {
        Some('n') => parse_literal(scanner, "null", Value::Null),
        Some('t') => parse_literal(scanner, "true", Value::Boolean(true)),
        Some('f') => parse_literal(scanner, "false", Value::Boolean(false)),
        Some('"') => parse_string(scanner).map(Value::String),
        Some('[') => parse_array(scanner),
        Some('{') => parse_object(scanner),
        Some(_) => parse_number(scanner),
        None => Err(ParseError::ExpectValue),
    }
}

/// Consumes exactly `keyword`; any mismatch, truncation included, is an
/// invalid value.
fn parse_literal(
    scanner: &mut Scanner<'_>,
    keyword: &str,
    value: Value,
) -> Result<Value, ParseError> {
    for expected in keyword.chars() {
        if scanner.advance() != Some(expected) {
            return Err(ParseError::InvalidValue);
        }
    }
    Ok(value)
}

fn parse_array(scanner: &mut Scanner<'_>) -> Result<Value, ParseError> {
    scanner.advance(); // `[`
    scanner.skip_whitespace();
    if scanner.eat(']') {
        return Ok(Value::Array(Array::new()));
    }

    let mut items = Array::new();
    loop {
        items.push(parse_value(scanner)?);
        scanner.skip_whitespace();
        match scanner.peek() {
            Some(',') => {
                scanner.advance();
                scanner.skip_whitespace();
            }
            Some(']') => {
                scanner.advance();
                return Ok(Value::Array(items));
            }
            _ => return Err(ParseError::MissCommaOrSquareBracket),
        }
    }
}

fn parse_object(scanner: &mut Scanner<'_>) -> Result<Value, ParseError> {
    scanner.advance(); // `{`
    scanner.skip_whitespace();
    if scanner.eat('}') {
        return Ok(Value::Object(Map::new()));
    }

    let mut entries = Map::new();
    loop {
        if scanner.peek() != Some('"') {
            return Err(ParseError::MissKey);
        }
        // A string-internal syntax error where a key was expected surfaces
        // as a key error.
        let key = parse_string(scanner).map_err(|_| ParseError::MissKey)?;
        scanner.skip_whitespace();
        if !scanner.eat(':') {
            return Err(ParseError::MissColon);
        }
        scanner.skip_whitespace();
        let value = parse_value(scanner)?;
        // Last write wins; the key keeps its first position.
        entries.insert(key, value);
        scanner.skip_whitespace();
        match scanner.peek() {
            Some(',') => {
                scanner.advance();
                scanner.skip_whitespace();
            }
            Some('}') => {
                scanner.advance();
                return Ok(Value::Object(entries));
            }
            _ => return Err(ParseError::MissCommaOrCurlyBracket),
        }
    }
}
