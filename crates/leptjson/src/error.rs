//! Parse failure classification.
//!
//! Every rejection is reported as one [`ParseError`] variant. The `Display`
//! text of each variant is a canonical message and part of the crate's
//! contract: callers and tests match on it literally, so the strings here
//! must never change.

use thiserror::Error;

/// The reason a JSON text was rejected by [`parse`](crate::parse).
///
/// Errors carry no position information; the variant (and its canonical
/// message) fully identifies the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    #[error("lept parse expect value")]
    ExpectValue,
    /// The leading token was not a recognizable JSON form: a misspelled
    /// literal, stray punctuation, or a malformed number prefix.
    #[error("lept parse invalid value")]
    InvalidValue,
    /// A well-formed value was followed by further non-whitespace input.
    #[error("lept parse root not singular")]
    RootNotSingular,
    /// A number's decimal magnitude rounds to ±∞ in binary64.
    #[error("lept parse number too big")]
    NumberTooBig,
    /// A string reached end of input before its closing quote.
    #[error("lept parse miss quotation mark")]
    MissQuotationMark,
    /// An unknown escape character followed a backslash, or the input ended
    /// right after one.
    #[error("lept parse invalid string escape")]
    InvalidStringEscape,
    /// A raw control character (below U+0020) appeared inside a string.
    #[error("lept parse invalid string char")]
    InvalidStringChar,
    /// A `\u` escape was missing one of its four hex digits.
    #[error("lept parse invalid unicode hex")]
    InvalidUnicodeHex,
    /// A high surrogate escape was not followed by a valid low surrogate,
    /// or a surrogate escape did not form a Unicode scalar value.
    #[error("lept parse invalid unicode surrogate")]
    InvalidUnicodeSurrogate,
    /// An array value was not followed by `,` or `]`.
    #[error("lept parse miss comma or square bracket")]
    MissCommaOrSquareBracket,
    /// An object entry did not start with a `"`-quoted key.
    #[error("lept parse miss key")]
    MissKey,
    /// An object key was not followed by `:`.
    #[error("lept parse miss colon")]
    MissColon,
    /// An object member was not followed by `,` or `}`.
    #[error("lept parse miss comma or curly bracket")]
    MissCommaOrCurlyBracket,
}
