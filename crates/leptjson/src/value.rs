//! JSON value types.
//!
//! This module defines the [`Value`] enum, which represents any valid JSON
//! value, together with the [`Map`] and [`Array`] aliases for its composite
//! payloads.

use alloc::{string::String, vec::Vec};

use indexmap::IndexMap;

/// An ordered mapping from string keys to JSON values.
///
/// Keys iterate in first-insertion order, which keeps serialization
/// deterministic. Re-inserting an existing key replaces its value but keeps
/// the key's original position.
pub type Map = IndexMap<String, Value>;

/// An ordered sequence of JSON values.
pub type Array = Vec<Value>;

/// A JSON value as defined by [RFC 7159].
///
/// The `Value` enum can represent any JSON data type:
///
/// - Null
/// - Boolean
/// - Number (always an IEEE-754 binary64; never NaN or ±∞ when produced by
///   [`parse`](crate::parse))
/// - String
/// - Array
/// - Object
///
/// # Examples
///
/// Trees usually come out of [`parse`](crate::parse) and go back through
/// [`stringify`](crate::stringify), but they can also be built literally:
///
/// ```
/// use leptjson::{Value, stringify};
///
/// let value = Value::Array(vec![
///     Value::Boolean(true),
///     Value::String("a/b".into()),
/// ]);
/// assert_eq!(stringify(&value), r#"[true,"a/b"]"#);
/// ```
///
/// [RFC 7159]: https://datatracker.ietf.org/doc/html/rfc7159
// Serde support is compiled for tests and for downstream crates that turn
// on the optional `serde` feature; default builds stay serde-free.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// The `true` or `false` literal.
    Boolean(bool),
    /// A finite double.
    Number(f64),
    /// A sequence of Unicode scalar values.
    String(String),
    /// An ordered sequence of values, possibly empty.
    Array(Array),
    /// An insertion-ordered mapping from string keys to values.
    Object(Map),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(String::from(v))
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` for the `null` literal.
    ///
    /// ```
    /// use leptjson::parse;
    ///
    /// assert!(parse("null")?.is_null());
    /// assert!(!parse("0")?.is_null());
    /// # Ok::<(), leptjson::ParseError>(())
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for the `true` and `false` literals.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        self.as_bool().is_some()
    }

    /// Returns `true` for numbers, including those that underflowed to
    /// zero during parsing.
    ///
    /// ```
    /// use leptjson::parse;
    ///
    /// assert!(parse("1e-10000")?.is_number());
    /// # Ok::<(), leptjson::ParseError>(())
    /// ```
    #[must_use]
    pub fn is_number(&self) -> bool {
        self.as_number().is_some()
    }

    /// Returns `true` for strings.
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.as_str().is_some()
    }

    /// Returns `true` for arrays, empty ones included.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.as_array().is_some()
    }

    /// Returns `true` for objects, empty ones included.
    #[must_use]
    pub fn is_object(&self) -> bool {
        self.as_object().is_some()
    }

    /// The boolean payload, if this is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The double payload, if this is a number. Always finite for parsed
    /// values.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The borrowed text, if this is a string.
    ///
    /// Handy for drilling into parsed trees:
    ///
    /// ```
    /// use leptjson::parse;
    ///
    /// let value = parse(r#"{"name":"lept"}"#)?;
    /// let name = value
    ///     .as_object()
    ///     .and_then(|map| map.get("name"))
    ///     .and_then(|v| v.as_str());
    /// assert_eq!(name, Some("lept"));
    /// # Ok::<(), leptjson::ParseError>(())
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The element sequence, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The key-to-value map, if this is an object. Iteration follows key
    /// insertion order.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl core::fmt::Display for Value {
    /// Formats the value as compact JSON text, identical to
    /// [`stringify`](crate::stringify).
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::stringify::write_value(f, self)
    }
}
