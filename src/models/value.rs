//! Dynamically typed field values.
//!
//! Source data is untyped JSON, so the same logical field may be a number in
//! one record and a string in the next. `Value` closes the set of shapes a
//! field can take so the matcher can dispatch exhaustively on them.

use crate::models::Record;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Largest magnitude at which every integer is exactly representable in an f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A single field value of a record
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent or JSON `null`
    #[default]
    Null,
    Bool(bool),
    /// All numbers are canonicalised to f64 so `1` and `1.0` compare equal
    Number(f64),
    String(String),
    List(Vec<Value>),
    /// Nested object, also used for records attached during enrichment
    Object(Record),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Strict numeric read: only `Number` qualifies
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Loose numeric coercion of a search term.
    ///
    /// Numbers pass through and strings are parsed as floats, with the empty
    /// string standing for zero. Every other shape fails.
    pub fn coerce_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::String(s) if s.is_empty() => Some(0.0),
            Value::String(s) => s.parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Loose boolean coercion of a search term.
    ///
    /// Numbers are truthy when positive, `"true"`/`"1"` and `"false"`/`"0"`/`""`
    /// are recognised case-insensitively, and null reads as false.
    pub fn coerce_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => Some(*n > 0.0),
            Value::String(s) => {
                if s.eq_ignore_ascii_case("true") || s == "1" {
                    Some(true)
                } else if s.eq_ignore_ascii_case("false") || s == "0" || s.is_empty() {
                    Some(false)
                } else {
                    None
                }
            }
            Value::Null => Some(false),
            Value::List(_) | Value::Object(_) => None,
        }
    }

    /// Normalises a search term into a list of terms.
    ///
    /// Strings are split on `,` (the empty string yields an empty list), null
    /// yields an empty list and any other scalar becomes a one-element list.
    pub fn to_term_list(&self) -> Cow<'_, [Value]> {
        match self {
            Value::List(items) => Cow::Borrowed(items.as_slice()),
            Value::Null => Cow::Owned(Vec::new()),
            Value::String(s) if s.is_empty() => Cow::Owned(Vec::new()),
            Value::String(s) => Cow::Owned(
                s.split(',')
                    .map(|part| Value::String(part.to_string()))
                    .collect(),
            ),
            other => Cow::Owned(vec![other.clone()]),
        }
    }

    /// Whether a term counts as "empty" when compared against a null field
    pub fn is_empty_term(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Number(n) => *n == 0.0,
            Value::Bool(b) => !b,
            Value::List(_) | Value::Object(_) => false,
        }
    }

    /// Converts back into a `serde_json::Value`, printing integral numbers as integers
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => match integral(*n) {
                Some(i) => serde_json::Value::from(i),
                None => serde_json::Number::from_f64(*n)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null),
            },
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Object(record) => record.to_json(),
        }
    }
}

fn integral(n: f64) -> Option<i64> {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER {
        Some(n as i64)
    } else {
        None
    }
}

/// Very large or very small magnitudes use exponent form with a signed,
/// two-digit exponent (`1e+21`, `2.5e-07`); everything else is plain decimal.
fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let magnitude = n.abs();
    if !n.is_finite() || n == 0.0 || (1e-4..MAX_EXACT_INTEGER).contains(&magnitude) {
        return write!(f, "{}", n);
    }

    let scientific = format!("{:e}", n);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => f.write_str(&scientific),
    }
}

/// Textual form used when a term is compared against a string field.
/// Null renders as the empty string and lists as comma-joined items.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => match integral(*n) {
                Some(i) => write!(f, "{}", i),
                None => write_float(f, *n),
            },
            Value::String(s) => f.write_str(s),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            Value::Object(record) => write!(f, "{}", record.to_json()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(Record::from(map)),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => match integral(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => serializer.collect_seq(items),
            Value::Object(record) => record.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}
