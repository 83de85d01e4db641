//! Index key types.

use crate::models::Value;
use std::fmt;
use std::hash::Hash;

/// Key type of a repository's identity index
pub trait IdentityKey: Clone + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Human-readable name of the expected `_id` type
    const TYPE_NAME: &'static str;

    /// Strict read of a stored `_id` value
    fn from_value(value: &Value) -> Option<Self>;

    /// Loose coercion of a search term into a key
    fn from_term(term: &Value) -> Option<Self>;
}

/// Hashable wrapper around an f64 identity or foreign key.
///
/// Keys compare by bit pattern after folding `-0.0` into `0.0`, so
/// `NumericKey::from(1.0) == NumericKey::from(1.0)` while NaN never matches
/// a stored key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumericKey(u64);

impl NumericKey {
    /// Bucket for records whose foreign key is absent or not a number
    pub const NONE: NumericKey = NumericKey(0);

    pub fn new(value: f64) -> Self {
        let value = if value == 0.0 { 0.0 } else { value };
        NumericKey(value.to_bits())
    }

    pub fn value(self) -> f64 {
        f64::from_bits(self.0)
    }
}

impl From<f64> for NumericKey {
    fn from(value: f64) -> Self {
        NumericKey::new(value)
    }
}

impl fmt::Display for NumericKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Number(self.value()))
    }
}

impl fmt::Debug for NumericKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NumericKey({})", self)
    }
}

impl IdentityKey for NumericKey {
    const TYPE_NAME: &'static str = "number";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_number().map(NumericKey::new)
    }

    fn from_term(term: &Value) -> Option<Self> {
        term.coerce_number().map(NumericKey::new)
    }
}

impl IdentityKey for String {
    const TYPE_NAME: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }

    fn from_term(term: &Value) -> Option<Self> {
        Some(term.to_string())
    }
}
