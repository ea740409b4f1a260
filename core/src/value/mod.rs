mod cast;

pub use cast::{format_number, parse_number};

use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Display;

/// The value a product holds for one property.
///
/// Recorded values arrive loosely typed (a weight may be stored as `19` or as `"19"`), so comparisons go
/// through the string and number coercions below rather than through the variant.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Number(f64),
    /// Explicitly recorded as having no value. Distinct from the property being absent.
    Null,
}

impl Value {
    /// Null or the empty string. Counts as "no value" for the `any` and `none` operators.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Number(_) => false,
        }
    }

    /// Numeric reading of this value. Never fails: text that is not numeric yields NaN, which compares
    /// false against every number.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::String(s) => parse_number(s),
            Value::Null => 0.0,
        }
    }

    /// Lowercased string form, used by every case-insensitive comparison
    pub fn to_folded(&self) -> String { self.to_string().to_lowercase() }
}

/// Largest magnitude below which every integer is exactly representable as an f64
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Integral numbers are written as JSON integers, so a catalog's `5` is written back as `5`, not `5.0`.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => serializer.serialize_i64(*n as i64),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Null => serializer.serialize_unit(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::String(s.to_string()) }
}
impl From<String> for Value {
    fn from(s: String) -> Self { Value::String(s) }
}
impl From<f64> for Value {
    fn from(n: f64) -> Self { Value::Number(n) }
}
impl From<i64> for Value {
    fn from(n: i64) -> Self { Value::Number(n as f64) }
}
impl From<i32> for Value {
    fn from(n: i32) -> Self { Value::Number(n as f64) }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Value::Null) }
}
