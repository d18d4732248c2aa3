//! Schema types
//!
//! A [`Schema`] maps required field names to the [`ValueType`] their values
//! must have. Schemas are flat: a field can require an object or an array,
//! but the contents of that value are not checked.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// A parsed configuration: string keys to heterogeneous JSON values.
///
/// Once a loader has cached one of these, it is shared behind an `Arc` and
/// must be treated as immutable.
pub type ConfigObject = Map<String, Value>;

// ============================================================================
// Value Types
// ============================================================================

/// Expected type of a configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// JSON string.
    String,
    /// JSON number with an integral value (`8080` or `8080.0`).
    Integer,
    /// Any finite JSON number.
    Float,
    /// JSON `true` or `false`.
    Boolean,
    /// JSON object (contents unchecked).
    Object,
    /// JSON array (contents unchecked).
    Array,
}

impl ValueType {
    /// Lowercase tag used in messages and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }

    /// Returns `true` if `value` has exactly this type.
    ///
    /// Matching is exact: a boolean is never an integer, and `null` matches
    /// nothing.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match (self, value) {
            (Self::String, Value::String(_))
            | (Self::Boolean, Value::Bool(_))
            | (Self::Object, Value::Object(_))
            | (Self::Array, Value::Array(_)) => true,
            (Self::Integer, Value::Number(n)) => is_integral(n),
            (Self::Float, Value::Number(n)) => n.as_f64().is_some_and(f64::is_finite),
            _ => false,
        }
    }

    /// Names the runtime JSON type of `value`.
    ///
    /// Numbers are reported as `integer` when integral and `float` otherwise,
    /// so a mismatch message says what the file actually contained.
    #[must_use]
    pub fn of(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(n) if is_integral(n) => "integer",
            Value::Number(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A number is integral when it equals its own truncation.
fn is_integral(n: &serde_json::Number) -> bool {
    if n.is_i64() || n.is_u64() {
        return true;
    }
    n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}

// ============================================================================
// Schema
// ============================================================================

/// Required fields and their expected types.
///
/// Fields are enumerated in insertion order. The order never changes whether
/// a configuration passes, only which violation is reported first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schema {
    fields: IndexMap<String, ValueType>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a required field, replacing any earlier type for the same name.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: ValueType) -> Self {
        self.fields.insert(name.into(), ty);
        self
    }

    /// The schema every application configuration must satisfy:
    /// `host` string, `port` integer, `debug` boolean.
    #[must_use]
    pub fn app_default() -> Self {
        Self::new()
            .field("host", ValueType::String)
            .field("port", ValueType::Integer)
            .field("debug", ValueType::Boolean)
    }

    /// Iterates `(field, type)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ValueType)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Looks up the expected type of a field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ValueType> {
        self.fields.get(name).copied()
    }

    /// Number of required fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the schema declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, ValueType)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, ValueType)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, ty)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {ty}")?;
        }
        f.write_str("}")
    }
}
