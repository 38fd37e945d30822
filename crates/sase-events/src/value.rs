//! Runtime values of event attributes

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// The runtime value of an event attribute.
///
/// A closed tagged union: equality is structural and defined across the
/// whole union, while numeric extraction (used by ordering comparisons)
/// succeeds only for [`EventValue::Float`]. Floats follow IEEE-754, so
/// `NaN` is not equal to itself and never orders positively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum EventValue {
    /// Absent/unknown value (JSON null)
    Null,
    /// Boolean value
    Bool(bool),
    /// Numeric value; all numbers are 64-bit floats
    Float(f64),
    /// String value
    String(String),
    /// Ordered list of values
    List(Vec<EventValue>),
    /// Nested attribute map
    Map(IndexMap<String, EventValue>),
}

impl EventValue {
    /// Numeric extraction for ordering comparisons.
    ///
    /// Returns `None` for every non-numeric tag.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Convert to boolean if possible
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert to string slice if possible
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Nested map access, `None` for non-map values
    pub fn get(&self, key: &str) -> Option<&EventValue> {
        match self {
            Self::Map(m) => m.get(key),
            _ => None,
        }
    }

    /// Name of this value's tag, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::List(_) => "List",
            Self::Map(_) => "Map",
        }
    }
}

impl fmt::Display for EventValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for EventValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for EventValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<i64> for EventValue {
    fn from(i: i64) -> Self {
        Self::Float(i as f64)
    }
}

impl From<&str> for EventValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for EventValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<JsonValue> for EventValue {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            // f64::NAN for the (unrepresentable in JSON) non-finite case
            JsonValue::Number(n) => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}
