//! Stream events

use crate::EventValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Errors raised while constructing events
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EventError {
    /// Event payloads must be JSON objects
    #[error("event payload must be a JSON object, found {found}")]
    NotAnObject { found: String },
}

/// A single event from the input stream.
///
/// An event carries its event type name and a set of named attributes.
/// Events are immutable once built; the automaton binds them to query
/// aliases inside a [`crate::CapturedEvents`] snapshot, and predicates
/// only ever read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    event_type: String,
    attributes: IndexMap<String, EventValue>,
}

impl Event {
    /// Create an event with no attributes
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<EventValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Build an event from a JSON object payload
    pub fn from_json(event_type: impl Into<String>, payload: JsonValue) -> Result<Self, EventError> {
        match EventValue::from(payload) {
            EventValue::Map(attributes) => Ok(Self {
                event_type: event_type.into(),
                attributes,
            }),
            other => Err(EventError::NotAnObject {
                found: other.type_name().to_string(),
            }),
        }
    }

    /// The event type name
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Look up a top-level attribute
    pub fn attr(&self, name: &str) -> Option<&EventValue> {
        self.attributes.get(name)
    }

    /// Iterate attributes in insertion order
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &EventValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let ev = Event::new("trade").with_attr("price", 10.5).with_attr("symbol", "ACME");
        assert_eq!(ev.event_type(), "trade");
        assert_eq!(ev.attr("price"), Some(&EventValue::Float(10.5)));
        assert_eq!(ev.attr("symbol"), Some(&EventValue::String("ACME".into())));
        assert_eq!(ev.attr("missing"), None);
    }

    #[test]
    fn test_from_json_object() {
        let ev = Event::from_json("trade", json!({"price": 10, "meta": {"venue": "X"}})).unwrap();
        assert_eq!(ev.attr("price"), Some(&EventValue::Float(10.0)));
        assert_eq!(
            ev.attr("meta").and_then(|m| m.get("venue")),
            Some(&EventValue::String("X".into()))
        );
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        let err = Event::from_json("trade", json!([1, 2, 3])).unwrap_err();
        assert_eq!(
            err,
            EventError::NotAnObject {
                found: "List".to_string()
            }
        );
    }
}
