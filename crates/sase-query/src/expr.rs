//! Value expressions: the operands of predicates

use crate::error::{EvalError, EvalResult};
use sase_events::{CapturedEvents, EventValue};

/// An expression that reads a value out of a partially-bound candidate.
///
/// Implementations are immutable after construction, `Send + Sync`, and
/// resolve purely from the snapshot they are handed; they never retain a
/// reference to it beyond the call.
pub trait ValueExpr: Send + Sync {
    /// Resolve this expression against the candidate's bindings.
    ///
    /// Fails with [`EvalError::EventNotFound`] when a required alias has
    /// no captured event yet; any other failure is a permanent defect of
    /// the query or the data.
    fn value(&self, events: &CapturedEvents) -> EvalResult<EventValue>;

    /// Canonical query-text rendering, for diagnostics and tooling
    fn query_text(&self) -> String;

    /// Aliases this expression reads; duplicates are acceptable, callers
    /// only need the union
    fn used_aliases(&self) -> Vec<String>;
}

/// Attribute access into an aliased event, e.g. `a.price` or
/// `a.meta.venue` for nested maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeExpr {
    alias: String,
    path: Vec<String>,
}

impl AttributeExpr {
    /// Create an attribute access for `alias` and a non-empty attribute
    /// path (one segment per nesting level)
    pub fn new<I, S>(alias: impl Into<String>, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            alias: alias.into(),
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    fn dotted_path(&self) -> String {
        self.path.join(".")
    }
}

impl ValueExpr for AttributeExpr {
    fn value(&self, events: &CapturedEvents) -> EvalResult<EventValue> {
        let event = events
            .lookup(&self.alias)
            .ok_or_else(|| EvalError::event_not_found(&self.alias))?;

        let (first, rest) = self
            .path
            .split_first()
            .ok_or_else(|| EvalError::malformed("attribute path must not be empty"))?;

        let mut current = event
            .attr(first)
            .ok_or_else(|| EvalError::attribute_not_found(&self.alias, self.dotted_path()))?;

        for segment in rest {
            current = match current {
                EventValue::Map(_) => current
                    .get(segment)
                    .ok_or_else(|| EvalError::attribute_not_found(&self.alias, self.dotted_path()))?,
                other => {
                    return Err(EvalError::type_mismatch("Map", other.type_name()));
                }
            };
        }

        Ok(current.clone())
    }

    fn query_text(&self) -> String {
        format!("{}.{}", self.alias, self.dotted_path())
    }

    fn used_aliases(&self) -> Vec<String> {
        vec![self.alias.clone()]
    }
}

/// A constant value appearing literally in the query
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr(EventValue);

impl LiteralExpr {
    /// Wrap a constant value
    pub fn new(value: impl Into<EventValue>) -> Self {
        Self(value.into())
    }
}

impl ValueExpr for LiteralExpr {
    fn value(&self, _events: &CapturedEvents) -> EvalResult<EventValue> {
        Ok(self.0.clone())
    }

    fn query_text(&self) -> String {
        self.0.to_string()
    }

    fn used_aliases(&self) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sase_events::Event;
    use serde_json::json;

    fn bindings() -> CapturedEvents {
        let event = Event::from_json(
            "trade",
            json!({"price": 10.0, "meta": {"venue": "X", "depth": {"bid": 3.0}}}),
        )
        .unwrap();
        CapturedEvents::new().extend("a", event)
    }

    #[test]
    fn test_attribute_resolution() {
        let expr = AttributeExpr::new("a", ["price"]);
        assert_eq!(expr.value(&bindings()).unwrap(), EventValue::Float(10.0));
    }

    #[test]
    fn test_nested_attribute_resolution() {
        let expr = AttributeExpr::new("a", ["meta", "depth", "bid"]);
        assert_eq!(expr.value(&bindings()).unwrap(), EventValue::Float(3.0));
    }

    #[test]
    fn test_unbound_alias_is_event_not_found() {
        let expr = AttributeExpr::new("b", ["price"]);
        let err = expr.value(&bindings()).unwrap_err();
        assert!(err.is_unbound_alias());
        assert_eq!(err, EvalError::event_not_found("b"));
    }

    #[test]
    fn test_missing_attribute() {
        let expr = AttributeExpr::new("a", ["volume"]);
        let err = expr.value(&bindings()).unwrap_err();
        assert!(!err.is_unbound_alias());
        assert_eq!(err, EvalError::attribute_not_found("a", "volume"));
    }

    #[test]
    fn test_traversal_through_non_map() {
        let expr = AttributeExpr::new("a", ["price", "cents"]);
        let err = expr.value(&bindings()).unwrap_err();
        assert_eq!(err, EvalError::type_mismatch("Map", "Float"));
    }

    #[test]
    fn test_attribute_query_text_and_aliases() {
        let expr = AttributeExpr::new("a", ["meta", "venue"]);
        assert_eq!(expr.query_text(), "a.meta.venue");
        assert_eq!(expr.used_aliases(), vec!["a".to_string()]);
    }

    #[test]
    fn test_literal() {
        let expr = LiteralExpr::new(5.0);
        assert_eq!(expr.value(&CapturedEvents::new()).unwrap(), EventValue::Float(5.0));
        assert_eq!(expr.query_text(), "5");
        assert!(expr.used_aliases().is_empty());

        let text = LiteralExpr::new("ten");
        assert_eq!(text.query_text(), "\"ten\"");
    }
}
