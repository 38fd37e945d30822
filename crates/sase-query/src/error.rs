//! Evaluation errors for the predicate core

use thiserror::Error;

/// Result type for value-expression resolution
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur while resolving value expressions.
///
/// These never escape [`crate::Predicate::evaluate`]: the unbound-alias
/// condition becomes [`crate::PredicateResult::Uncertain`], everything
/// else is reported to the diagnostic sink and becomes
/// [`crate::PredicateResult::Negative`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    /// The referenced alias has no captured event yet.
    ///
    /// Routine and expected during partial-sequence evaluation; the only
    /// error that resolves itself as more events arrive.
    #[error("no event captured for alias '{alias}'")]
    EventNotFound { alias: String },

    /// The aliased event has no such attribute
    #[error("event '{alias}' has no attribute '{path}'")]
    AttributeNotFound { alias: String, path: String },

    /// Type mismatch while extracting or comparing values
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// The predicate itself is ill-formed (e.g. a missing operand)
    #[error("malformed predicate: {message}")]
    MalformedPredicate { message: String },
}

impl EvalError {
    /// Create an unbound-alias error
    pub fn event_not_found(alias: impl Into<String>) -> Self {
        Self::EventNotFound {
            alias: alias.into(),
        }
    }

    /// Create a missing-attribute error
    pub fn attribute_not_found(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self::AttributeNotFound {
            alias: alias.into(),
            path: path.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a malformed-predicate error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPredicate {
            message: message.into(),
        }
    }

    /// Whether this is the unbound-alias condition, the one failure that
    /// may resolve itself as more events are captured
    pub fn is_unbound_alias(&self) -> bool {
        matches!(self, Self::EventNotFound { .. })
    }
}
