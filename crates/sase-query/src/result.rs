//! Three-valued predicate results

use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of evaluating a predicate against a candidate's bindings.
///
/// Evaluation is a pure function of the predicate's structure and the
/// binding snapshot passed in; `Uncertain` results are expected to be
/// re-evaluated by the automaton as more events are captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredicateResult {
    /// The condition holds
    Positive,
    /// The condition does not (and can not) hold; the candidate is dead
    Negative,
    /// Not decidable yet: a referenced alias has no captured event
    Uncertain,
}

impl PredicateResult {
    /// Map a definite boolean outcome
    pub fn from_bool(holds: bool) -> Self {
        if holds { Self::Positive } else { Self::Negative }
    }

    /// Three-valued conjunction
    ///
    /// Truth table (Kleene, with Uncertain as the unknown):
    /// | A         | B         | A and B   |
    /// |-----------|-----------|-----------|
    /// | Positive  | Positive  | Positive  |
    /// | Negative  | any       | Negative  |
    /// | any       | Negative  | Negative  |
    /// | otherwise |           | Uncertain |
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::Negative, _) | (_, Self::Negative) => Self::Negative,
            (Self::Positive, Self::Positive) => Self::Positive,
            _ => Self::Uncertain,
        }
    }

    /// Three-valued disjunction
    ///
    /// Truth table:
    /// | A         | B         | A or B    |
    /// |-----------|-----------|-----------|
    /// | Positive  | any       | Positive  |
    /// | any       | Positive  | Positive  |
    /// | Negative  | Negative  | Negative  |
    /// | otherwise |           | Uncertain |
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::Positive, _) | (_, Self::Positive) => Self::Positive,
            (Self::Negative, Self::Negative) => Self::Negative,
            _ => Self::Uncertain,
        }
    }

    /// Three-valued negation; `Uncertain` stays `Uncertain`
    pub fn negate(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
            Self::Uncertain => Self::Uncertain,
        }
    }

    /// Whether the condition definitely holds
    pub fn is_positive(self) -> bool {
        self == Self::Positive
    }

    /// Whether the candidate should be terminated
    pub fn is_negative(self) -> bool {
        self == Self::Negative
    }

    /// Whether the candidate should be kept pending
    pub fn is_uncertain(self) -> bool {
        self == Self::Uncertain
    }
}

impl fmt::Display for PredicateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Uncertain => write!(f, "uncertain"),
        }
    }
}
