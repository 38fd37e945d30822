//! Three-valued combinations of predicates
//!
//! Conjunction, disjunction and negation over child predicates. These
//! are pure combinators: they resolve nothing themselves and emit no
//! diagnostics, they only fold their children's results with the
//! Kleene tables on [`PredicateResult`].

use crate::predicate::Predicate;
use crate::result::PredicateResult;
use sase_events::CapturedEvents;
use std::sync::Arc;

fn concat_aliases(operands: &[Arc<dyn Predicate>]) -> Vec<String> {
    operands.iter().flat_map(|p| p.used_aliases()).collect()
}

fn joined_query_text(operands: &[Arc<dyn Predicate>], separator: &str) -> String {
    let parts: Vec<String> = operands.iter().map(|p| p.query_text()).collect();
    format!("({})", parts.join(separator))
}

/// Conjunction: `Positive` only when every child is, `Negative` as soon
/// as any child is.
///
/// An empty conjunction is `Positive`.
pub struct AndPredicate {
    operands: Vec<Arc<dyn Predicate>>,
}

impl AndPredicate {
    /// Combine child predicates conjunctively
    pub fn new(operands: Vec<Arc<dyn Predicate>>) -> Self {
        Self { operands }
    }
}

impl Predicate for AndPredicate {
    fn evaluate(&self, events: &CapturedEvents) -> PredicateResult {
        let mut result = PredicateResult::Positive;
        for operand in &self.operands {
            result = result.and(operand.evaluate(events));
            if result == PredicateResult::Negative {
                break;
            }
        }
        result
    }

    fn query_text(&self) -> String {
        joined_query_text(&self.operands, " && ")
    }

    fn used_aliases(&self) -> Vec<String> {
        concat_aliases(&self.operands)
    }
}

/// Disjunction: `Positive` as soon as any child is, `Negative` only when
/// every child is.
///
/// An empty disjunction is `Negative`.
pub struct OrPredicate {
    operands: Vec<Arc<dyn Predicate>>,
}

impl OrPredicate {
    /// Combine child predicates disjunctively
    pub fn new(operands: Vec<Arc<dyn Predicate>>) -> Self {
        Self { operands }
    }
}

impl Predicate for OrPredicate {
    fn evaluate(&self, events: &CapturedEvents) -> PredicateResult {
        let mut result = PredicateResult::Negative;
        for operand in &self.operands {
            result = result.or(operand.evaluate(events));
            if result == PredicateResult::Positive {
                break;
            }
        }
        result
    }

    fn query_text(&self) -> String {
        joined_query_text(&self.operands, " || ")
    }

    fn used_aliases(&self) -> Vec<String> {
        concat_aliases(&self.operands)
    }
}

/// Negation; `Uncertain` stays `Uncertain`, an undecidable condition
/// does not become decidable by negating it.
pub struct NotPredicate {
    operand: Arc<dyn Predicate>,
}

impl NotPredicate {
    /// Negate a child predicate
    pub fn new(operand: Arc<dyn Predicate>) -> Self {
        Self { operand }
    }
}

impl Predicate for NotPredicate {
    fn evaluate(&self, events: &CapturedEvents) -> PredicateResult {
        self.operand.evaluate(events).negate()
    }

    fn query_text(&self) -> String {
        format!("!({})", self.operand.query_text())
    }

    fn used_aliases(&self) -> Vec<String> {
        self.operand.used_aliases()
    }
}
