//! Predicates: evaluable boolean conditions over captured events

use crate::diagnostics::{Diagnostic, SharedSink};
use crate::error::{EvalError, EvalResult};
use crate::expr::ValueExpr;
use crate::result::PredicateResult;
use sase_events::{CapturedEvents, EventValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A boolean condition guarding an automaton transition.
///
/// Built once at query-compile time, immutable and freely shared across
/// candidates; `evaluate` is a pure function of the predicate's structure
/// and the binding snapshot, so the automaton may re-evaluate as often as
/// it likes while a candidate's bindings grow.
pub trait Predicate: Send + Sync {
    /// Evaluate against the candidate's bindings.
    ///
    /// `Uncertain` means a referenced alias has no captured event yet;
    /// the automaton should keep the candidate pending and retry later.
    /// No raw error ever escapes: construction defects and type
    /// mismatches are reported to the diagnostic sink and terminate the
    /// candidate with `Negative`.
    fn evaluate(&self, events: &CapturedEvents) -> PredicateResult;

    /// Canonical query-text rendering, for diagnostics and tooling
    fn query_text(&self) -> String;

    /// Aliases consulted during evaluation, in operand order; duplicates
    /// are acceptable, callers only need the union
    fn used_aliases(&self) -> Vec<String>;
}

/// The comparison operators of the query language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    /// `==`, structural equality over any value
    Eq,
    /// `!=`
    Ne,
    /// `>`, numeric operands only
    Gt,
    /// `<`, numeric operands only
    Lt,
    /// `>=`, numeric operands only
    Ge,
    /// `<=`, numeric operands only
    Le,
}

impl CompareOp {
    /// All operators, in declaration order
    pub const ALL: [CompareOp; 6] = [
        CompareOp::Eq,
        CompareOp::Ne,
        CompareOp::Gt,
        CompareOp::Lt,
        CompareOp::Ge,
        CompareOp::Le,
    ];

    /// Canonical query-text symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Ge => ">=",
            Self::Le => "<=",
        }
    }

    /// Whether this operator requires numeric operands
    pub fn is_ordering(self) -> bool {
        matches!(self, Self::Gt | Self::Lt | Self::Ge | Self::Le)
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A predicate comparing two value expressions with one [`CompareOp`].
///
/// Equality and inequality compare resolved values structurally,
/// whatever their tags. Ordering operators require both operands to
/// resolve to floats and follow IEEE-754, so `NaN` never compares
/// positively under any of them.
pub struct OperatorPredicate {
    left: Option<Arc<dyn ValueExpr>>,
    op: CompareOp,
    right: Option<Arc<dyn ValueExpr>>,
    sink: SharedSink,
}

impl OperatorPredicate {
    /// Create a predicate from two operands.
    ///
    /// `sink` receives diagnostics for failures that terminate a
    /// candidate (missing attributes, ordering over non-numeric data).
    pub fn new(
        left: Arc<dyn ValueExpr>,
        op: CompareOp,
        right: Arc<dyn ValueExpr>,
        sink: SharedSink,
    ) -> Self {
        Self::from_parts(Some(left), op, Some(right), sink)
    }

    /// Create a predicate whose operands may be missing.
    ///
    /// A partially-constructed predicate still renders query text for
    /// diagnostics, but evaluating it reports a malformed-predicate
    /// diagnostic and terminates the candidate.
    pub fn from_parts(
        left: Option<Arc<dyn ValueExpr>>,
        op: CompareOp,
        right: Option<Arc<dyn ValueExpr>>,
        sink: SharedSink,
    ) -> Self {
        Self {
            left,
            op,
            right,
            sink,
        }
    }

    fn operand_values(&self, events: &CapturedEvents) -> EvalResult<(EventValue, EventValue)> {
        let (Some(left), Some(right)) = (&self.left, &self.right) else {
            return Err(EvalError::malformed(
                "left and right operands must both be present",
            ));
        };
        Ok((left.value(events)?, right.value(events)?))
    }

    fn evaluate_ordering(&self, left: &EventValue, right: &EventValue) -> PredicateResult {
        let (Some(l), Some(r)) = (left.as_float(), right.as_float()) else {
            self.sink.report(&Diagnostic::error(
                self.query_text(),
                format!(
                    "ordering comparison '{}' requires numeric operands, found {} and {}",
                    self.op.symbol(),
                    left.type_name(),
                    right.type_name()
                ),
            ));
            return PredicateResult::Negative;
        };

        let holds = match self.op {
            CompareOp::Gt => l > r,
            CompareOp::Lt => l < r,
            CompareOp::Ge => l >= r,
            CompareOp::Le => l <= r,
            CompareOp::Eq | CompareOp::Ne => {
                // Dispatched in evaluate; reaching here is an internal
                // inconsistency and terminates the candidate.
                self.sink.report(&Diagnostic::error(
                    self.query_text(),
                    format!("operator '{}' is not an ordering", self.op.symbol()),
                ));
                return PredicateResult::Negative;
            }
        };
        PredicateResult::from_bool(holds)
    }
}

impl Predicate for OperatorPredicate {
    fn evaluate(&self, events: &CapturedEvents) -> PredicateResult {
        let (left, right) = match self.operand_values(events) {
            Ok(values) => values,
            Err(err) if err.is_unbound_alias() => return PredicateResult::Uncertain,
            Err(err) => {
                self.sink.report(&Diagnostic::error(
                    self.query_text(),
                    format!("cannot resolve operands: {err}"),
                ));
                return PredicateResult::Negative;
            }
        };

        match self.op {
            CompareOp::Eq => PredicateResult::from_bool(left == right),
            CompareOp::Ne => PredicateResult::from_bool(left != right),
            _ => self.evaluate_ordering(&left, &right),
        }
    }

    fn query_text(&self) -> String {
        let mut text = String::new();
        if let Some(left) = &self.left {
            text.push_str(&left.query_text());
        }
        text.push(' ');
        text.push_str(self.op.symbol());
        if let Some(right) = &self.right {
            text.push(' ');
            text.push_str(&right.query_text());
        }
        text
    }

    fn used_aliases(&self) -> Vec<String> {
        let mut aliases = Vec::new();
        if let Some(left) = &self.left {
            aliases.extend(left.used_aliases());
        }
        if let Some(right) = &self.right {
            aliases.extend(right.used_aliases());
        }
        aliases
    }
}
