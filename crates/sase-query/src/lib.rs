//! Predicate evaluation for SASE pattern matching
//!
//! This crate is the condition-evaluation core of a SASE-style
//! complex-event-processing engine. The surrounding automaton tracks
//! candidate matches against the event stream; every time a candidate
//! captures another event, the automaton re-evaluates the predicates
//! guarding its transitions against the candidate's
//! [`sase_events::CapturedEvents`] snapshot.
//!
//! Because a predicate may refer to events that have not arrived yet,
//! evaluation is three-valued ([`PredicateResult`]):
//!
//! - `Positive`: the condition holds for this candidate
//! - `Negative`: the condition cannot hold; the candidate is dead
//! - `Uncertain`: a referenced alias is unbound; keep the candidate
//!   pending and re-evaluate once more events are captured
//!
//! Deciding when an `Uncertain` candidate is finally given up on (its
//! event sequence is known to be closed) is the automaton's job, not
//! this crate's.
//!
//! # Building blocks
//!
//! - [`ValueExpr`]: reads a value out of the binding — an event
//!   attribute ([`AttributeExpr`]) or a constant ([`LiteralExpr`])
//! - [`Predicate`]: an evaluable boolean condition with a query-text
//!   rendering and a report of the aliases it reads
//! - [`OperatorPredicate`]: compares two value expressions with one
//!   [`CompareOp`]; equality is structural over any value, ordering is
//!   numeric-only
//! - [`AndPredicate`], [`OrPredicate`], [`NotPredicate`]: three-valued
//!   combinations of child predicates
//!
//! Predicates are built once at query-compile time, are immutable and
//! `Send + Sync`, and may be evaluated concurrently against independent
//! binding snapshots. Evaluation never returns a raw error: unbound
//! aliases surface as `Uncertain`, and every other failure is reported
//! through the injected [`DiagnosticSink`] and terminates the candidate
//! with `Negative`.

pub mod diagnostics;
pub mod error;
pub mod expr;
pub mod logical;
pub mod predicate;
pub mod result;

pub use diagnostics::{
    CollectingSink, Diagnostic, DiagnosticSink, LogSink, NullSink, Severity, SharedSink,
};
pub use error::{EvalError, EvalResult};
pub use expr::{AttributeExpr, LiteralExpr, ValueExpr};
pub use logical::{AndPredicate, NotPredicate, OrPredicate};
pub use predicate::{CompareOp, OperatorPredicate, Predicate};
pub use result::PredicateResult;
