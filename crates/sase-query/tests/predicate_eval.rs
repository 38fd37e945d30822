//! End-to-end predicate evaluation against growing candidate bindings
//!
//! Exercises the contract the automaton relies on: three-valued results
//! over partial bindings, fail-fast termination on query defects, and
//! re-evaluation of immutable predicates as snapshots grow.

use pretty_assertions::assert_eq;
use rstest::rstest;
use sase_events::{CapturedEvents, Event};
use sase_query::{
    AttributeExpr, CollectingSink, CompareOp, LiteralExpr, NullSink, OperatorPredicate, Predicate,
    PredicateResult, Severity, ValueExpr,
};
use std::sync::Arc;

fn attr(alias: &str, name: &str) -> Arc<dyn ValueExpr> {
    Arc::new(AttributeExpr::new(alias, [name]))
}

fn lit(value: f64) -> Arc<dyn ValueExpr> {
    Arc::new(LiteralExpr::new(value))
}

fn a_x_gt_5() -> OperatorPredicate {
    OperatorPredicate::new(attr("a", "x"), CompareOp::Gt, lit(5.0), Arc::new(NullSink))
}

#[test]
fn unbound_alias_keeps_candidate_pending() {
    assert_eq!(
        a_x_gt_5().evaluate(&CapturedEvents::new()),
        PredicateResult::Uncertain
    );
}

#[rstest]
#[case(10.0, PredicateResult::Positive)]
#[case(3.0, PredicateResult::Negative)]
fn bound_alias_decides(#[case] x: f64, #[case] expected: PredicateResult) {
    let evs = CapturedEvents::new().extend("a", Event::new("reading").with_attr("x", x));
    assert_eq!(a_x_gt_5().evaluate(&evs), expected);
}

#[test]
fn non_numeric_operand_terminates_and_logs() {
    let sink = Arc::new(CollectingSink::new());
    let p = OperatorPredicate::new(attr("a", "x"), CompareOp::Gt, lit(5.0), sink.clone());
    let evs = CapturedEvents::new().extend("a", Event::new("reading").with_attr("x", "ten"));

    assert_eq!(p.evaluate(&evs), PredicateResult::Negative);

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, Severity::Error);
    assert_eq!(entries[0].query_text, "a.x > 5");
}

#[test]
fn equality_across_two_aliases() {
    let evs = CapturedEvents::new()
        .extend("a", Event::new("reading").with_attr("x", 5.0))
        .extend("c", Event::new("reading").with_attr("x", 5.0));
    let p = OperatorPredicate::new(
        attr("a", "x"),
        CompareOp::Eq,
        attr("c", "x"),
        Arc::new(NullSink),
    );
    assert_eq!(p.evaluate(&evs), PredicateResult::Positive);
}

#[test]
fn missing_right_operand_terminates_and_renders_defensively() {
    let sink = Arc::new(CollectingSink::new());
    let p = OperatorPredicate::from_parts(Some(attr("a", "x")), CompareOp::Gt, None, sink.clone());

    assert_eq!(
        p.evaluate(&CapturedEvents::new()),
        PredicateResult::Negative
    );
    assert_eq!(p.query_text(), "a.x >");
    assert_eq!(sink.entries().len(), 1);
}

#[test]
fn uncertain_whenever_every_used_alias_is_unbound() {
    let predicates: Vec<OperatorPredicate> = CompareOp::ALL
        .into_iter()
        .map(|op| OperatorPredicate::new(attr("a", "x"), op, attr("b", "y"), Arc::new(NullSink)))
        .collect();

    // A binding that holds none of the used aliases
    let evs = CapturedEvents::new().extend("z", Event::new("reading").with_attr("x", 1.0));

    for p in &predicates {
        assert!(!p.used_aliases().iter().any(|a| evs.contains_alias(a)));
        assert_eq!(p.evaluate(&evs), PredicateResult::Uncertain, "{}", p.query_text());
    }
}

#[test]
fn re_evaluation_as_bindings_grow() {
    let p = OperatorPredicate::new(
        attr("a", "x"),
        CompareOp::Lt,
        attr("b", "x"),
        Arc::new(NullSink),
    );

    let empty = CapturedEvents::new();
    assert_eq!(p.evaluate(&empty), PredicateResult::Uncertain);

    let one = empty.extend("a", Event::new("reading").with_attr("x", 1.0));
    assert_eq!(p.evaluate(&one), PredicateResult::Uncertain);

    let two = one.extend("b", Event::new("reading").with_attr("x", 2.0));
    assert_eq!(p.evaluate(&two), PredicateResult::Positive);

    // Earlier snapshots still evaluate the same way
    assert_eq!(p.evaluate(&one), PredicateResult::Uncertain);
    assert_eq!(p.evaluate(&empty), PredicateResult::Uncertain);
}

#[test]
fn concurrent_evaluation_against_independent_snapshots() {
    let p = Arc::new(a_x_gt_5());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let p = Arc::clone(&p);
            std::thread::spawn(move || {
                let evs = CapturedEvents::new()
                    .extend("a", Event::new("reading").with_attr("x", i as f64));
                (i, p.evaluate(&evs))
            })
        })
        .collect();

    for handle in handles {
        let (i, result) = handle.join().unwrap();
        assert_eq!(result, PredicateResult::from_bool(i > 5));
    }
}
