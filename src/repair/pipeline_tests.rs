//! Repair pipeline tests: the S4–S7 scenario table and the invariants in
//! spec.md §8.

use super::{DiagnosticKind, repair};
use crate::fields::parse_fields;

fn diagnostics(message: &str) -> Vec<&str> {
    if message.is_empty() {
        Vec::new()
    } else {
        message.split('\n').collect()
    }
}

#[test]
fn well_formed_query_is_untouched_and_legal() {
    let result = repair("level: ERROR AND status: 500".to_string());
    assert_eq!(result.keyword, "level: ERROR AND status: 500");
    assert!(result.is_legal);
    assert!(result.is_resolved);
    assert_eq!(result.message, "");
}

#[test]
fn empty_query_is_legal() {
    let result = repair(String::new());
    assert!(result.is_legal);
    assert!(result.is_resolved);
}

/// S4: Chinese curly quotes are converted to straight quotes.
#[test]
fn s4_chinese_punctuation() {
    let result = repair("name: \u{201c}bob\u{201d}".to_string());
    assert_eq!(result.keyword, "name: \"bob\"");
    assert!(result.is_resolved);
    assert_eq!(
        diagnostics(&result.message),
        vec![DiagnosticKind::ChinesePunctuation.message()]
    );
}

/// S5: an empty range endpoint is substituted with `*`.
#[test]
fn s5_illegal_range_syntax() {
    let result = repair("ts: [ TO 100]".to_string());
    assert_eq!(result.keyword, "ts: [* TO 100]");
    assert!(result.is_resolved);
    assert_eq!(
        diagnostics(&result.message),
        vec![DiagnosticKind::IllegalRangeSyntax.message()]
    );
}

/// S6: one mismatched opening bracket is removed.
#[test]
fn s6_mismatched_brackets() {
    let result = repair("((a AND b)".to_string());
    assert_eq!(result.keyword, "(a AND b)");
    assert!(result.is_resolved);
    assert_eq!(
        diagnostics(&result.message),
        vec![DiagnosticKind::MismatchedBrackets.message()]
    );
}

/// S7: two adjacent atoms with no operator are rewritten as an explicit AND.
#[test]
fn s7_unknown_operator() {
    let result = repair("foo bar".to_string());
    assert_eq!(result.keyword, "foo AND bar");
    assert!(result.is_resolved);
    assert_eq!(
        diagnostics(&result.message),
        vec![DiagnosticKind::UnknownOperator.message()]
    );
}

#[test]
fn trailing_colon_is_dropped() {
    let result = repair("foo:".to_string());
    assert_eq!(result.keyword, "foo");
    assert!(result.is_resolved);
    assert_eq!(
        diagnostics(&result.message),
        vec![DiagnosticKind::StrayColon.message()]
    );
}

#[test]
fn unmatched_open_bracket_is_repaired_by_removing_one_character() {
    let result = repair("(a AND b".to_string());
    assert!(result.is_resolved);
    assert!(parse_fields(&result.keyword).is_ok());
}

/// Deleting the illegal character leaves two atoms with no connective,
/// so the unknown-operator inspector also fires within the same pipeline
/// run — both diagnostics show up in one `repair` call.
#[test]
fn illegal_character_is_deleted() {
    let result = repair("foo !bar".to_string());
    assert_eq!(result.keyword, "foo AND bar");
    assert!(result.is_resolved);
    let found = diagnostics(&result.message);
    assert!(found.contains(&DiagnosticKind::IllegalCharacter.message()));
    assert!(found.contains(&DiagnosticKind::UnknownOperator.message()));
}

#[test]
fn multiple_illegal_characters_are_deleted_across_iterations() {
    let result = repair("foo !!! bar".to_string());
    assert!(result.is_resolved);
    assert!(parse_fields(&result.keyword).is_ok());
    assert!(!result.keyword.contains('!'));
}

/// Invariant 1: a well-formed query is returned unchanged and legal.
#[test]
fn invariant_well_formed_is_unchanged() {
    for q in [
        "level: ERROR",
        "a AND b OR c",
        "[1 TO 10]",
        "\"a phrase\"~3",
    ] {
        let result = repair(q.to_string());
        assert_eq!(result.keyword, q);
        assert!(result.is_legal, "query {q:?} should stay legal");
    }
}

/// Invariant 2: resolution implies the repaired keyword parses.
#[test]
fn invariant_resolved_implies_parseable() {
    for q in [
        "name: \u{201c}bob\u{201d}",
        "ts: [ TO 100]",
        "((a AND b)",
        "foo bar",
        "foo:",
    ] {
        let result = repair(q.to_string());
        assert!(result.is_resolved, "query {q:?} should resolve");
        assert!(parse_fields(&result.keyword).is_ok());
    }
}

/// Invariant 5: repairing an already-repaired keyword is a no-op.
#[test]
fn invariant_idempotent() {
    for q in [
        "name: \u{201c}bob\u{201d}",
        "ts: [ TO 100]",
        "((a AND b)",
        "foo bar",
        "foo:",
        "(a AND b",
    ] {
        let once = repair(q.to_string());
        let twice = repair(once.keyword.clone());
        assert_eq!(once.keyword, twice.keyword, "query {q:?}");
    }
}

#[test]
fn is_legal_is_exactly_whether_diagnostics_are_empty() {
    for q in [
        "level: ERROR",
        "ts: [ TO 100]",
        "((a AND b)",
        "foo bar",
        "title:()",
        "((((",
    ] {
        let result = repair(q.to_string());
        assert_eq!(
            result.is_legal,
            result.message.is_empty(),
            "query {q:?} produced message {:?} but is_legal={}",
            result.message,
            result.is_legal
        );
    }
}
