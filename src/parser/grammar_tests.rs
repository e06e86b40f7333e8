//! Grammar tests, modeled on `plotnik-lib::ql::parser_tests`: parse a query,
//! snapshot a compact debug rendering of the tree.

use crate::ast::{Node, serialize};
use crate::error::ParseError;
use crate::parser::parse;
use indoc::indoc;

fn dump(input: &str) -> String {
    match parse(input) {
        Ok(Some(node)) => format!("{:#?}", node),
        Ok(None) => "<empty>".to_string(),
        Err(err) => format!("error: {err}"),
    }
}

#[test]
fn empty_input() {
    assert_eq!(dump(""), "<empty>");
    assert_eq!(dump("   "), "<empty>");
}

#[test]
fn bare_word() {
    let node = parse("foo").unwrap().unwrap();
    assert!(matches!(node, Node::Word { ref value, .. } if value == "foo"));
}

#[test]
fn search_field_over_word() {
    let node = parse("level:ERROR").unwrap().unwrap();
    match node {
        Node::SearchField { name, expr, .. } => {
            assert_eq!(name, "level");
            assert!(matches!(*expr, Node::Word { ref value, .. } if value == "ERROR"));
        }
        other => panic!("expected SearchField, got {other:?}"),
    }
}

#[test]
fn and_or_precedence() {
    let node = parse("a OR b AND c").unwrap().unwrap();
    match node {
        Node::OrOperation { operands, .. } => {
            assert_eq!(operands.len(), 2);
            assert!(matches!(operands[0], Node::Word { .. }));
            assert!(matches!(operands[1], Node::AndOperation { .. }));
        }
        other => panic!("expected OrOperation, got {other:?}"),
    }
}

#[test]
fn implicit_and_with_no_operator_is_unknown_operation() {
    let node = parse("foo bar").unwrap().unwrap();
    assert!(matches!(node, Node::UnknownOperation { ref operands, .. } if operands.len() == 2));
}

#[test]
fn field_group() {
    let node = parse("title:(fast AND furious)").unwrap().unwrap();
    match node {
        Node::SearchField { expr, .. } => {
            assert!(matches!(*expr, Node::FieldGroup { .. }));
        }
        other => panic!("expected SearchField, got {other:?}"),
    }
}

#[test]
fn inclusive_and_exclusive_ranges() {
    let node = parse("[1 TO 10]").unwrap().unwrap();
    assert!(matches!(
        node,
        Node::Range {
            include_low: true,
            include_high: true,
            ..
        }
    ));

    let node = parse("{1 TO 10}").unwrap().unwrap();
    assert!(matches!(
        node,
        Node::Range {
            include_low: false,
            include_high: false,
            ..
        }
    ));

    let node = parse("[1 TO 10}").unwrap().unwrap();
    assert!(matches!(
        node,
        Node::Range {
            include_low: true,
            include_high: false,
            ..
        }
    ));
}

#[test]
fn range_with_wildcard_endpoint() {
    let node = parse("[* TO 10]").unwrap().unwrap();
    assert!(matches!(node, Node::Range { ref low, .. } if low == "*"));
}

#[test]
fn fuzzy_and_proximity() {
    let node = parse("roam~0.8").unwrap().unwrap();
    assert!(matches!(node, Node::Fuzzy { .. }));

    let node = parse(r#""jakarta apache"~10"#).unwrap().unwrap();
    assert!(matches!(node, Node::Proximity { .. }));
}

#[test]
fn boost_on_word_folds_into_value() {
    let node = parse("foo^4").unwrap().unwrap();
    assert!(matches!(node, Node::Word { ref value, .. } if value == "foo^4"));
}

#[test]
fn boost_on_group_is_a_boosted_node() {
    let node = parse("(foo bar)^4").unwrap().unwrap();
    assert!(matches!(node, Node::Boosted { .. }));
}

#[test]
fn not_plus_prohibit_prefixes() {
    assert!(matches!(parse("NOT foo").unwrap().unwrap(), Node::Not { .. }));
    assert!(matches!(parse("+foo").unwrap().unwrap(), Node::Plus { .. }));
    assert!(matches!(parse("-foo").unwrap().unwrap(), Node::Prohibit { .. }));
}

#[test]
fn unmatched_parenthesis_error_message_is_exact() {
    let err = parse("(a AND b").unwrap_err();
    assert_eq!(err, ParseError::UnmatchedParenthesisError);
    assert_eq!(
        err.to_string(),
        "Syntax error in input : unexpected end of expression (maybe due to unmatched parenthesis) at the end!"
    );
}

#[test]
fn illegal_character_error_carries_position() {
    let err = parse("foo !bar").unwrap_err();
    match err {
        ParseError::LexError { char, pos } => {
            assert_eq!(char, "!");
            assert_eq!(pos, 4);
        }
        other => panic!("expected LexError, got {other:?}"),
    }
}

#[test]
fn serialize_round_trips_a_multi_clause_query() {
    let input = indoc! {"
        level:ERROR AND (status:500 OR status:502) AND NOT host:canary
    "}
    .trim();
    let node = parse(input).unwrap().unwrap();
    assert_eq!(serialize(&node), input);
}
