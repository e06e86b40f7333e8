//! Field-extraction scenarios, including the S1–S3 table in spec.md §8.

use super::{FULL_TEXT_SENTINEL, SyntaxKind, parse_fields};
use crate::error::ParseError;

#[test]
fn empty_query_has_no_fields() {
    assert_eq!(parse_fields("").unwrap(), Vec::new());
}

#[test]
fn single_word_is_one_field_on_the_sentinel() {
    let fields = parse_fields("foo").unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, FULL_TEXT_SENTINEL);
    assert_eq!(fields[0].operator, "~=");
    assert_eq!(fields[0].value, "foo");
    assert_eq!(fields[0].kind, SyntaxKind::Word);
}

/// S1: `level: ERROR AND status: 500` — two distinct field names, both
/// `~=` per §4.3 (the spec's own table flags this explicitly).
#[test]
fn s1_two_distinct_search_fields() {
    let fields = parse_fields("level: ERROR AND status: 500").unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name, "level");
    assert_eq!(fields[0].operator, "~=");
    assert_eq!(fields[0].value, "ERROR");
    assert_eq!(fields[1].name, "status");
    assert_eq!(fields[1].operator, "~=");
    assert_eq!(fields[1].value, "500");
}

/// S2: `count: >=100` — the comparison prefix is lifted into `operator`.
#[test]
fn s2_comparison_operator_lifted_out_of_word_value() {
    let fields = parse_fields("count: >=100").unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, "count");
    assert_eq!(fields[0].operator, ">=");
    assert_eq!(fields[0].value, "100");
}

#[test]
fn comparison_prefixes_respect_longest_match_first() {
    for (query, op, value) in [
        (">=100", ">=", "100"),
        ("<=100", "<=", "100"),
        (">100", ">", "100"),
        ("<100", "<", "100"),
    ] {
        let fields = parse_fields(query).unwrap();
        assert_eq!(fields[0].operator, op, "query {query:?}");
        assert_eq!(fields[0].value, value, "query {query:?}");
    }
}

/// S3: `a AND a AND a` — three fields on the sentinel, renamed after
/// collision detection in traversal order.
#[test]
fn s3_duplicate_sentinel_names_are_renamed_in_order() {
    let fields = parse_fields("a AND a AND a").unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0].name, format!("{FULL_TEXT_SENTINEL}(1)"));
    assert_eq!(fields[1].name, format!("{FULL_TEXT_SENTINEL}(2)"));
    assert_eq!(fields[2].name, format!("{FULL_TEXT_SENTINEL}(3)"));
}

#[test]
fn a_name_seen_once_is_left_untouched() {
    let fields = parse_fields("level: ERROR").unwrap();
    assert_eq!(fields[0].name, "level");
}

#[test]
fn field_names_are_always_unique() {
    let fields = parse_fields("level:a AND level:b AND host:c").unwrap();
    let mut names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    let len_before = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), len_before);
}

#[test]
fn phrase_field() {
    let fields = parse_fields(r#""hello world""#).unwrap();
    assert_eq!(fields[0].operator, "=");
    assert_eq!(fields[0].kind, SyntaxKind::Phrase);
    assert_eq!(fields[0].value, r#""hello world""#);
}

#[test]
fn field_group_has_no_name_and_parenthesized_value() {
    let fields = parse_fields("title:(fast AND furious)").unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].operator, "()");
    assert_eq!(fields[0].kind, SyntaxKind::FieldGroup);
    assert_eq!(fields[0].value, "(fast AND furious)");
}

#[test]
fn range_operators_reflect_inclusivity() {
    assert_eq!(parse_fields("[1 TO 10]").unwrap()[0].operator, "[]");
    assert_eq!(parse_fields("{1 TO 10}").unwrap()[0].operator, "{}");
    assert_eq!(parse_fields("[1 TO 10}").unwrap()[0].operator, "[}");
    assert_eq!(parse_fields("{1 TO 10]").unwrap()[0].operator, "{]");
}

#[test]
fn not_plus_prohibit_operators() {
    assert_eq!(parse_fields("NOT foo").unwrap()[0].operator, "NOT");
    assert_eq!(parse_fields("+foo").unwrap()[0].operator, "+");
    assert_eq!(parse_fields("-foo").unwrap()[0].operator, "-");
}

#[test]
fn unknown_operation_fails_field_extraction() {
    let err = parse_fields("foo bar").unwrap_err();
    assert!(matches!(err, ParseError::UnknownOperatorError { .. }));
}

#[test]
fn every_field_has_a_non_empty_kind_and_operator() {
    let fields = parse_fields("level:ERROR AND [1 TO 2] AND \"phrase\" AND NOT x").unwrap();
    for f in &fields {
        assert!(!f.operator.is_empty());
    }
}

/// Callers embedding this crate need `Field` to serialize cleanly, since it
/// is the crate's one outward-facing data type likely to cross a wire.
#[test]
fn a_field_serializes_to_the_expected_json_shape() {
    let fields = parse_fields("count: >=100").unwrap();
    let json = serde_json::to_string_pretty(&fields).expect("json serialization failed");
    insta::assert_snapshot!(json, @r#"
    [
      {
        "pos": 0,
        "name": "count",
        "kind": "Word",
        "operator": ">=",
        "value": "100"
      }
    ]
    "#);
}
