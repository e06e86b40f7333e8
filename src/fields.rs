//! Field Extractor (C3, spec.md §4.3).
//!
//! A depth-first walker with one handler per AST kind, ported from
//! `LuceneParser`'s per-node `parsing_*` methods in
//! `original_source/apps/utils/lucene.py`, followed by the same
//! `Counter`-based collision rename pass as `LuceneParser.parsing`.

use crate::ast::{Node, serialize};
use crate::error::ParseError;
use crate::span::Pos;
use serde::Serialize;
use std::collections::HashMap;

#[cfg(test)]
#[path = "fields_tests.rs"]
mod fields_tests;

/// Reserved name for fields with no explicit `name:` prefix. Not named in
/// `original_source/` (its `apps/constants.py` wasn't part of the retrieval
/// pack); `"*"` is chosen here, documented in DESIGN.md.
pub const FULL_TEXT_SENTINEL: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SyntaxKind {
    Word,
    Phrase,
    Regex,
    SearchField,
    FieldGroup,
    Group,
    Range,
    Fuzzy,
    Proximity,
    AndOperation,
    OrOperation,
    Not,
    Plus,
    Prohibit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub pos: Pos,
    pub name: String,
    pub kind: SyntaxKind,
    pub operator: String,
    pub value: String,
}

/// Comparison-operator prefixes lifted out of a bare word's value, checked
/// in this order so the two-character forms win over their one-character
/// prefixes.
const WORD_OPERATORS: &[&str] = &[">=", "<=", ">", "<"];

pub fn parse_fields(query: &str) -> Result<Vec<Field>, ParseError> {
    let root = crate::parser::parse(query)?;
    let mut fields = match root {
        Some(node) => extract(&node)?,
        None => Vec::new(),
    };
    rename_collisions(&mut fields);
    Ok(fields)
}

fn extract(node: &Node) -> Result<Vec<Field>, ParseError> {
    match node {
        Node::Word { pos, value } => Ok(vec![word_field(*pos, value)]),
        Node::Phrase { pos, value } => Ok(vec![Field {
            pos: *pos,
            name: FULL_TEXT_SENTINEL.to_string(),
            kind: SyntaxKind::Phrase,
            operator: "=".to_string(),
            value: value.clone(),
        }]),
        Node::Regex { pos, .. } => Ok(vec![Field {
            pos: *pos,
            name: FULL_TEXT_SENTINEL.to_string(),
            kind: SyntaxKind::Regex,
            operator: "~=".to_string(),
            value: serialize(node),
        }]),
        Node::SearchField { pos, name, expr } => {
            let mut sub = extract(expr)?;
            for f in &mut sub {
                f.name = name.clone();
                f.pos = *pos;
            }
            Ok(sub)
        }
        Node::FieldGroup { pos, expr } => Ok(vec![Field {
            pos: *pos,
            name: FULL_TEXT_SENTINEL.to_string(),
            kind: SyntaxKind::FieldGroup,
            operator: "()".to_string(),
            value: format!("({})", serialize(expr)),
        }]),
        Node::Group { expr, .. } => extract(expr),
        Node::Range {
            pos,
            include_low,
            include_high,
            ..
        } => Ok(vec![Field {
            pos: *pos,
            name: FULL_TEXT_SENTINEL.to_string(),
            kind: SyntaxKind::Range,
            operator: range_operator(*include_low, *include_high),
            value: serialize(node),
        }]),
        Node::Fuzzy { pos, .. } => Ok(vec![Field {
            pos: *pos,
            name: FULL_TEXT_SENTINEL.to_string(),
            kind: SyntaxKind::Fuzzy,
            operator: "~=".to_string(),
            value: serialize(node),
        }]),
        Node::Proximity { pos, .. } => Ok(vec![Field {
            pos: *pos,
            name: FULL_TEXT_SENTINEL.to_string(),
            kind: SyntaxKind::Proximity,
            operator: "~=".to_string(),
            value: serialize(node),
        }]),
        Node::AndOperation { operands, .. } => flat_extract(operands),
        Node::OrOperation { operands, .. } => flat_extract(operands),
        Node::Not { pos, expr } => Ok(vec![prefix_field(*pos, "NOT", expr, SyntaxKind::Not)]),
        Node::Plus { pos, expr } => Ok(vec![prefix_field(*pos, "+", expr, SyntaxKind::Plus)]),
        Node::Prohibit { pos, expr } => {
            Ok(vec![prefix_field(*pos, "-", expr, SyntaxKind::Prohibit)])
        }
        Node::UnknownOperation { pos, .. } => {
            Err(ParseError::UnknownOperatorError { pos: *pos })
        }
        Node::Boosted { expr, .. } => extract(expr),
    }
}

fn flat_extract(operands: &[Node]) -> Result<Vec<Field>, ParseError> {
    let mut out = Vec::new();
    for operand in operands {
        out.extend(extract(operand)?);
    }
    Ok(out)
}

fn prefix_field(pos: Pos, operator: &str, expr: &Node, kind: SyntaxKind) -> Field {
    Field {
        pos,
        name: FULL_TEXT_SENTINEL.to_string(),
        kind,
        operator: operator.to_string(),
        value: serialize(expr),
    }
}

fn word_field(pos: Pos, value: &str) -> Field {
    match comparison_prefix(value) {
        Some(op) => Field {
            pos,
            name: FULL_TEXT_SENTINEL.to_string(),
            kind: SyntaxKind::Word,
            operator: op.to_string(),
            value: value[op.len()..].to_string(),
        },
        None => Field {
            pos,
            name: FULL_TEXT_SENTINEL.to_string(),
            kind: SyntaxKind::Word,
            operator: "~=".to_string(),
            value: value.to_string(),
        },
    }
}

/// The leading comparison operator on a bare word's raw value, if any.
/// Shared with C4, which needs the same prefix to preserve a comparison
/// across a rewritten `SearchField` value.
pub(crate) fn comparison_prefix(value: &str) -> Option<&'static str> {
    WORD_OPERATORS.iter().copied().find(|op| value.starts_with(op))
}

fn range_operator(include_low: bool, include_high: bool) -> String {
    let lo = if include_low { '[' } else { '{' };
    let hi = if include_high { ']' } else { '}' };
    format!("{lo}{hi}")
}

/// Renames only the colliding occurrences of each name to `name(1)`,
/// `name(2)`, ... in traversal order; a name seen once is untouched.
/// Collisions between a renamed `x(1)` and a pre-existing natural field
/// named `x` are not cross-checked — an open question in spec.md §9 the
/// original doesn't resolve either.
fn rename_collisions(fields: &mut [Field]) {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for f in fields.iter() {
        *counts.entry(f.name.as_str()).or_insert(0) += 1;
    }
    let mut seen: HashMap<String, u32> = HashMap::new();
    for f in fields.iter_mut() {
        if counts[f.name.as_str()] > 1 {
            let n = seen.entry(f.name.clone()).or_insert(0);
            *n += 1;
            f.name = format!("{}({})", f.name, n);
        }
    }
}
