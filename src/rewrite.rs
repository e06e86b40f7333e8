//! AST Rewriter (C4, spec.md §4.4).
//!
//! Grounded in the original's `LuceneTransformer` (`visit_search_field`,
//! `visit_word`) and its `auto_head_tail` wrapper: parse once, replace each
//! addressable node directive-by-directive over the same tree, re-serialize
//! once at the end, then restore the leading/trailing whitespace of the
//! original query.

use crate::ast::{Node, serialize};
use crate::error::ParseError;
use crate::fields::comparison_prefix;
use crate::span::Pos;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "rewrite_tests.rs"]
mod rewrite_tests;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDirective {
    pub pos: Pos,
    pub value: String,
}

/// Parses `trimmed` exactly once and applies every directive to that same
/// tree in turn (grounded in the original's `LuceneTransformer.transform`,
/// which calls `self.visit` repeatedly over one parsed tree object rather
/// than re-parsing text). This keeps node positions stable across edits:
/// a directive's `pos` is meant to be read off the `Field` list from a
/// single extraction pass, and re-parsing the edited string between
/// directives would shift the byte offsets of every node past an edit that
/// changed length.
pub fn rewrite(query: String, edits: Vec<EditDirective>) -> Result<String, ParseError> {
    let (head, trimmed, tail) = split_whitespace(&query);

    let Some(mut root) = crate::parser::parse(trimmed)? else {
        return Ok(format!("{head}{trimmed}{tail}"));
    };

    for edit in &edits {
        root = rebuild(&root, edit)?;
    }

    Ok(format!("{head}{}{tail}", serialize(&root)))
}

fn split_whitespace(q: &str) -> (&str, &str, &str) {
    if q.trim().is_empty() {
        return (q, "", "");
    }
    let head_len = q.len() - q.trim_start().len();
    let core_end = q.trim_end().len();
    (&q[..head_len], &q[head_len..core_end], &q[core_end..])
}

fn rebuild(node: &Node, edit: &EditDirective) -> Result<Node, ParseError> {
    if node.pos() == edit.pos {
        return build_replacement(node, edit);
    }
    Ok(match node {
        Node::Word { .. } | Node::Phrase { .. } | Node::Regex { .. } | Node::Range { .. } => {
            node.clone()
        }
        Node::SearchField { pos, name, expr } => Node::SearchField {
            pos: *pos,
            name: name.clone(),
            expr: Box::new(rebuild(expr, edit)?),
        },
        Node::FieldGroup { pos, expr } => Node::FieldGroup {
            pos: *pos,
            expr: Box::new(rebuild(expr, edit)?),
        },
        Node::Group { pos, expr } => Node::Group {
            pos: *pos,
            expr: Box::new(rebuild(expr, edit)?),
        },
        Node::Not { pos, expr } => Node::Not {
            pos: *pos,
            expr: Box::new(rebuild(expr, edit)?),
        },
        Node::Plus { pos, expr } => Node::Plus {
            pos: *pos,
            expr: Box::new(rebuild(expr, edit)?),
        },
        Node::Prohibit { pos, expr } => Node::Prohibit {
            pos: *pos,
            expr: Box::new(rebuild(expr, edit)?),
        },
        Node::Boosted { pos, expr, boost } => Node::Boosted {
            pos: *pos,
            expr: Box::new(rebuild(expr, edit)?),
            boost: boost.clone(),
        },
        Node::Fuzzy { pos, term, degree } => Node::Fuzzy {
            pos: *pos,
            term: Box::new(rebuild(term, edit)?),
            degree: degree.clone(),
        },
        Node::Proximity {
            pos,
            phrase,
            distance,
        } => Node::Proximity {
            pos: *pos,
            phrase: Box::new(rebuild(phrase, edit)?),
            distance: distance.clone(),
        },
        Node::AndOperation { pos, operands } => Node::AndOperation {
            pos: *pos,
            operands: rebuild_many(operands, edit)?,
        },
        Node::OrOperation { pos, operands } => Node::OrOperation {
            pos: *pos,
            operands: rebuild_many(operands, edit)?,
        },
        Node::UnknownOperation { pos, operands } => Node::UnknownOperation {
            pos: *pos,
            operands: rebuild_many(operands, edit)?,
        },
    })
}

fn rebuild_many(operands: &[Node], edit: &EditDirective) -> Result<Vec<Node>, ParseError> {
    operands.iter().map(|n| rebuild(n, edit)).collect()
}

/// Only a plain `Word`, or a `SearchField` whose value is a plain `Word`,
/// is addressable by `rewrite` (spec.md §4.4); anything else is a no-op
/// target and reported as a `FieldExtractionError`.
fn build_replacement(node: &Node, edit: &EditDirective) -> Result<Node, ParseError> {
    match node {
        Node::Word { pos, .. } => Ok(Node::Word {
            pos: *pos,
            value: edit.value.clone(),
        }),
        Node::SearchField { name, expr, .. } => match expr.as_ref() {
            Node::Word { value, .. } => {
                let fragment = match comparison_prefix(value) {
                    Some(op) => format!("{name}: {op}{}", edit.value),
                    None => format!("{name}: {}", edit.value),
                };
                crate::parser::parse(&fragment)?.ok_or_else(|| {
                    ParseError::FieldExtractionError(
                        "rewritten search field produced an empty parse".to_string(),
                    )
                })
            }
            _ => Err(ParseError::FieldExtractionError(
                "only a SearchField over a plain Word is addressable by rewrite".to_string(),
            )),
        },
        _ => Err(ParseError::FieldExtractionError(
            "node kind is not addressable by the public rewrite API".to_string(),
        )),
    }
}
