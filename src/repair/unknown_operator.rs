//! Ported from `UnknownOperationResolver` in
//! `original_source/apps/utils/lucene.py`: every `UnknownOperation` node —
//! two atoms juxtaposed with no connective — is resolved to an explicit
//! `AndOperation` and the tree is re-serialized.

use super::{DiagnosticKind, Inspector};
use crate::ast::{Node, serialize};
use crate::error::ParseError;

pub struct UnknownOperatorInspector;

impl Inspector for UnknownOperatorInspector {
    fn inspect(&self, keyword: &mut String) -> Option<DiagnosticKind> {
        match crate::fields::parse_fields(keyword) {
            Err(ParseError::UnknownOperatorError { .. }) => {}
            _ => return None,
        }
        let root = match crate::parser::parse(keyword) {
            Ok(Some(root)) => root,
            _ => return None,
        };
        let resolved = resolve(&root);
        let new_text = serialize(&resolved);
        if new_text == *keyword {
            return None;
        }
        *keyword = new_text;
        Some(DiagnosticKind::UnknownOperator)
    }
}

fn resolve(node: &Node) -> Node {
    match node {
        Node::Word { .. } | Node::Phrase { .. } | Node::Regex { .. } | Node::Range { .. } => {
            node.clone()
        }
        Node::SearchField { pos, name, expr } => Node::SearchField {
            pos: *pos,
            name: name.clone(),
            expr: Box::new(resolve(expr)),
        },
        Node::FieldGroup { pos, expr } => Node::FieldGroup {
            pos: *pos,
            expr: Box::new(resolve(expr)),
        },
        Node::Group { pos, expr } => Node::Group {
            pos: *pos,
            expr: Box::new(resolve(expr)),
        },
        Node::Not { pos, expr } => Node::Not {
            pos: *pos,
            expr: Box::new(resolve(expr)),
        },
        Node::Plus { pos, expr } => Node::Plus {
            pos: *pos,
            expr: Box::new(resolve(expr)),
        },
        Node::Prohibit { pos, expr } => Node::Prohibit {
            pos: *pos,
            expr: Box::new(resolve(expr)),
        },
        Node::Boosted { pos, expr, boost } => Node::Boosted {
            pos: *pos,
            expr: Box::new(resolve(expr)),
            boost: boost.clone(),
        },
        Node::Fuzzy { pos, term, degree } => Node::Fuzzy {
            pos: *pos,
            term: Box::new(resolve(term)),
            degree: degree.clone(),
        },
        Node::Proximity {
            pos,
            phrase,
            distance,
        } => Node::Proximity {
            pos: *pos,
            phrase: Box::new(resolve(phrase)),
            distance: distance.clone(),
        },
        Node::AndOperation { pos, operands } => Node::AndOperation {
            pos: *pos,
            operands: operands.iter().map(resolve).collect(),
        },
        Node::OrOperation { pos, operands } => Node::OrOperation {
            pos: *pos,
            operands: operands.iter().map(resolve).collect(),
        },
        Node::UnknownOperation { pos, operands } => Node::AndOperation {
            pos: *pos,
            operands: operands.iter().map(resolve).collect(),
        },
    }
}
