//! Ported from `IllegalColonInspector` in
//! `original_source/apps/utils/lucene.py`: on the unmatched-parenthesis
//! error shape, a trailing `:` is a common typo (`foo:` with nothing
//! after) and is simply dropped.

use super::{DiagnosticKind, Inspector};
use crate::error::ParseError;

pub struct IllegalColonInspector;

impl Inspector for IllegalColonInspector {
    fn inspect(&self, keyword: &mut String) -> Option<DiagnosticKind> {
        match crate::parser::parse(keyword) {
            Err(ParseError::UnmatchedParenthesisError) => {}
            _ => return None,
        }
        if !keyword.ends_with(':') {
            return None;
        }
        keyword.pop();
        Some(DiagnosticKind::StrayColon)
    }
}
