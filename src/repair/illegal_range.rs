//! Ported from `IllegalRangeSyntaxInspector` / `range_re` in
//! `original_source/apps/utils/lucene.py`. Runs before
//! [`super::illegal_character`] because a bare `TO` inside a range would
//! otherwise look like an illegal identifier to the parser.

use super::{DiagnosticKind, Inspector};
use crate::error::ParseError;
use regex::Regex;
use std::sync::OnceLock;

static PATTERN: OnceLock<Regex> = OnceLock::new();

fn pattern() -> &'static Regex {
    PATTERN.get_or_init(|| Regex::new(r"(?s)\[.*?TO.*?\]").unwrap())
}

pub struct IllegalRangeSyntaxInspector;

impl Inspector for IllegalRangeSyntaxInspector {
    fn inspect(&self, keyword: &mut String) -> Option<DiagnosticKind> {
        match crate::parser::parse(keyword) {
            Err(ParseError::ParseSyntaxError {
                unexpected_token, ..
            }) if unexpected_token == "TO" => {}
            _ => return None,
        }

        if !pattern().is_match(keyword) {
            return None;
        }

        let fixed = pattern().replace_all(keyword, |caps: &regex::Captures| repair_range(&caps[0]));
        if fixed == *keyword {
            return None;
        }
        *keyword = fixed.into_owned();
        Some(DiagnosticKind::IllegalRangeSyntax)
    }
}

fn repair_range(raw: &str) -> String {
    let inner = &raw[1..raw.len() - 1];
    let mut parts = inner.splitn(2, "TO");
    let (low, high) = match (parts.next(), parts.next()) {
        (Some(low), Some(high)) => (low.trim(), high.trim()),
        _ => return raw.to_string(),
    };
    let low = if low.is_empty() { "*" } else { low };
    let high = if high.is_empty() { "*" } else { high };
    format!("[{low} TO {high}]")
}
