//! Ported from `ChinesePunctuationInspector` / `chinese_punctuation_re` in
//! `original_source/apps/utils/lucene.py`. Runs first because no later
//! inspector recognizes `“ … ”` as a string delimiter pair.
//!
//! Operates over `char_indices`-derived byte offsets rather than assuming
//! one byte per character (spec.md §9's open question about the original's
//! byte-offset assumption) — matched pairs still become straight quotes,
//! the invariant the original relies on, just safely on multi-byte input.

use super::{DiagnosticKind, Inspector};
use regex::Regex;
use std::sync::OnceLock;

static PATTERN: OnceLock<Regex> = OnceLock::new();

fn pattern() -> &'static Regex {
    PATTERN.get_or_init(|| Regex::new(r"(?s)\u{201c}(.*?)\u{201d}").unwrap())
}

pub struct ChinesePunctuationInspector;

impl Inspector for ChinesePunctuationInspector {
    fn inspect(&self, keyword: &mut String) -> Option<DiagnosticKind> {
        if !pattern().is_match(keyword) {
            return None;
        }

        let open = '\u{201c}';
        let close = '\u{201d}';
        let mut result = String::with_capacity(keyword.len());
        let mut last = 0;
        for m in pattern().find_iter(keyword) {
            result.push_str(&keyword[last..m.start()]);
            let inner = &keyword[m.start() + open.len_utf8()..m.end() - close.len_utf8()];
            result.push('"');
            result.push_str(inner);
            result.push('"');
            last = m.end();
        }
        result.push_str(&keyword[last..]);

        *keyword = result;
        Some(DiagnosticKind::ChinesePunctuation)
    }
}
