//! Ported from `IllegalCharacterInspector` / `illegal_character_re` in
//! `original_source/apps/utils/lucene.py`. Deletes exactly one offending
//! character per call; the outer pipeline loop (`Pipeline::resolve`) is
//! what iterates until nothing is left to delete.

use super::{DiagnosticKind, Inspector};
use crate::error::ParseError;

pub struct IllegalCharacterInspector;

impl Inspector for IllegalCharacterInspector {
    fn inspect(&self, keyword: &mut String) -> Option<DiagnosticKind> {
        let offending = match crate::parser::parse(keyword) {
            Err(ParseError::LexError { pos, .. }) => pos,
            Err(ParseError::ParseSyntaxError { pos, .. }) => pos,
            _ => return None,
        };
        if !remove_char_at_byte(keyword, offending as usize) {
            return None;
        }
        Some(DiagnosticKind::IllegalCharacter)
    }
}

fn remove_char_at_byte(s: &mut String, byte_pos: usize) -> bool {
    if byte_pos >= s.len() {
        return false;
    }
    let Some(ch) = s[byte_pos..].chars().next() else {
        return false;
    };
    s.replace_range(byte_pos..byte_pos + ch.len_utf8(), "");
    true
}
