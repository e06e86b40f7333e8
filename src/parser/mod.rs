pub mod core;
pub mod grammar;

#[cfg(test)]
#[path = "grammar_tests.rs"]
mod grammar_tests;

use crate::ast::Node;
use crate::error::ParseError;
use core::{Parser, ParserConfig};

/// Parses a full query string. `Ok(None)` means the query was empty (or
/// whitespace-only) — not every caller has a node to hand back, but it's
/// not a parse error either (spec.md §8's empty-string boundary case).
pub fn parse(src: &str) -> Result<Option<Node>, ParseError> {
    parse_with_config(src, ParserConfig::default())
}

pub fn parse_with_config(src: &str, config: ParserConfig) -> Result<Option<Node>, ParseError> {
    let mut parser = Parser::new(src, config)?;
    if parser.at_end() {
        return Ok(None);
    }
    grammar::parse_query(&mut parser).map(Some)
}
