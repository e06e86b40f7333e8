//! Error taxonomy (spec.md §7).

use crate::span::Pos;
use thiserror::Error;

/// The literal message the repair pipeline's `IllegalColonInspector` and
/// `IllegalBracketInspector` match against. Kept as a named constant, not
/// inlined, so the two sides of the match (producer in `parser`, consumer
/// in `repair`) can't drift apart.
pub const UNMATCHED_PARENTHESIS_MESSAGE: &str =
    "Syntax error in input : unexpected end of expression (maybe due to unmatched parenthesis) at the end!";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("illegal character {char:?} at byte {pos}")]
    LexError { char: String, pos: Pos },

    #[error("unexpected token {unexpected_token:?} at byte {pos}")]
    ParseSyntaxError { unexpected_token: String, pos: Pos },

    #[error("{}", UNMATCHED_PARENTHESIS_MESSAGE)]
    UnmatchedParenthesisError,

    #[error("unknown operator at byte {pos}")]
    UnknownOperatorError { pos: Pos },

    /// Internal invariant violation; should not occur on a tree produced by
    /// this crate's own parser. Reserved for defensive checks in C3.
    #[error("field extraction invariant violated: {0}")]
    FieldExtractionError(String),
}

impl ParseError {
    pub fn is_unmatched_parenthesis(&self) -> bool {
        matches!(self, ParseError::UnmatchedParenthesisError)
    }
}
