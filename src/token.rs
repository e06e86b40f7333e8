//! Lexer (C1).
//!
//! Built on `logos`, the same way `plotnik-lib::ql::lexer` and
//! `plotnik-lib::parser::lexer` are: a `#[derive(Logos)]` enum for the raw
//! token classes, wrapped by a hand-written pass that coalesces consecutive
//! lexer-rejected bytes (mirrors `parser::lexer::lex`'s `Garbage` handling)
//! and reclassifies a handful of `WORD` tokens into keywords based on
//! context logos itself cannot see.

use crate::span::{Pos, TextRange, pos, range};
use logos::Logos;

#[cfg(test)]
#[path = "token_tests.rs"]
mod token_tests;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Raw {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(":")]
    Colon,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("~")]
    Tilde,
    #[token("^")]
    Caret,
    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    Phrase,
    #[regex(r"/(?:[^/\\]|\\.)*/")]
    Regex,
    #[regex(r#"[^\s:()\[\]{}"/+\-!~^][^\s:()\[\]{}"/!~^]*"#)]
    Word,
}

/// Token classes, per spec.md §3. `To`/`And`/`Or`/`Not`/`Wildcard` never
/// come out of the raw `logos` pass directly — they're `Word` tokens
/// reclassified by [`lex`] once surrounding context is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Colon,
    Plus,
    Minus,
    Tilde,
    Caret,
    Phrase,
    Regex,
    Word,
    Wildcard,
    To,
    And,
    Or,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    pub fn text<'a>(&self, src: &'a str) -> &'a str {
        &src[self.span]
    }
}

/// An illegal byte sequence the lexer could not classify. Consecutive
/// illegal bytes are coalesced into one error, same as the teacher's
/// `Garbage` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub text: String,
    pub pos: Pos,
}

pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

pub fn lex(src: &str) -> LexOutput {
    let mut raw_lexer = Raw::lexer(src);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut garbage: Option<(usize, usize)> = None;

    loop {
        match raw_lexer.next() {
            Some(Ok(kind)) => {
                flush_garbage(src, &mut garbage, &mut errors);
                let span = raw_lexer.span();
                tokens.push(Token {
                    kind: raw_to_kind(kind),
                    span: range(span.start, span.end),
                });
            }
            Some(Err(())) => {
                let span = raw_lexer.span();
                match &mut garbage {
                    Some((_, end)) => *end = span.end,
                    None => garbage = Some((span.start, span.end)),
                }
            }
            None => {
                flush_garbage(src, &mut garbage, &mut errors);
                break;
            }
        }
    }

    reclassify_keywords(src, &mut tokens);
    LexOutput { tokens, errors }
}

fn flush_garbage(src: &str, garbage: &mut Option<(usize, usize)>, errors: &mut Vec<LexError>) {
    if let Some((start, end)) = garbage.take() {
        errors.push(LexError {
            text: src[start..end].to_string(),
            pos: pos(start),
        });
    }
}

fn raw_to_kind(raw: Raw) -> TokenKind {
    match raw {
        Raw::LParen => TokenKind::LParen,
        Raw::RParen => TokenKind::RParen,
        Raw::LBracket => TokenKind::LBracket,
        Raw::RBracket => TokenKind::RBracket,
        Raw::LBrace => TokenKind::LBrace,
        Raw::RBrace => TokenKind::RBrace,
        Raw::Colon => TokenKind::Colon,
        Raw::Plus => TokenKind::Plus,
        Raw::Minus => TokenKind::Minus,
        Raw::Tilde => TokenKind::Tilde,
        Raw::Caret => TokenKind::Caret,
        Raw::Phrase => TokenKind::Phrase,
        Raw::Regex => TokenKind::Regex,
        Raw::Word => TokenKind::Word,
    }
}

/// `AND`/`OR`/`NOT` are keywords whenever they appear as a standalone
/// maximal `WORD` (which, given greedy tokenization, already means they're
/// surrounded by whitespace/parens/etc. — "android" lexes as one `Word`
/// token, never as `And` + `roid`). `TO` is a keyword only between a
/// bracket/brace pair that hasn't closed yet. `*`/`?` alone are `Wildcard`.
fn reclassify_keywords(src: &str, tokens: &mut [Token]) {
    let mut range_depth: i32 = 0;
    for tok in tokens.iter_mut() {
        match tok.kind {
            TokenKind::LBracket | TokenKind::LBrace => range_depth += 1,
            TokenKind::RBracket | TokenKind::RBrace => range_depth = (range_depth - 1).max(0),
            TokenKind::Word => {
                let text = tok.text(src);
                tok.kind = match text {
                    "AND" => TokenKind::And,
                    "OR" => TokenKind::Or,
                    "NOT" => TokenKind::Not,
                    "TO" if range_depth > 0 => TokenKind::To,
                    "*" | "?" => TokenKind::Wildcard,
                    _ => TokenKind::Word,
                };
            }
            _ => {}
        }
    }
}
