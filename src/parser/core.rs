//! Parser state (modeled on `plotnik-lib::ql::parser::core::Parser`): a
//! token/position cursor, a recursion-depth guard, and a debug-only fuel
//! counter that turns a runaway grammar bug into a panic instead of a hang.

use crate::error::ParseError;
use crate::span::Pos;
use crate::token::{Token, TokenKind, lex};

/// Knobs with no CLI/env surface — the ambient "configuration" this library
/// needs, modeled on `plotnik-lib::query::QueryBuilder`'s
/// `with_query_parse_fuel`/`with_query_parse_recursion_limit`.
#[derive(Debug, Clone, Copy)]
pub struct ParserConfig {
    pub max_depth: u32,
    pub fuel: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: 128,
            fuel: 200_000,
        }
    }
}

pub struct Parser<'a> {
    pub src: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    depth: u32,
    config: ParserConfig,
    #[cfg(debug_assertions)]
    fuel: u32,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str, config: ParserConfig) -> Result<Self, ParseError> {
        let lexed = lex(src);
        if let Some(err) = lexed.errors.into_iter().next() {
            return Err(ParseError::LexError {
                char: err.text,
                pos: err.pos,
            });
        }
        Ok(Parser {
            src,
            tokens: lexed.tokens,
            pos: 0,
            depth: 0,
            config,
            #[cfg(debug_assertions)]
            fuel: config.fuel,
        })
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn peek(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    pub fn peek_token(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.peek() == Some(kind)
    }

    pub fn peek_nth(&self, n: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    pub fn text_at(&self, tok: Token) -> &'a str {
        tok.text(self.src)
    }

    /// Byte offset the next token would start at, or end-of-input.
    pub fn current_pos(&self) -> Pos {
        match self.tokens.get(self.pos) {
            Some(t) => u32::from(t.span.start()),
            None => self.src.len() as u32,
        }
    }

    pub fn bump(&mut self) -> Option<Token> {
        self.consume_fuel();
        let tok = self.tokens.get(self.pos).copied();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        match self.peek_token() {
            Some(tok) if tok.kind == kind => {
                self.pos += 1;
                Ok(tok)
            }
            Some(tok) => Err(ParseError::ParseSyntaxError {
                unexpected_token: self.text_at(tok).to_string(),
                pos: u32::from(tok.span.start()),
            }),
            None => Err(ParseError::UnmatchedParenthesisError),
        }
    }

    pub fn unexpected_end(&self) -> ParseError {
        ParseError::UnmatchedParenthesisError
    }

    pub fn unexpected_token(&self, tok: Token) -> ParseError {
        ParseError::ParseSyntaxError {
            unexpected_token: self.text_at(tok).to_string(),
            pos: u32::from(tok.span.start()),
        }
    }

    pub fn enter_recursion(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.config.max_depth {
            return Err(ParseError::ParseSyntaxError {
                unexpected_token: "<recursion limit exceeded>".to_string(),
                pos: self.current_pos(),
            });
        }
        Ok(())
    }

    pub fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    #[cfg(debug_assertions)]
    fn consume_fuel(&mut self) {
        if self.fuel == 0 {
            panic!("parser fuel exhausted: grammar likely stuck in a loop");
        }
        self.fuel -= 1;
    }

    #[cfg(not(debug_assertions))]
    fn consume_fuel(&self) {}
}
