//! Recursive-descent grammar (spec.md §4.2), modeled on
//! `plotnik-lib::ql::parser::grammar`'s dispatch-on-lookahead style.
//!
//! Precedence, weakest to strongest: `OR` < `AND` < implicit-AND < unary
//! (`NOT`, `+`, `-`) < field (`name:`) < atom.

use crate::ast::Node;
use crate::error::ParseError;
use crate::parser::core::Parser;
use crate::token::TokenKind;

pub fn parse_query(p: &mut Parser) -> Result<Node, ParseError> {
    let node = parse_or(p)?;
    if let Some(tok) = p.peek_token() {
        return Err(p.unexpected_token(tok));
    }
    Ok(node)
}

fn parse_or(p: &mut Parser) -> Result<Node, ParseError> {
    p.enter_recursion()?;
    let result = (|| {
        let first = parse_and(p)?;
        let pos = first.pos();
        let mut operands = vec![first];
        while p.at(TokenKind::Or) {
            p.bump();
            operands.push(parse_and(p)?);
        }
        Ok(if operands.len() == 1 {
            operands.pop().unwrap()
        } else {
            Node::OrOperation { pos, operands }
        })
    })();
    p.exit_recursion();
    result
}

fn parse_and(p: &mut Parser) -> Result<Node, ParseError> {
    p.enter_recursion()?;
    let result = (|| {
        let first = parse_sequence(p)?;
        let pos = first.pos();
        let mut operands = vec![first];
        while p.at(TokenKind::And) {
            p.bump();
            operands.push(parse_sequence(p)?);
        }
        Ok(if operands.len() == 1 {
            operands.pop().unwrap()
        } else {
            Node::AndOperation { pos, operands }
        })
    })();
    p.exit_recursion();
    result
}

/// The "implicit-AND" precedence level: a run of unary-level expressions
/// with no connecting keyword between them. More than one such expression
/// is not a conjunction — it's the `UnknownOperation` recovery sentinel
/// (spec.md §9), left for the repair pipeline to resolve.
fn parse_sequence(p: &mut Parser) -> Result<Node, ParseError> {
    p.enter_recursion()?;
    let result = (|| {
        let first = parse_unary(p)?;
        let pos = first.pos();
        let mut operands = vec![first];
        while starts_unary(p) {
            operands.push(parse_unary(p)?);
        }
        Ok(if operands.len() == 1 {
            operands.pop().unwrap()
        } else {
            Node::UnknownOperation { pos, operands }
        })
    })();
    p.exit_recursion();
    result
}

fn starts_unary(p: &Parser) -> bool {
    matches!(
        p.peek(),
        Some(
            TokenKind::Not
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Word
                | TokenKind::Wildcard
                | TokenKind::Phrase
                | TokenKind::Regex
                | TokenKind::LParen
                | TokenKind::LBracket
                | TokenKind::LBrace
        )
    )
}

fn parse_unary(p: &mut Parser) -> Result<Node, ParseError> {
    p.enter_recursion()?;
    let result = (|| match p.peek() {
        Some(TokenKind::Not) => {
            let tok = p.bump().unwrap();
            let pos = u32::from(tok.span.start());
            let expr = parse_unary(p)?;
            Ok(Node::Not {
                pos,
                expr: Box::new(expr),
            })
        }
        Some(TokenKind::Plus) => {
            let tok = p.bump().unwrap();
            let pos = u32::from(tok.span.start());
            let expr = parse_unary(p)?;
            Ok(Node::Plus {
                pos,
                expr: Box::new(expr),
            })
        }
        Some(TokenKind::Minus) => {
            let tok = p.bump().unwrap();
            let pos = u32::from(tok.span.start());
            let expr = parse_unary(p)?;
            Ok(Node::Prohibit {
                pos,
                expr: Box::new(expr),
            })
        }
        _ => parse_field(p),
    })();
    p.exit_recursion();
    result
}

fn parse_field(p: &mut Parser) -> Result<Node, ParseError> {
    if p.at(TokenKind::Word) && p.peek_nth(1) == Some(TokenKind::Colon) {
        let name_tok = p.bump().unwrap();
        let pos = u32::from(name_tok.span.start());
        let name = p.text_at(name_tok).to_string();
        p.bump();
        let expr = parse_field_value(p)?;
        return maybe_boost(
            p,
            Node::SearchField {
                pos,
                name,
                expr: Box::new(expr),
            },
        );
    }
    parse_atom(p)
}

fn parse_field_value(p: &mut Parser) -> Result<Node, ParseError> {
    if p.at(TokenKind::LParen) {
        let tok = p.bump().unwrap();
        let pos = u32::from(tok.span.start());
        let inner = parse_or(p)?;
        p.expect(TokenKind::RParen)?;
        return maybe_boost(
            p,
            Node::FieldGroup {
                pos,
                expr: Box::new(inner),
            },
        );
    }
    parse_atom(p)
}

fn parse_atom(p: &mut Parser) -> Result<Node, ParseError> {
    let tok = match p.peek_token() {
        Some(tok) => tok,
        None => return Err(p.unexpected_end()),
    };
    let pos = u32::from(tok.span.start());
    let node = match tok.kind {
        TokenKind::LParen => {
            p.bump();
            let inner = parse_or(p)?;
            p.expect(TokenKind::RParen)?;
            Node::Group {
                pos,
                expr: Box::new(inner),
            }
        }
        TokenKind::LBracket | TokenKind::LBrace => parse_range(p)?,
        TokenKind::Phrase => {
            p.bump();
            let value = p.text_at(tok).to_string();
            let phrase = Node::Phrase { pos, value };
            parse_trailing_tilde(p, phrase, true)?
        }
        TokenKind::Regex => {
            p.bump();
            Node::Regex {
                pos,
                value: p.text_at(tok).to_string(),
            }
        }
        TokenKind::Word | TokenKind::Wildcard => {
            p.bump();
            let word = Node::Word {
                pos,
                value: p.text_at(tok).to_string(),
            };
            parse_trailing_tilde(p, word, false)?
        }
        _ => return Err(p.unexpected_token(tok)),
    };
    maybe_boost(p, node)
}

/// `term~N` (Fuzzy) or `"phrase"~N` (Proximity); `N` is optional.
fn parse_trailing_tilde(p: &mut Parser, node: Node, is_phrase: bool) -> Result<Node, ParseError> {
    if !p.at(TokenKind::Tilde) {
        return Ok(node);
    }
    p.bump();
    let degree = if p.at(TokenKind::Word) {
        let tok = p.bump().unwrap();
        Some(p.text_at(tok).to_string())
    } else {
        None
    };
    let pos = node.pos();
    Ok(if is_phrase {
        Node::Proximity {
            pos,
            phrase: Box::new(node),
            distance: degree,
        }
    } else {
        Node::Fuzzy {
            pos,
            term: Box::new(node),
            degree,
        }
    })
}

fn parse_range(p: &mut Parser) -> Result<Node, ParseError> {
    let open = p.bump().unwrap();
    let pos = u32::from(open.span.start());
    let include_low = open.kind == TokenKind::LBracket;
    let low = parse_range_endpoint(p)?;
    p.expect(TokenKind::To)?;
    let high = parse_range_endpoint(p)?;
    let close = match p.peek_token() {
        Some(tok) if tok.kind == TokenKind::RBracket || tok.kind == TokenKind::RBrace => tok,
        Some(tok) => return Err(p.unexpected_token(tok)),
        None => return Err(p.unexpected_end()),
    };
    p.bump();
    let include_high = close.kind == TokenKind::RBracket;
    Ok(Node::Range {
        pos,
        low,
        high,
        include_low,
        include_high,
    })
}

fn parse_range_endpoint(p: &mut Parser) -> Result<String, ParseError> {
    match p.peek_token() {
        Some(tok) if matches!(tok.kind, TokenKind::Word | TokenKind::Wildcard) => {
            p.bump();
            Ok(p.text_at(tok).to_string())
        }
        Some(tok) if tok.kind == TokenKind::Phrase => {
            p.bump();
            Ok(p.text_at(tok).to_string())
        }
        Some(tok) => Err(p.unexpected_token(tok)),
        None => Err(p.unexpected_end()),
    }
}

fn maybe_boost(p: &mut Parser, node: Node) -> Result<Node, ParseError> {
    if !p.at(TokenKind::Caret) {
        return Ok(node);
    }
    p.bump();
    let degree = match p.peek_token() {
        Some(tok) if tok.kind == TokenKind::Word => {
            p.bump();
            p.text_at(tok).to_string()
        }
        Some(tok) => return Err(p.unexpected_token(tok)),
        None => return Err(p.unexpected_end()),
    };
    Ok(match node {
        Node::Word { pos, value } => Node::Word {
            pos,
            value: format!("{value}^{degree}"),
        },
        other => {
            let pos = other.pos();
            Node::Boosted {
                pos,
                expr: Box::new(other),
                boost: degree,
            }
        }
    })
}
