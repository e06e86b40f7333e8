//! A Lucene query analyzer, repairer, and transformer.
//!
//! Three pure entry points, per spec.md §6:
//!
//! ```
//! let fields = lucene_ql::parse_fields("level: ERROR AND status: >=500".to_string()).unwrap();
//! assert_eq!(fields[0].name, "level");
//! assert_eq!(fields[1].operator, ">=");
//!
//! let repaired = lucene_ql::repair("ts: [ TO 100]".to_string());
//! assert_eq!(repaired.keyword, "ts: [* TO 100]");
//! assert!(repaired.is_resolved);
//!
//! let rewritten = lucene_ql::rewrite(
//!     "level: ERROR".to_string(),
//!     vec![lucene_ql::EditDirective { pos: 7, value: "WARN".to_string() }],
//! ).unwrap();
//! assert_eq!(rewritten, "level:WARN");
//! ```
//!
//! # Architecture
//!
//! ```text
//! raw string -> (lexer -> parser) -> AST -> { fields | rewrite | repair }
//! ```
//!
//! - [`token`]: `logos`-based lexer (C1) producing a flat token stream with
//!   byte positions.
//! - [`parser`]: hand-written recursive-descent parser (C2) building the
//!   owned [`ast::Node`] tree. The grammar is permissive about one specific
//!   error shape — two adjacent atoms with no connective become
//!   [`ast::Node::UnknownOperation`] instead of aborting — so the repair
//!   pipeline can reason about it as data rather than catching an exception.
//! - [`fields`]: depth-first walker (C3) flattening the tree to a
//!   [`fields::Field`] list, with a Counter-style duplicate-name rename pass.
//! - [`rewrite`]: position-keyed AST rewriter (C4) that patches one node
//!   per [`rewrite::EditDirective`] and re-serializes, preserving head/tail
//!   whitespace.
//! - [`repair`]: fixed-order pipeline of inspectors (C5), each fixing one
//!   class of syntactic defect, iterated to a fixed point.
//! - [`diagnostics`]: ambient `annotate-snippets` rendering for parse errors,
//!   not one of the three core entry points.
//!
//! This crate is purely synchronous, has no I/O, and touches no shared
//! state between calls (spec.md §5).

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod fields;
pub mod parser;
pub mod repair;
pub mod rewrite;
pub mod span;
pub mod token;

pub use error::ParseError;
pub use fields::{Field, SyntaxKind, parse_fields};
pub use repair::{RepairConfig, RepairResult, repair, repair_with_config};
pub use rewrite::{EditDirective, rewrite};
