//! Diagnostic rendering (ambient addition, spec.md §6/§7).
//!
//! Not one of spec.md's three entry points — a thin `annotate-snippets`
//! wrapper modeled on `plotnik-lib::diagnostics::printer::DiagnosticsPrinter`,
//! so a caller embedding this crate behind the out-of-scope HTTP layer gets
//! a ready-made human-readable rendering instead of re-deriving one from
//! `ParseError`'s raw fields.

use crate::error::ParseError;
use crate::span::Pos;
use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

/// Renders a [`ParseError`] against the query it came from as a one-shot
/// snippet report. Errors that carry no byte position (`UnmatchedParenthesisError`,
/// `FieldExtractionError`) fall back to their `Display` message with no
/// source excerpt, same as `DiagnosticsPrinter::format_plain` does for a
/// diagnostic with no attached source.
pub fn render_parse_error(query: &str, err: &ParseError, colored: bool) -> String {
    let Some(pos) = error_pos(err) else {
        return err.to_string();
    };

    let renderer = if colored {
        Renderer::styled()
    } else {
        Renderer::plain()
    };

    let range = point_range(pos, query.len());
    let message = err.to_string();
    let snippet = Snippet::source(query)
        .line_start(1)
        .annotation(AnnotationKind::Primary.span(range).label(&message));
    let report = [Level::ERROR.primary_title(&message).element(snippet)];
    renderer.render(&report).to_string()
}

fn error_pos(err: &ParseError) -> Option<Pos> {
    match err {
        ParseError::LexError { pos, .. } => Some(*pos),
        ParseError::ParseSyntaxError { pos, .. } => Some(*pos),
        ParseError::UnknownOperatorError { pos } => Some(*pos),
        ParseError::UnmatchedParenthesisError | ParseError::FieldExtractionError(_) => None,
    }
}

fn point_range(pos: Pos, limit: usize) -> std::ops::Range<usize> {
    let start = pos as usize;
    let end = (start + 1).min(limit.max(start));
    start..end.max(start)
}
