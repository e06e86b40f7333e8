//! Repair Pipeline (C5, spec.md §4.5).
//!
//! A fixed, ordered list of inspectors, each detecting and fixing one class
//! of syntactic defect, ported from `BaseInspector` subclasses and
//! `LuceneSyntaxResolver` in `original_source/apps/utils/lucene.py`. Order
//! is load-bearing — see spec.md §9 — and is not to be reshuffled.

mod chinese_punctuation;
mod default_inspector;
mod illegal_bracket;
mod illegal_character;
mod illegal_colon;
mod illegal_range;
mod unknown_operator;

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod pipeline_tests;

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Stable, matchable identifier for a defect class (spec.md §6's
/// "localizable tokens"), with a human-readable message via `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DiagnosticKind {
    ChinesePunctuation,
    IllegalRangeSyntax,
    IllegalCharacter,
    StrayColon,
    MismatchedBrackets,
    UnknownOperator,
    UnknownException,
}

impl DiagnosticKind {
    pub fn message(&self) -> &'static str {
        match self {
            DiagnosticKind::ChinesePunctuation => "Chinese punctuation anomaly",
            DiagnosticKind::IllegalRangeSyntax => "illegal RANGE syntax",
            DiagnosticKind::IllegalCharacter => "illegal character",
            DiagnosticKind::StrayColon => "stray colon",
            DiagnosticKind::MismatchedBrackets => "mismatched brackets",
            DiagnosticKind::UnknownOperator => "unknown operator",
            DiagnosticKind::UnknownException => "unknown exception",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RepairConfig {
    pub max_resolve_times: u32,
}

impl Default for RepairConfig {
    fn default() -> Self {
        RepairConfig {
            max_resolve_times: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepairResult {
    pub is_legal: bool,
    pub is_resolved: bool,
    pub message: String,
    pub keyword: String,
}

/// One repair step. Returns `Some(kind)` if it found and attempted to fix
/// a defect of its class this pass, `None` if the keyword is already clean
/// from its point of view. Per spec.md §7, an inspector must swallow any
/// error shape it doesn't recognize and return `None` rather than let it
/// propagate — this is enforced by each inspector matching narrowly on the
/// specific `ParseError` variant it targets.
pub(crate) trait Inspector {
    fn inspect(&self, keyword: &mut String) -> Option<DiagnosticKind>;
}

pub fn repair(query: String) -> RepairResult {
    repair_with_config(query, RepairConfig::default())
}

pub fn repair_with_config(query: String, config: RepairConfig) -> RepairResult {
    let inspectors: Vec<Box<dyn Inspector>> = vec![
        Box::new(chinese_punctuation::ChinesePunctuationInspector),
        Box::new(illegal_range::IllegalRangeSyntaxInspector),
        Box::new(illegal_character::IllegalCharacterInspector),
        Box::new(illegal_colon::IllegalColonInspector),
        Box::new(illegal_bracket::IllegalBracketInspector),
        Box::new(unknown_operator::UnknownOperatorInspector),
        Box::new(default_inspector::DefaultInspector),
    ];

    let mut keyword = query;
    let mut diagnostics: BTreeSet<DiagnosticKind> = BTreeSet::new();
    let mut resolved = false;

    for _ in 0..config.max_resolve_times {
        let mut clean = true;
        for inspector in &inspectors {
            if let Some(kind) = inspector.inspect(&mut keyword) {
                diagnostics.insert(kind);
                clean = false;
            }
        }
        if clean {
            resolved = true;
            break;
        }
    }

    if resolved {
        diagnostics.remove(&DiagnosticKind::UnknownException);
    }

    let is_legal = diagnostics.is_empty();
    let message = diagnostics
        .iter()
        .map(|d| d.message())
        .collect::<Vec<_>>()
        .join("\n");

    RepairResult {
        is_legal,
        is_resolved: resolved,
        message,
        keyword,
    }
}
