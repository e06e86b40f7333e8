//! Ported from `DefaultInspector` in
//! `original_source/apps/utils/lucene.py`: a final guard that attempts a
//! full parse and field extraction. Its "unknown exception" diagnostic is
//! stripped from the final report if the pipeline still converges
//! (`Pipeline::resolve`), since it's only meaningful when repair failed.

use super::{DiagnosticKind, Inspector};

pub struct DefaultInspector;

impl Inspector for DefaultInspector {
    fn inspect(&self, keyword: &mut String) -> Option<DiagnosticKind> {
        match crate::fields::parse_fields(keyword) {
            Ok(_) => None,
            Err(_) => Some(DiagnosticKind::UnknownException),
        }
    }
}
