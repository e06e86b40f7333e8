//! Source-position value types.
//!
//! Reuses `rowan`'s `TextRange`/`TextSize` as plain value types (as the
//! teacher crate does even outside its concrete syntax tree, e.g. in its
//! `SyntaxError`/`Diagnostics` types) rather than pulling in rowan's green
//! tree machinery, which this crate has no use for.

pub use rowan::{TextRange, TextSize};

/// Byte offset into the original query string.
pub type Pos = u32;

#[inline]
pub fn pos(offset: usize) -> Pos {
    offset as u32
}

#[inline]
pub fn range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::from(start as u32), TextSize::from(end as u32))
}
