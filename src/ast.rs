//! Typed AST (spec.md §3).
//!
//! A directly-owned tagged union rather than the teacher's CST-plus-typed-view
//! (`rowan::SyntaxNode` wrapped by an `ast_node!` macro) — see SPEC_FULL.md's
//! "Crate shape" section for why. Every variant carries `pos`, the byte
//! offset of its first token, which doubles as its identity for C4's
//! position-keyed rewriting.

use crate::span::Pos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Word {
        pos: Pos,
        value: String,
    },
    Phrase {
        pos: Pos,
        value: String,
    },
    Regex {
        pos: Pos,
        value: String,
    },
    SearchField {
        pos: Pos,
        name: String,
        expr: Box<Node>,
    },
    FieldGroup {
        pos: Pos,
        expr: Box<Node>,
    },
    Group {
        pos: Pos,
        expr: Box<Node>,
    },
    Range {
        pos: Pos,
        low: String,
        high: String,
        include_low: bool,
        include_high: bool,
    },
    Fuzzy {
        pos: Pos,
        term: Box<Node>,
        degree: Option<String>,
    },
    Proximity {
        pos: Pos,
        phrase: Box<Node>,
        distance: Option<String>,
    },
    AndOperation {
        pos: Pos,
        operands: Vec<Node>,
    },
    OrOperation {
        pos: Pos,
        operands: Vec<Node>,
    },
    Not {
        pos: Pos,
        expr: Box<Node>,
    },
    Plus {
        pos: Pos,
        expr: Box<Node>,
    },
    Prohibit {
        pos: Pos,
        expr: Box<Node>,
    },
    /// Two or more adjacent atoms with no connecting keyword. Not a parse
    /// error — a first-class recovery shape the repair pipeline's
    /// `unknown_operator` inspector resolves into an explicit `AndOperation`.
    UnknownOperation {
        pos: Pos,
        operands: Vec<Node>,
    },
    /// Trailing `^N` boost on a construct other than a bare word (where it's
    /// folded straight into `Word::value` by the parser). Not one of
    /// spec.md §3's listed kinds; added purely so `serialize` round-trips
    /// queries that boost a phrase, range, or group. Ignored by field
    /// extraction, consistent with the "no scoring" non-goal.
    Boosted {
        pos: Pos,
        expr: Box<Node>,
        boost: String,
    },
}

impl Node {
    pub fn pos(&self) -> Pos {
        match self {
            Node::Word { pos, .. }
            | Node::Phrase { pos, .. }
            | Node::Regex { pos, .. }
            | Node::SearchField { pos, .. }
            | Node::FieldGroup { pos, .. }
            | Node::Group { pos, .. }
            | Node::Range { pos, .. }
            | Node::Fuzzy { pos, .. }
            | Node::Proximity { pos, .. }
            | Node::AndOperation { pos, .. }
            | Node::OrOperation { pos, .. }
            | Node::Not { pos, .. }
            | Node::Plus { pos, .. }
            | Node::Prohibit { pos, .. }
            | Node::UnknownOperation { pos, .. }
            | Node::Boosted { pos, .. } => *pos,
        }
    }

    /// Direct children, for C3's flat-map traversal and C4's position search.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Word { .. } | Node::Phrase { .. } | Node::Regex { .. } | Node::Range { .. } => {
                Vec::new()
            }
            Node::SearchField { expr, .. }
            | Node::FieldGroup { expr, .. }
            | Node::Group { expr, .. }
            | Node::Not { expr, .. }
            | Node::Plus { expr, .. }
            | Node::Prohibit { expr, .. }
            | Node::Boosted { expr, .. } => vec![expr.as_ref()],
            Node::Fuzzy { term, .. } => vec![term.as_ref()],
            Node::Proximity { phrase, .. } => vec![phrase.as_ref()],
            Node::AndOperation { operands, .. }
            | Node::OrOperation { operands, .. }
            | Node::UnknownOperation { operands, .. } => operands.iter().collect(),
        }
    }

    /// Depth-first search for the node whose `pos()` matches `target`.
    pub fn find(&self, target: Pos) -> Option<&Node> {
        if self.pos() == target {
            return Some(self);
        }
        self.children().into_iter().find_map(|c| c.find(target))
    }
}

fn range_chars(include_low: bool, include_high: bool) -> (char, char) {
    (
        if include_low { '[' } else { '{' },
        if include_high { ']' } else { '}' },
    )
}

/// Reconstructs source text for a node, as closely as the AST allows.
/// Used by C4 (rewriter) and by the `unknown_operator`/`illegal_range`
/// repair inspectors to turn a patched tree back into a query string.
pub fn serialize(node: &Node) -> String {
    match node {
        Node::Word { value, .. } | Node::Phrase { value, .. } | Node::Regex { value, .. } => {
            value.clone()
        }
        Node::SearchField { name, expr, .. } => format!("{name}:{}", serialize(expr)),
        Node::FieldGroup { expr, .. } | Node::Group { expr, .. } => {
            format!("({})", serialize(expr))
        }
        Node::Range {
            low,
            high,
            include_low,
            include_high,
            ..
        } => {
            let (lo, hi) = range_chars(*include_low, *include_high);
            format!("{lo}{low} TO {high}{hi}")
        }
        Node::Fuzzy { term, degree, .. } => {
            format!("{}~{}", serialize(term), degree.as_deref().unwrap_or(""))
        }
        Node::Proximity {
            phrase, distance, ..
        } => format!(
            "{}~{}",
            serialize(phrase),
            distance.as_deref().unwrap_or("")
        ),
        Node::AndOperation { operands, .. } => join_operands(operands, " AND "),
        Node::OrOperation { operands, .. } => join_operands(operands, " OR "),
        Node::UnknownOperation { operands, .. } => join_operands(operands, " "),
        Node::Not { expr, .. } => format!("NOT {}", serialize(expr)),
        Node::Plus { expr, .. } => format!("+{}", serialize(expr)),
        Node::Prohibit { expr, .. } => format!("-{}", serialize(expr)),
        Node::Boosted { expr, boost, .. } => format!("{}^{boost}", serialize(expr)),
    }
}

fn join_operands(operands: &[Node], sep: &str) -> String {
    operands
        .iter()
        .map(serialize)
        .collect::<Vec<_>>()
        .join(sep)
}
