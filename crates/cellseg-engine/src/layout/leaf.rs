use cellseg_syntax::TokenKind;

use crate::document::Span;

use super::{chain::LeafId, whitespace::WhiteSpace};

/// The smallest unit of layout: one token plus the whitespace in front of it.
///
/// Geometry is fixed at construction. Only the chain links change, and only
/// through [`LeafChain`](super::LeafChain).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    kind: TokenKind,
    span: Span,
    whitespace_before: WhiteSpace,
    contains_line_feeds: bool,
    symbols_at_last_line: usize,
    read_only: bool,
    pub(super) previous: Option<LeafId>,
    pub(super) next: Option<LeafId>,
}

impl Leaf {
    pub fn new(
        kind: TokenKind,
        span: Span,
        whitespace_before: WhiteSpace,
        contains_line_feeds: bool,
        symbols_at_last_line: usize,
        read_only: bool,
    ) -> Self {
        Self {
            kind,
            span,
            whitespace_before,
            contains_line_feeds,
            symbols_at_last_line,
            read_only,
            previous: None,
            next: None,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn whitespace_before(&self) -> &WhiteSpace {
        &self.whitespace_before
    }

    /// The leaf's own text starts and ends on different lines.
    pub fn contains_line_feeds(&self) -> bool {
        self.contains_line_feeds
    }

    /// Columns the leaf's text takes on its last line.
    pub fn symbols_at_last_line(&self) -> usize {
        self.symbols_at_last_line
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn previous(&self) -> Option<LeafId> {
        self.previous
    }

    pub fn next(&self) -> Option<LeafId> {
        self.next
    }

    /// `offset` lies strictly inside the leaf.
    pub fn contains(&self, offset: usize) -> bool {
        self.span.contains_strict(offset)
    }

    /// A lone closing brace.
    pub fn is_end_of_code_block(&self) -> bool {
        self.kind == TokenKind::RBrace && self.span.len() == 1
    }
}
