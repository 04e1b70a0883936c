use cellseg_syntax::Token;

use crate::document::{DocumentMetrics, Span};

use super::{
    chain::LeafChain,
    indent::IndentOptions,
    leaf::Leaf,
    whitespace::WhiteSpace,
    width::column_width,
};

/// Segments a token stream into a linked [`LeafChain`].
///
/// Trivia tokens (whitespace, line endings) accumulate into the whitespace
/// of the next leaf; every other token becomes a leaf. Widths and line-feed
/// flags are measured once here and never change afterwards.
pub struct LeafBuilder<'a, M: DocumentMetrics + ?Sized> {
    doc: &'a M,
    options: IndentOptions,
    read_only: Vec<Span>,
}

impl<'a, M: DocumentMetrics + ?Sized> LeafBuilder<'a, M> {
    pub fn new(doc: &'a M, options: IndentOptions) -> Self {
        Self {
            doc,
            options,
            read_only: vec![],
        }
    }

    /// Leaves overlapping `span` are flagged read-only.
    pub fn read_only(mut self, span: Span) -> Self {
        self.read_only.push(span);
        self
    }

    pub fn build(&self, tokens: &[Token<'_>]) -> LeafChain {
        self.build_with_trailing(tokens).0
    }

    /// Like [`build`](Self::build), also returning the whitespace after the
    /// last leaf.
    pub fn build_with_trailing(&self, tokens: &[Token<'_>]) -> (LeafChain, WhiteSpace) {
        let mut chain = LeafChain::new();
        let mut ws = WhiteSpace::empty(tokens.first().map_or(0, |t| t.span.start));

        for token in tokens {
            if token.kind.is_trivia() {
                ws.append(token.text, &self.options);
                continue;
            }
            chain.push(self.leaf(token, ws));
            ws = WhiteSpace::empty(token.span.end);
        }

        log::debug!("built {} leaves from {} tokens", chain.len(), tokens.len());
        (chain, ws)
    }

    fn leaf(&self, token: &Token<'_>, whitespace_before: WhiteSpace) -> Leaf {
        let span = Span::from(token.span.clone());
        let last_line = self.doc.line_number_of(span.end);
        let contains_line_feeds = self.doc.line_number_of(span.start) != last_line;

        // A leaf may run over several lines; only its last line counts.
        let from = if contains_line_feeds {
            self.doc.line_start_offset(last_line)
        } else {
            span.start
        };
        let last_line_text = token
            .text
            .get(from.saturating_sub(span.start)..)
            .unwrap_or_default();
        let symbols = column_width(last_line_text, &self.options);

        let read_only = self.read_only.iter().any(|r| r.overlaps(span));
        Leaf::new(
            token.kind,
            span,
            whitespace_before,
            contains_line_feeds,
            symbols,
            read_only,
        )
    }
}
