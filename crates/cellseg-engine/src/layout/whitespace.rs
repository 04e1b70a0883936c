use crate::document::Span;

use super::indent::{IndentData, IndentOptions};

/// The whitespace run in front of a leaf.
///
/// `spaces` and `indent_spaces` describe the part after the last line feed:
/// a line feed resets both, a tab adds `tab_size` indent columns, every other
/// whitespace character (carriage returns aside) adds one space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhiteSpace {
    pub span: Span,
    pub spaces: usize,
    pub indent_spaces: usize,
    pub line_feeds: usize,
}

impl WhiteSpace {
    /// An empty run positioned at `offset`.
    pub fn empty(offset: usize) -> Self {
        Self {
            span: Span::new(offset, offset),
            ..Self::default()
        }
    }

    /// Measures `text`, which starts at `offset`.
    pub fn measure(offset: usize, text: &str, options: &IndentOptions) -> Self {
        let mut ws = Self::empty(offset);
        ws.append(text, options);
        ws
    }

    /// Extends the run with the directly following `text`.
    pub fn append(&mut self, text: &str, options: &IndentOptions) {
        for c in text.chars() {
            match c {
                '\n' => {
                    self.line_feeds += 1;
                    self.spaces = 0;
                    self.indent_spaces = 0;
                }
                '\r' => {}
                '\t' => self.indent_spaces += options.tab_size,
                _ => self.spaces += 1,
            }
        }
        self.span.end += text.len();
    }

    pub fn contains_line_feeds(&self) -> bool {
        self.line_feeds > 0
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    pub fn indent(&self) -> IndentData {
        IndentData::new(self.indent_spaces, self.spaces)
    }
}
