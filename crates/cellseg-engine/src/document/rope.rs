use xi_rope::Rope;

use super::{
    lines::{LineIndex, LineRef, lines_with_spans},
    metrics::DocumentMetrics,
    slice::{preview, slice_to_string},
    span::Span,
};

/// An immutable document snapshot: the rope plus its line index.
///
/// Built once per text version; every query afterwards is read-only, so a
/// snapshot can be shared between threads behind a reference.
#[derive(Debug, Clone)]
pub struct RopeDocument {
    rope: Rope,
    lines: LineIndex,
}

impl RopeDocument {
    pub fn new(rope: Rope) -> Self {
        let lines = LineIndex::new(&rope);
        Self { rope, lines }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.rope.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len() == 0
    }

    pub fn slice(&self, sp: Span) -> String {
        slice_to_string(&self.rope, sp)
    }

    pub fn preview(&self, sp: Span, max: usize) -> String {
        preview(&self.rope, sp, max)
    }

    pub fn lines(&self) -> impl Iterator<Item = LineRef> + '_ {
        lines_with_spans(&self.rope)
    }
}

impl From<&str> for RopeDocument {
    fn from(text: &str) -> Self {
        Self::new(Rope::from(text))
    }
}

impl DocumentMetrics for RopeDocument {
    fn line_count(&self) -> usize {
        self.lines.line_count()
    }

    fn line_number_of(&self, offset: usize) -> usize {
        self.lines.line_of(offset)
    }

    fn line_start_offset(&self, line: usize) -> usize {
        self.lines.start_of(line)
    }
}
