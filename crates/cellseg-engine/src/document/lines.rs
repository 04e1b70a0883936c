use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text, including its terminator.
    pub text: String,
}

impl LineRef {
    /// The line text without `\n` / `\r\n`.
    pub fn content(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters so that spans tile the
/// rope exactly. A trailing newline does not yield a final empty line here;
/// [`LineIndex`] accounts for it.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        let len = line.len();
        offset += len;
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

/// Start offsets of every line in a document snapshot.
///
/// Line numbering follows an editor document: the empty text has no lines,
/// and a trailing line feed opens one more (empty) line at the very end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineIndex {
    starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(rope: &Rope) -> Self {
        let len = rope.len();
        let mut starts = Vec::new();
        let mut ends_with_feed = false;
        for lr in lines_with_spans(rope) {
            starts.push(lr.span.start);
            ends_with_feed = lr.text.ends_with('\n');
        }
        if ends_with_feed {
            starts.push(len);
        }
        Self { starts, len }
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Line containing `offset`. Offsets past the end map to the last line.
    pub fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        }
    }

    /// Start offset of `line`, clamped to the buffer length.
    pub fn start_of(&self, line: usize) -> usize {
        self.starts.get(line).copied().unwrap_or(self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("a", 1)]
    #[case("a\n", 2)]
    #[case("a\nb", 2)]
    #[case("a\r\nb\r\n", 3)]
    #[case("\n\n\n", 4)]
    fn line_count_matches_editor_semantics(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(LineIndex::new(&Rope::from(text)).line_count(), expected);
    }

    #[test]
    fn line_of_maps_offsets_to_lines() {
        let idx = LineIndex::new(&Rope::from("ab\ncd\n"));
        assert_eq!(idx.line_of(0), 0);
        assert_eq!(idx.line_of(2), 0);
        assert_eq!(idx.line_of(3), 1);
        assert_eq!(idx.line_of(5), 1);
        assert_eq!(idx.line_of(6), 2);
        assert_eq!(idx.line_of(100), 2);
    }

    #[test]
    fn line_of_in_empty_document_is_zero() {
        let idx = LineIndex::new(&Rope::from(""));
        assert_eq!(idx.line_of(0), 0);
    }

    #[test]
    fn start_of_clamps_past_the_end() {
        let idx = LineIndex::new(&Rope::from("ab\ncd"));
        assert_eq!(idx.start_of(0), 0);
        assert_eq!(idx.start_of(1), 3);
        assert_eq!(idx.start_of(7), 5);
    }

    #[test]
    fn lines_with_spans_tile_the_rope() {
        let rope = Rope::from("one\ntwo\r\nthree");
        let lines: Vec<_> = lines_with_spans(&rope).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].span, Span::new(4, 9));
        assert_eq!(lines[1].content(), "two");
        assert_eq!(lines[2].span.end, rope.len());
    }
}
