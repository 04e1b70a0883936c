/// Line geometry of a text buffer, as seen by the partitioner and the leaf
/// builder.
///
/// Implementations must be consistent for the duration of a call: the same
/// offset maps to the same line, and `line_start_offset(line_number_of(o)) <= o`
/// for every in-bounds offset `o`.
pub trait DocumentMetrics {
    /// Number of lines. An empty document may report 0.
    fn line_count(&self) -> usize;

    /// Zero-based line containing `offset`.
    fn line_number_of(&self, offset: usize) -> usize;

    /// Offset of the first character of `line`.
    fn line_start_offset(&self, line: usize) -> usize;
}

impl<T: DocumentMetrics + ?Sized> DocumentMetrics for &T {
    fn line_count(&self) -> usize {
        (**self).line_count()
    }

    fn line_number_of(&self, offset: usize) -> usize {
        (**self).line_number_of(offset)
    }

    fn line_start_offset(&self, line: usize) -> usize {
        (**self).line_start_offset(line)
    }
}
