/// A byte range `[start, end)` into the document.
///
/// Leaves, whitespace runs and marker lines store spans rather than copied
/// text; slicing the document with any span reproduces the exact source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Strict interior containment: the edges themselves are outside.
    #[must_use]
    pub fn contains_strict(self, offset: usize) -> bool {
        self.start < offset && offset < self.end
    }

    /// Whether the two spans share at least one byte.
    #[must_use]
    pub fn overlaps(self, other: Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(r: std::ops::Range<usize>) -> Self {
        Self {
            start: r.start,
            end: r.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_saturates_on_inverted_span() {
        assert_eq!(Span::new(5, 3).len(), 0);
        assert!(Span::new(5, 3).is_empty());
    }

    #[test]
    fn contains_strict_excludes_edges() {
        let sp = Span::new(2, 5);
        assert!(!sp.contains_strict(2));
        assert!(sp.contains_strict(3));
        assert!(sp.contains_strict(4));
        assert!(!sp.contains_strict(5));
    }

    #[test]
    fn overlaps_requires_shared_byte() {
        assert!(Span::new(0, 3).overlaps(Span::new(2, 4)));
        assert!(!Span::new(0, 3).overlaps(Span::new(3, 4)));
        assert!(!Span::new(0, 0).overlaps(Span::new(0, 4)));
    }
}
