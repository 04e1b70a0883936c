use std::{collections::BTreeMap, fmt, ops::Range};

use serde::Serialize;

/// Classification of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    /// Plain text; also the kind of the synthetic leading/trailing boundaries.
    Raw,
    Code,
    Markdown,
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CellKind::Raw => "raw",
            CellKind::Code => "code",
            CellKind::Markdown => "markdown",
        };
        f.write_str(s)
    }
}

/// Whether an interval starts with marker lines of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarkersPresence {
    /// Synthetic interval, no marker text in the document.
    None,
    /// The first line(s) of the interval hold the marker.
    Top,
}

/// Default opaque payload attached to markers and intervals.
pub type CellData = BTreeMap<String, String>;

/// A typed position in the buffer where a new segment begins.
///
/// `data` is opaque to the partitioner: it is carried to the matching
/// interval untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker<D = CellData> {
    pub ordinal: usize,
    pub kind: CellKind,
    /// Byte offset of the marker text.
    pub offset: usize,
    /// Byte length of the marker text.
    pub length: usize,
    pub data: D,
}

/// A line at which one interval ends and the next begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Boundary<D = CellData> {
    pub line: usize,
    pub kind: CellKind,
    pub markers: MarkersPresence,
    pub data: D,
}

/// One cell of the document partition: a half-open line range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval<D = CellData> {
    pub ordinal: usize,
    pub kind: CellKind,
    pub lines: Range<usize>,
    pub markers: MarkersPresence,
    pub data: D,
}

impl<D> Interval<D> {
    /// Number of lines covered. Zero when two markers share a line.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains_line(&self, line: usize) -> bool {
        self.lines.contains(&line)
    }
}
