use std::fmt;

use serde::Serialize;

use crate::{
    cells::TITLE_KEY,
    document::{DocumentMetrics, RopeDocument},
    intervals::{CellData, CellKind, Interval, MarkersPresence},
    layout::{LeafChain, compute_indent},
};

/// Snapshot of a split document: its cells and, optionally, its leaves.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub cells: Vec<CellSnap>,
    pub leaves: Vec<LeafSnap>,
}

/// Snapshot of a single cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellSnap {
    pub ordinal: usize,
    pub kind: CellKind,
    /// First line (inclusive).
    pub start: usize,
    /// Last line (exclusive).
    pub end: usize,
    /// Whether the cell opens with a marker line.
    pub marker: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Snapshot of a single leaf and its computed indent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafSnap {
    /// Line the leaf starts on.
    pub line: usize,
    /// Preview of the leaf text (truncated for readability).
    pub text: String,
    /// Columns on the leaf's last line.
    pub width: usize,
    pub indent_spaces: usize,
    pub spaces: usize,
    pub read_only: bool,
}

/// Converts intervals into snapshot rows.
pub fn normalize_cells(cells: &[Interval<CellData>]) -> Vec<CellSnap> {
    cells
        .iter()
        .map(|c| CellSnap {
            ordinal: c.ordinal,
            kind: c.kind,
            start: c.lines.start,
            end: c.lines.end,
            marker: c.markers == MarkersPresence::Top,
            title: c.data.get(TITLE_KEY).cloned(),
        })
        .collect()
}

/// Converts a leaf chain into snapshot rows, one per live leaf.
pub fn normalize_leaves(doc: &RopeDocument, chain: &LeafChain) -> Vec<LeafSnap> {
    chain
        .iter()
        .map(|(id, leaf)| {
            let indent = compute_indent(chain, id).unwrap_or_default();
            LeafSnap {
                line: doc.line_number_of(leaf.span().start),
                text: doc.preview(leaf.span(), 24),
                width: leaf.symbols_at_last_line(),
                indent_spaces: indent.indent_spaces,
                spaces: indent.spaces,
                read_only: leaf.is_read_only(),
            }
        })
        .collect()
}

impl fmt::Display for CellSnap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {}..{}", self.ordinal, self.kind, self.start, self.end)?;
        if self.marker {
            f.write_str(" marker")?;
        }
        if let Some(title) = &self.title {
            write!(f, " {title:?}")?;
        }
        Ok(())
    }
}

impl fmt::Display for LeafSnap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "L{} {}+{} w{} {:?}",
            self.line, self.indent_spaces, self.spaces, self.width, self.text
        )?;
        if self.read_only {
            f.write_str(" ro")?;
        }
        Ok(())
    }
}

/// One row per line, for text snapshots and terminal output.
pub fn render<T: fmt::Display>(rows: &[T]) -> String {
    rows.iter().map(|r| format!("{r}\n")).collect()
}
