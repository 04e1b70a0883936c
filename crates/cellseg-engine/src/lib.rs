//! # cellseg-engine
//!
//! Two small layout algorithms over a line-oriented document snapshot:
//!
//! - **Cell partitioning** ([`intervals`], fed by [`cells`]): a sorted marker
//!   stream becomes a gap-free list of typed line ranges.
//! - **Leaf indent** ([`layout`]): a chain of leaves built from a token stream
//!   answers "at which column does this leaf start on its line?".
//!
//! ```
//! use cellseg_engine::{RopeDocument, cells::{CellOptions, split_cells}};
//!
//! let doc = RopeDocument::from("import os\n# %% [markdown]\n# Title\n");
//! let cells = split_cells(&doc, &CellOptions::default()).unwrap();
//! assert_eq!(cells.len(), 2);
//! assert_eq!(cells[1].lines, 1..4);
//! ```

pub mod cells;
pub mod document;
pub mod intervals;
pub mod layout;
pub mod snapshot;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use document::{DocumentMetrics, RopeDocument, Span};
pub use intervals::{
    CellData, CellKind, Interval, Marker, MarkersPresence, PartitionError, partition_intervals,
};
pub use layout::{IndentData, IndentOptions, LeafBuilder, LeafChain, LeafId, compute_indent};
