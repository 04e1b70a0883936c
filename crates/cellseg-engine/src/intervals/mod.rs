//! # Interval Partitioning
//!
//! Turns a marker stream over a line-oriented document into a complete,
//! gap-free partition of its lines.
//!
//! ```text
//! markers ──► boundaries ──► intervals
//!             [synthetic first?] + one per marker + synthetic last
//! ```
//!
//! ## Key Invariants
//!
//! - Intervals cover `[0, max(line_count, 1))` with no gaps and no overlaps
//! - `intervals.len() == boundaries.len() - 1`
//! - Marker payloads reach their interval untouched
//! - Markers sharing a line yield a zero-length interval for the earlier one

pub mod error;
pub mod partition;
pub mod types;

pub use error::PartitionError;
pub use partition::{boundaries, find_interval, partition_intervals};
pub use types::{Boundary, CellData, CellKind, Interval, Marker, MarkersPresence};
