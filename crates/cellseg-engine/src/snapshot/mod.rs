//! # Snapshot Support
//!
//! Stable, serializable views of partitioning and layout results, plus
//! runtime invariant checks.
//!
//! - **`normalize`**: converts intervals and leaf chains into `CellSnap` /
//!   `LeafSnap` rows (used by `insta` snapshots and the CLI report)
//! - **`invariants`**: asserts the partition covers the document without gaps
//!   and the leaf chain links are consistent

pub mod invariants;
pub mod normalize;

pub use invariants::{check as invariants, check_chain};
pub use normalize::{CellSnap, LeafSnap, Report, normalize_cells, normalize_leaves, render};
