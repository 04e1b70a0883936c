//! # Cell Markers
//!
//! The marker stream producer for "percent"-format notebooks: source files
//! whose cells are introduced by comment lines such as
//!
//! ```text
//! # %% Load data
//! # %% [markdown]
//! # %% [raw]
//! ```
//!
//! - **`classify`**: `CellLineClassifier` recognises a marker line on its own
//! - **`producer`**: `cell_markers` scans a document into ordered markers and
//!   `split_cells` hands them to the partitioner

pub mod classify;
pub mod producer;

pub use classify::{CellLineClassifier, CellOptions, MarkerLine};
pub use producer::{KIND_KEY, TITLE_KEY, cell_markers, split_cells};
