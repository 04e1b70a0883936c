//! # Document
//!
//! The line-oriented text buffer every other module reads through.
//!
//! - **`span`**: byte ranges into the buffer
//! - **`lines`**: `lines_with_spans` and the `LineIndex` of line starts
//! - **`slice`**: span-to-text helpers
//! - **`metrics`**: the `DocumentMetrics` trait (line count, line of offset,
//!   line start) consumed by the partitioner and the leaf builder
//! - **`rope`**: `RopeDocument`, an `xi_rope::Rope` snapshot implementing it

pub mod lines;
pub mod metrics;
pub mod rope;
pub mod slice;
pub mod span;

pub use lines::{LineIndex, LineRef, lines_with_spans};
pub use metrics::DocumentMetrics;
pub use rope::RopeDocument;
pub use slice::{preview, slice_to_string};
pub use span::Span;
