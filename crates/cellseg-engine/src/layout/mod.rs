//! # Leaf Layout
//!
//! A flat chain of leaves (token plus leading whitespace) and the backward
//! walk that tells where a leaf starts on its physical line.
//!
//! ```text
//! tokens ──► LeafBuilder ──► LeafChain ──► compute_indent(leaf)
//!            (width, line feeds            (walk `previous` until a
//!             measured once)                line-breaking whitespace)
//! ```
//!
//! - **`width`**: column accounting (tabs, fullwidth code points)
//! - **`whitespace`**: `WhiteSpace` runs between leaves
//! - **`leaf`**: immutable `Leaf` geometry
//! - **`chain`**: `LeafChain` arena with index links
//! - **`builder`**: `LeafBuilder` turning tokens into a chain
//! - **`indent`**: `IndentOptions`, `IndentData` and `compute_indent`

pub mod builder;
pub mod chain;
pub mod indent;
pub mod leaf;
pub mod whitespace;
pub mod width;

pub use builder::LeafBuilder;
pub use chain::{LeafChain, LeafId};
pub use indent::{IndentData, IndentOptions, compute_indent};
pub use leaf::Leaf;
pub use whitespace::WhiteSpace;
pub use width::{column_width, is_fullwidth, symbols_at_last_line};
