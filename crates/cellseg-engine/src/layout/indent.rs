use std::ops::{Add, AddAssign};

use serde::Serialize;

use super::chain::{LeafChain, LeafId};

/// Tab handling for width measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentOptions {
    /// Columns a tab advances. Must be at least 1.
    pub tab_size: usize,
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self { tab_size: 4 }
    }
}

/// A horizontal offset split into structural indent and extra spaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct IndentData {
    pub indent_spaces: usize,
    pub spaces: usize,
}

impl IndentData {
    pub fn new(indent_spaces: usize, spaces: usize) -> Self {
        Self {
            indent_spaces,
            spaces,
        }
    }

    /// Both components as one column count.
    pub fn total(self) -> usize {
        self.indent_spaces + self.spaces
    }

    pub fn is_empty(self) -> bool {
        self.total() == 0
    }
}

impl Add for IndentData {
    type Output = IndentData;

    fn add(self, rhs: IndentData) -> IndentData {
        IndentData {
            indent_spaces: self.indent_spaces + rhs.indent_spaces,
            spaces: self.spaces + rhs.spaces,
        }
    }
}

impl AddAssign for IndentData {
    fn add_assign(&mut self, rhs: IndentData) {
        *self = *self + rhs;
    }
}

/// Horizontal position where `leaf`'s own text begins, relative to the start
/// of its physical line.
///
/// When the whitespace in front of `leaf` holds a line break, that
/// whitespace alone is the answer. Otherwise the walk goes backwards through
/// the chain, adding each earlier leaf's leading whitespace and its columns
/// on the shared line, and stops after the first leaf whose leading
/// whitespace holds a line break, or at the start of the chain.
///
/// Tab size is already folded into the leaf widths when the chain is built.
/// Returns `None` if `leaf` is not a live leaf of `chain`.
pub fn compute_indent(chain: &LeafChain, leaf: LeafId) -> Option<IndentData> {
    let start = chain.get(leaf)?;
    let mut result = start.whitespace_before().indent();
    if start.whitespace_before().contains_line_feeds() {
        return Some(result);
    }

    let mut current = start.previous().and_then(|id| chain.get(id));
    while let Some(prev) = current {
        let ws = prev.whitespace_before();
        result += ws.indent();
        result.spaces += prev.symbols_at_last_line();
        log::trace!("indent walk {leaf:?}: passed {:?}, now {result:?}", prev.span());
        if ws.contains_line_feeds() {
            break;
        }
        current = prev.previous().and_then(|id| chain.get(id));
    }
    Some(result)
}
