//! Column accounting shared by leaves and whitespace.
//!
//! A tab advances `tab_size` columns, an East Asian wide or fullwidth code
//! point two, anything else one.

use unicode_width::UnicodeWidthChar;

use super::indent::IndentOptions;

/// Whether `c` occupies two cells in monospaced layout.
pub fn is_fullwidth(c: char) -> bool {
    UnicodeWidthChar::width(c) == Some(2)
}

/// Columns taken by a single code point.
fn char_columns(c: char, options: &IndentOptions) -> usize {
    if c == '\t' {
        options.tab_size
    } else if is_fullwidth(c) {
        2
    } else {
        1
    }
}

/// Columns taken by `text`, read as a single line.
pub fn column_width(text: &str, options: &IndentOptions) -> usize {
    text.chars().map(|c| char_columns(c, options)).sum()
}

/// Columns taken by the part of `text` after its last line feed.
pub fn symbols_at_last_line(text: &str, options: &IndentOptions) -> usize {
    let last_line = text.rfind('\n').map_or(0, |i| i + 1);
    column_width(&text[last_line..], options)
}
