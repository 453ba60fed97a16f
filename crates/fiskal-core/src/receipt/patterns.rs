//! Fixed delimiters and text patterns of the fiscal receipt layout.

use lazy_static::lazy_static;
use regex::Regex;

/// Line opening (and closing) the item table: 40 `=` characters.
pub const ITEM_TABLE_BOUNDARY: &str = "========================================";

/// Line separating the items from the totals: 40 `-` characters.
pub const TOTALS_DIVIDER: &str = "----------------------------------------";

/// Last cell of the item table header row ("Total").
pub const ITEM_HEADER_TOKEN: &str = "Укупно";

lazy_static! {
    // Runs of spaces/tabs inside a single physical line
    pub static ref INLINE_WHITESPACE: Regex = Regex::new(r"[ \t]+").unwrap();
}

/// Collapse runs of inline whitespace to a single space.
pub fn collapse_whitespace(line: &str) -> String {
    INLINE_WHITESPACE.replace_all(line, " ").into_owned()
}
