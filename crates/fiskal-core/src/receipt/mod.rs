//! Receipt body parsing: item block isolation and line item tokenizing.

pub mod amounts;
pub mod patterns;
pub mod section;
pub mod tokenizer;
pub mod translit;
pub mod vat;

pub use amounts::{format_serbian_amount, parse_serbian_amount};
pub use section::isolate;
pub use tokenizer::{parse_numeric_row, tokenize, NumericRow, RowParse};
pub use translit::cyrillic_to_latin;
pub use vat::split_vat_suffix;

use crate::error::ReceiptError;
use crate::models::invoice::LineItem;

/// Result type for receipt parsing.
pub type Result<T> = std::result::Result<T, ReceiptError>;

/// Parse all line items out of the full receipt text.
pub fn parse_items(receipt_text: &str) -> Result<Vec<LineItem>> {
    let block = isolate(receipt_text)?;
    tokenize(block)
}
