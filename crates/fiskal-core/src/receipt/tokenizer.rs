//! Line item tokenizer for the receipt item block.
//!
//! Every item is one or more name lines followed by a numeric row
//! `<price> <quantity> <total>`:
//!
//! ```text
//! Veoma dugačak naziv artikla za testiranj
//! e test 1 (Ђ)
//!     4.000,00          1       4.000,00
//! ```
//!
//! The scan is a two-state machine over physical lines:
//!
//! | state                          | line                | next state                     |
//! |--------------------------------|---------------------|--------------------------------|
//! | `ExpectingName`                | any                 | `ExpectingNumberOrContinuation` |
//! | `ExpectingNumberOrContinuation`| numeric row         | `ExpectingName` (item emitted) |
//! | `ExpectingNumberOrContinuation`| anything else       | `ExpectingNumberOrContinuation` |

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::error::ReceiptError;
use crate::models::invoice::LineItem;

use super::amounts::parse_serbian_amount;
use super::patterns::collapse_whitespace;
use super::translit::cyrillic_to_latin;
use super::vat::{split_vat_suffix, vat_percent};

/// The three values of an item's numeric row, as printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericRow {
    pub price: Decimal,
    pub quantity: i64,
    pub total: Decimal,
}

/// Outcome of reading a line as a numeric row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowParse {
    /// The line is the item's numeric row.
    Row(NumericRow),
    /// The line continues the item name.
    Continuation,
}

/// Read a whitespace-collapsed line as `<price> <quantity> <total>`.
///
/// Only the first three tokens count; anything printed after the total is
/// ignored.
pub fn parse_numeric_row(line: &str) -> RowParse {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[price, quantity, total, ..] = tokens.as_slice() else {
        return RowParse::Continuation;
    };

    let (Some(price), Ok(quantity), Some(total)) = (
        parse_serbian_amount(price),
        quantity.parse::<i64>(),
        parse_serbian_amount(total),
    ) else {
        return RowParse::Continuation;
    };

    RowParse::Row(NumericRow {
        price,
        quantity,
        total,
    })
}

/// Item being accumulated until its numeric row shows up.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LineItemDraft {
    name: String,
}

impl LineItemDraft {
    fn new(first_line: String) -> Self {
        Self { name: first_line }
    }

    /// Append a continuation line verbatim; no separator is inserted.
    fn push_continuation(&mut self, line: &str) {
        self.name.push_str(line);
    }

    fn finish(self, row: NumericRow) -> Result<LineItem, ReceiptError> {
        let quantity = u64::try_from(row.quantity).map_err(|_| {
            ReceiptError::malformed_item_row(format!(
                "negative quantity {} for item '{}'",
                row.quantity,
                self.name.trim()
            ))
        })?;

        let latin = cyrillic_to_latin(&self.name);
        let (name, marker) = split_vat_suffix(latin.trim());

        Ok(LineItem {
            name: name.to_string(),
            vat: vat_percent(marker),
            vat_code: marker.map(|m| m.letter()),
            price: row.price,
            quantity,
            total_price: row.total,
        })
    }
}

#[derive(Debug)]
enum ScanState {
    ExpectingName,
    ExpectingNumberOrContinuation(LineItemDraft),
}

/// Split the item block into line items, in the order their numeric rows appear.
///
/// Lines end in `\r\n` or `\n`. Fails with `MalformedItemRow` when the last
/// item never reaches a numeric row; no partial list is returned.
pub fn tokenize(block: &str) -> Result<Vec<LineItem>, ReceiptError> {
    let mut items = Vec::new();
    let mut state = ScanState::ExpectingName;

    for raw_line in block.lines() {
        let line = collapse_whitespace(raw_line);

        state = match state {
            ScanState::ExpectingName => {
                ScanState::ExpectingNumberOrContinuation(LineItemDraft::new(line))
            }
            ScanState::ExpectingNumberOrContinuation(mut draft) => match parse_numeric_row(&line) {
                RowParse::Row(row) => {
                    let item = draft.finish(row)?;
                    debug!(
                        "Parsed item '{}': {} x {} = {} (VAT {}%)",
                        item.name, item.quantity, item.price, item.total_price, item.vat
                    );
                    items.push(item);
                    ScanState::ExpectingName
                }
                RowParse::Continuation => {
                    trace!("Continuation line: {:?}", line);
                    draft.push_continuation(&line);
                    ScanState::ExpectingNumberOrContinuation(draft)
                }
            },
        };
    }

    match state {
        ScanState::ExpectingName => Ok(items),
        ScanState::ExpectingNumberOrContinuation(draft) => {
            Err(ReceiptError::malformed_item_row(format!(
                "unterminated item '{}'",
                draft.name.trim()
            )))
        }
    }
}
