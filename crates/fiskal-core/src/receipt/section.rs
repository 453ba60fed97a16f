//! Isolation of the item block from the full receipt text.

use tracing::debug;

use crate::error::ReceiptError;

use super::patterns::{ITEM_HEADER_TOKEN, ITEM_TABLE_BOUNDARY, TOTALS_DIVIDER};

/// Extract the item block: the text between the item header row and the
/// totals divider, trimmed.
///
/// The delimiters must appear in order: an `=` boundary line, the header row
/// ending in "Укупно", the items, then the `-` totals divider.
pub fn isolate(full_text: &str) -> Result<&str, ReceiptError> {
    // Text between the first and second `=` boundary.
    let table = full_text
        .split(ITEM_TABLE_BOUNDARY)
        .nth(1)
        .ok_or_else(|| ReceiptError::malformed_receipt("missing item-table boundary"))?;

    let (before_totals, _) = table
        .split_once(TOTALS_DIVIDER)
        .ok_or_else(|| ReceiptError::malformed_receipt("missing totals divider"))?;

    let block = before_totals
        .split(ITEM_HEADER_TOKEN)
        .nth(1)
        .ok_or_else(|| ReceiptError::malformed_receipt("missing item header row"))?;

    debug!("Isolated item block of {} bytes", block.len());

    Ok(block.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(body: &str) -> String {
        format!(
            "============ ФИСКАЛНИ РАЧУН ============\nКасир: test\n{}\nНазив   Цена         Кол.         Укупно\n{}\n{}\nУкупан износ:                   1.000,00\n{}\nОзнака       Име      Стопа        Порез\n",
            ITEM_TABLE_BOUNDARY, body, TOTALS_DIVIDER, ITEM_TABLE_BOUNDARY
        )
    }

    #[test]
    fn test_isolate_item_block() {
        let text = receipt("Hleb (Е)\n    100,00          1       100,00");
        assert_eq!(
            isolate(&text).unwrap(),
            "Hleb (Е)\n    100,00          1       100,00"
        );
    }

    #[test]
    fn test_missing_table_boundary() {
        let err = isolate("Назив   Цена   Кол.   Укупно\nHleb\n").unwrap_err();
        assert_eq!(
            err,
            ReceiptError::MalformedReceipt {
                reason: "missing item-table boundary".to_string()
            }
        );
    }

    #[test]
    fn test_missing_totals_divider() {
        let text = format!(
            "{}\nНазив   Укупно\nHleb (Е)\n 100,00 1 100,00\nУкупан износ: 100,00\n",
            ITEM_TABLE_BOUNDARY
        );
        let err = isolate(&text).unwrap_err();
        assert_eq!(
            err,
            ReceiptError::MalformedReceipt {
                reason: "missing totals divider".to_string()
            }
        );
    }

    #[test]
    fn test_missing_header_row() {
        let text = format!(
            "{}\nHleb (Е)\n 100,00 1 100,00\n{}\n",
            ITEM_TABLE_BOUNDARY, TOTALS_DIVIDER
        );
        assert!(matches!(
            isolate(&text),
            Err(ReceiptError::MalformedReceipt { reason }) if reason == "missing item header row"
        ));
    }

    #[test]
    fn test_short_dash_lines_are_not_dividers() {
        // The dashed sales banner is shorter than the totals divider.
        let text = receipt("Hleb (Е)\n 100,00 1 100,00").replace(
            "Касир: test",
            "-------------ПРОМЕТ ПРОДАЈА-------------",
        );
        assert_eq!(isolate(&text).unwrap(), "Hleb (Е)\n 100,00 1 100,00");
    }

    #[test]
    fn test_empty_item_block() {
        let text = receipt("");
        assert_eq!(isolate(&text).unwrap(), "");
    }
}
