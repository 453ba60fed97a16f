use std::str::FromStr;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

use fiskal_core::receipt::{isolate, tokenize};
use fiskal_core::{
    parse_items, FiskalError, HtmlInvoiceParser, InvoiceParser, LineItem, ReceiptError,
};

const RECEIPT_TEXT: &str = include_str!("fixtures/receipt.txt");
const RECEIPT_PAGE: &str = include_str!("fixtures/receipt.html");

fn item(name: &str, vat: u8, vat_code: char, price: &str, total: &str) -> LineItem {
    LineItem {
        name: name.to_string(),
        vat,
        vat_code: Some(vat_code),
        price: Decimal::from_str(price).unwrap(),
        quantity: 1,
        total_price: Decimal::from_str(total).unwrap(),
    }
}

fn expected_items() -> Vec<LineItem> {
    vec![
        item("Veoma dugačak naziv artikla za testiranje test 1", 20, 'đ', "4000.0", "4000.0"),
        item("Veoma dugačak naziv artikla za testiranj test 2", 20, 'đ', "1000.0", "1000.0"),
        item("Kratak naziv artikla 1", 10, 'e', "1960.0", "1960.0"),
        item("Kratak naziv artikla 2", 0, 'g', "1000.0", "1000.0"),
        item("Kratak naziv artikla 3", 0, 'a', "1000.0", "1000.0"),
    ]
}

#[test]
fn parses_reference_receipt_items() {
    let items = parse_items(RECEIPT_TEXT).unwrap();
    assert_eq!(items, expected_items());
}

#[test]
fn parses_crlf_receipt_items() {
    let crlf = RECEIPT_TEXT.replace('\n', "\r\n");
    assert_eq!(parse_items(&crlf).unwrap(), expected_items());
}

#[test]
fn isolate_then_tokenize_is_stable() {
    let block = isolate(RECEIPT_TEXT).unwrap();
    assert!(block.starts_with("Veoma dugačak naziv artikla za testiranj"));
    assert!(block.ends_with("1.000,00"));

    let first = tokenize(block).unwrap();
    let second = tokenize(block).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_totals_divider_is_malformed_receipt() {
    let text = RECEIPT_TEXT.replace(&"-".repeat(40), "");
    assert!(matches!(
        parse_items(&text),
        Err(ReceiptError::MalformedReceipt { .. })
    ));
}

#[test]
fn truncated_item_is_malformed_item_row() {
    let text = RECEIPT_TEXT.replace("    1.000,00          1       1.000,00\n---", "---");
    assert!(matches!(
        parse_items(&text),
        Err(ReceiptError::MalformedItemRow { .. })
    ));
}

#[test]
fn parses_reference_page() {
    let parser = HtmlInvoiceParser::new().unwrap();
    let result = parser.parse(RECEIPT_PAGE).unwrap();
    let invoice = result.invoice;

    assert_eq!(invoice.company_name, "Primer naziva firme");
    assert_eq!(invoice.company_tin, "123456789");
    assert_eq!(invoice.buyer_tin.as_deref(), Some("987654321"));
    assert_eq!(invoice.invoice_number, "QWERTYU1-QWERTYU1-12345");
    assert_eq!(invoice.total_amount, Decimal::from(8960));
    assert_eq!(
        invoice.datetime,
        Utc.with_ymd_and_hms(2024, 4, 7, 15, 0, 30).unwrap()
    );
    assert_eq!(invoice.items, expected_items());
    assert!(invoice.receipt_text.starts_with("============ ФИСКАЛНИ РАЧУН ============"));
    assert!(invoice.receipt_text.ends_with("======== КРАЈ ФИСКАЛНОГ РАЧУНА ========="));
    assert!(result.warnings.is_empty());
}

#[test]
fn serializes_with_receipt_field_names() {
    let parser = HtmlInvoiceParser::new().unwrap();
    let invoice = parser.parse(RECEIPT_PAGE).unwrap().invoice;
    let json = serde_json::to_value(&invoice).unwrap();

    assert_eq!(json["company_name"], "Primer naziva firme");
    assert_eq!(json["invoice_datetime"], "2024-04-07T15:00:30Z");
    assert_eq!(json["invoice_items"].as_array().unwrap().len(), 5);
    assert_eq!(json["invoice_items"][2]["vat"], 10);
    assert_eq!(json["invoice_items"][2]["name"], "Kratak naziv artikla 1");
    assert_eq!(json["invoice_items"][2]["price"], 1960.0);
    assert_eq!(json["invoice_items"][2]["total_price"], 1960.0);
    assert!(json["invoice_total_amount"].is_f64());
}

#[test]
fn page_without_fields_fails() {
    let parser = HtmlInvoiceParser::new().unwrap();
    let err = parser.parse("Bad HTML content").unwrap_err();
    assert!(matches!(err, FiskalError::Extraction(_)));
}
