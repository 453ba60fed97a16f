//! Invoice data models for Serbian fiscal receipts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A complete fiscal receipt representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Registered shop name.
    pub company_name: String,

    /// Seller tax identification number (PIB).
    pub company_tin: String,

    /// Buyer tax identification number, when the receipt was issued to a company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_tin: Option<String>,

    /// Fiscal receipt number issued by the tax authority.
    pub invoice_number: String,

    /// Issue time, normalized to UTC.
    #[serde(rename = "invoice_datetime")]
    pub datetime: DateTime<Utc>,

    /// Total amount paid.
    #[serde(rename = "invoice_total_amount", with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,

    /// Purchased items in receipt order.
    #[serde(rename = "invoice_items")]
    pub items: Vec<LineItem>,

    /// Receipt body text the items were parsed from.
    #[serde(rename = "invoice_text")]
    pub receipt_text: String,
}

/// A single purchased item.
///
/// `price * quantity` is not required to equal `total_price`; receipts may
/// round, and the values are kept as printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name in Latin script, without the VAT suffix.
    pub name: String,

    /// VAT percentage.
    pub vat: u8,

    /// Normalized VAT letter from the name suffix, if the name carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_code: Option<char>,

    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Quantity.
    pub quantity: u64,

    /// Line total.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

impl LineItem {
    /// VAT marker decoded from the printed suffix.
    pub fn vat_marker(&self) -> Option<VatMarker> {
        self.vat_code.map(VatMarker::from_letter)
    }
}

/// Serbian VAT categories printed as a letter after the item name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VatCategory {
    /// `A`: not subject to VAT.
    A,
    /// `E`: reduced rate, 10%.
    E,
    /// `G`: exempt.
    G,
    /// `Đ`: general rate, 20%.
    Dj,
}

impl VatCategory {
    /// Look up a lowercase Latin category letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'a' => Some(VatCategory::A),
            'e' => Some(VatCategory::E),
            'g' => Some(VatCategory::G),
            'đ' => Some(VatCategory::Dj),
            _ => None,
        }
    }

    /// VAT percentage for this category.
    pub fn percent(&self) -> u8 {
        match self {
            VatCategory::A | VatCategory::G => 0,
            VatCategory::E => 10,
            VatCategory::Dj => 20,
        }
    }

    /// Letter as printed on the receipt (Latin script).
    pub fn letter(&self) -> char {
        match self {
            VatCategory::A => 'A',
            VatCategory::E => 'E',
            VatCategory::G => 'G',
            VatCategory::Dj => 'Đ',
        }
    }
}

/// Decoded VAT suffix of an item name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VatMarker {
    /// Letter found in the category table.
    Known(VatCategory),
    /// Letter outside the table; taxed at the general rate.
    Unrecognized(char),
}

impl VatMarker {
    /// Rate applied to letters outside the category table.
    pub const DEFAULT_PERCENT: u8 = 20;

    /// Decode a category letter, case-folded.
    pub fn from_letter(letter: char) -> Self {
        let folded = letter.to_lowercase().next().unwrap_or(letter);
        match VatCategory::from_letter(folded) {
            Some(category) => VatMarker::Known(category),
            None => VatMarker::Unrecognized(folded),
        }
    }

    /// VAT percentage for this marker.
    pub fn percent(&self) -> u8 {
        match self {
            VatMarker::Known(category) => category.percent(),
            VatMarker::Unrecognized(_) => Self::DEFAULT_PERCENT,
        }
    }

    /// Normalized (lowercase) letter.
    pub fn letter(&self) -> char {
        match self {
            VatMarker::Known(category) => {
                category.letter().to_lowercase().next().unwrap_or('?')
            }
            VatMarker::Unrecognized(letter) => *letter,
        }
    }
}

impl Invoice {
    /// Check the invoice for inconsistencies and return any issues found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.items.is_empty() {
            issues.push("No line items".to_string());
        }

        if self.total_amount.is_zero() {
            issues.push("Total amount is zero".to_string());
        }

        let items_total: Decimal = self.items.iter().map(|i| i.total_price).sum();
        if !self.items.is_empty() && (items_total - self.total_amount).abs() > Decimal::new(1, 2) {
            issues.push(format!(
                "Line item total ({}) differs from invoice total ({})",
                items_total, self.total_amount
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(total: i64) -> LineItem {
        LineItem {
            name: "Hleb".to_string(),
            vat: 10,
            vat_code: Some('e'),
            price: Decimal::from(total),
            quantity: 1,
            total_price: Decimal::from(total),
        }
    }

    #[test]
    fn test_vat_table() {
        assert_eq!(VatMarker::from_letter('Đ').percent(), 20);
        assert_eq!(VatMarker::from_letter('đ').percent(), 20);
        assert_eq!(VatMarker::from_letter('E').percent(), 10);
        assert_eq!(VatMarker::from_letter('A').percent(), 0);
        assert_eq!(VatMarker::from_letter('g').percent(), 0);
    }

    #[test]
    fn test_unrecognized_letter_defaults_to_general_rate() {
        let marker = VatMarker::from_letter('Ж');
        assert_eq!(marker, VatMarker::Unrecognized('ж'));
        assert_eq!(marker.percent(), 20);
    }

    #[test]
    fn test_marker_letter() {
        assert_eq!(VatMarker::Known(VatCategory::Dj).letter(), 'đ');
        assert_eq!(item(1).vat_marker(), Some(VatMarker::Known(VatCategory::E)));
    }

    #[test]
    fn test_validate_totals() {
        let mut invoice = Invoice {
            company_name: "Primer".to_string(),
            company_tin: "123456789".to_string(),
            buyer_tin: None,
            invoice_number: "A-B-1".to_string(),
            datetime: Utc.with_ymd_and_hms(2024, 4, 7, 15, 0, 30).unwrap(),
            total_amount: Decimal::from(300),
            items: vec![item(100), item(200)],
            receipt_text: String::new(),
        };
        assert!(invoice.validate().is_empty());

        invoice.total_amount = Decimal::from(350);
        let issues = invoice.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("differs"));

        invoice.items.clear();
        assert_eq!(invoice.validate(), vec!["No line items".to_string()]);
    }
}
