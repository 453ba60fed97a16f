//! Receipt page parser: labeled fields by CSS selector, items from the receipt body.

use std::time::Instant;

use chrono_tz::Tz;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};

use crate::error::{ExtractionError, Result};
use crate::models::config::{ExtractionConfig, FieldSelectors};
use crate::models::invoice::Invoice;
use crate::receipt::{self, parse_serbian_amount};

use super::rules::{buyer_tin_from_label, normalize_tin, parse_receipt_datetime, parse_timezone};

/// Result of invoice extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted invoice data.
    pub invoice: Invoice,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for invoice parsing.
pub trait InvoiceParser {
    /// Parse an invoice from a receipt verification page.
    fn parse(&self, html: &str) -> Result<ExtractionResult>;
}

/// Compiled field selectors.
struct Selectors {
    company_name: Selector,
    company_tin: Selector,
    buyer_tin: Selector,
    total_amount: Selector,
    datetime: Selector,
    invoice_number: Selector,
    receipt_text: Selector,
}

impl Selectors {
    fn compile(selectors: &FieldSelectors) -> std::result::Result<Self, ExtractionError> {
        Ok(Self {
            company_name: compile_selector(&selectors.company_name)?,
            company_tin: compile_selector(&selectors.company_tin)?,
            buyer_tin: compile_selector(&selectors.buyer_tin)?,
            total_amount: compile_selector(&selectors.total_amount)?,
            datetime: compile_selector(&selectors.datetime)?,
            invoice_number: compile_selector(&selectors.invoice_number)?,
            receipt_text: compile_selector(&selectors.receipt_text)?,
        })
    }
}

fn compile_selector(selector: &str) -> std::result::Result<Selector, ExtractionError> {
    Selector::parse(selector).map_err(|e| ExtractionError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Parser for the tax authority's receipt verification page.
pub struct HtmlInvoiceParser {
    selectors: Selectors,
    timezone: Tz,
    datetime_format: String,
}

impl HtmlInvoiceParser {
    /// Create a parser with the default selectors and timezone.
    pub fn new() -> Result<Self> {
        Self::with_config(&ExtractionConfig::default())
    }

    /// Create a parser from extraction configuration.
    pub fn with_config(config: &ExtractionConfig) -> Result<Self> {
        Ok(Self {
            selectors: Selectors::compile(&config.selectors)?,
            timezone: parse_timezone(&config.timezone)?,
            datetime_format: config.datetime_format.clone(),
        })
    }

    fn first_text(document: &Html, selector: &Selector) -> Option<String> {
        document
            .select(selector)
            .next()
            .map(|element: ElementRef<'_>| element.text().collect::<String>())
    }

    /// Trimmed, non-empty text of a required field.
    fn required_text(
        document: &Html,
        selector: &Selector,
        field: &str,
    ) -> std::result::Result<String, ExtractionError> {
        Self::first_text(document, selector)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ExtractionError::MissingField(field.to_string()))
    }
}

impl InvoiceParser for HtmlInvoiceParser {
    fn parse(&self, html: &str) -> Result<ExtractionResult> {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("Parsing receipt page from {} bytes of HTML", html.len());

        let document = Html::parse_document(html);
        let selectors = &self.selectors;

        let company_name =
            Self::required_text(&document, &selectors.company_name, "company_name")?;
        let company_tin =
            normalize_tin(&Self::required_text(&document, &selectors.company_tin, "company_tin")?);

        let buyer_tin = Self::first_text(&document, &selectors.buyer_tin)
            .and_then(|label| buyer_tin_from_label(&label));
        if buyer_tin.is_none() {
            debug!("Receipt has no buyer TIN");
        }

        let total_text = Self::required_text(&document, &selectors.total_amount, "total_amount")?;
        let total_amount =
            parse_serbian_amount(&total_text).ok_or_else(|| ExtractionError::Parse {
                field: "total_amount".to_string(),
                value: total_text.clone(),
            })?;

        let invoice_number =
            Self::required_text(&document, &selectors.invoice_number, "invoice_number")?;

        let datetime_text = Self::required_text(&document, &selectors.datetime, "datetime")?;
        let datetime =
            parse_receipt_datetime(&datetime_text, &self.datetime_format, self.timezone)?;

        let receipt_text =
            Self::required_text(&document, &selectors.receipt_text, "receipt_text")?;
        let items = receipt::parse_items(&receipt_text)?;

        let invoice = Invoice {
            company_name,
            company_tin,
            buyer_tin,
            invoice_number,
            datetime,
            total_amount,
            items,
            receipt_text,
        };

        for issue in invoice.validate() {
            warn!("Receipt {}: {}", invoice.invoice_number, issue);
            warnings.push(issue);
        }

        debug!(
            "Extracted receipt {} with {} items",
            invoice.invoice_number,
            invoice.items.len()
        );

        Ok(ExtractionResult {
            invoice,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}
