//! Core library for Serbian fiscal receipt processing.
//!
//! This crate provides:
//! - Receipt body parsing (item block isolation, line item tokenizing, VAT decoding)
//! - Labeled field extraction from the receipt verification page
//! - Receipt timestamp normalization to UTC
//! - Invoice data models

pub mod error;
pub mod invoice;
pub mod models;
pub mod receipt;

pub use error::{ExtractionError, FiskalError, ReceiptError, Result};
pub use invoice::{ExtractionResult, HtmlInvoiceParser, InvoiceParser};
pub use models::config::FiskalConfig;
pub use models::invoice::{Invoice, LineItem, VatCategory, VatMarker};
pub use receipt::parse_items;
