//! Receipt page field extraction.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, HtmlInvoiceParser, InvoiceParser};
