//! Error types for the fiskal-core library.

use thiserror::Error;

/// Main error type for the fiskal library.
#[derive(Error, Debug)]
pub enum FiskalError {
    /// Receipt text could not be split into items.
    #[error("receipt error: {0}")]
    Receipt(#[from] ReceiptError),

    /// Header field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Structural problems in the receipt body text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReceiptError {
    /// A required delimiter (item-table boundary, totals divider, header row) is missing.
    #[error("malformed receipt: {reason}")]
    MalformedReceipt { reason: String },

    /// An item never reached its numeric row, or the row holds out-of-range values.
    #[error("malformed item row: {reason}")]
    MalformedItemRow { reason: String },
}

impl ReceiptError {
    pub(crate) fn malformed_receipt(reason: impl Into<String>) -> Self {
        Self::MalformedReceipt {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_item_row(reason: impl Into<String>) -> Self {
        Self::MalformedItemRow {
            reason: reason.into(),
        }
    }
}

/// Errors related to header field extraction from the receipt page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// Required field is missing from the page.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Failed to parse a value.
    #[error("failed to parse {field}: {value}")]
    Parse { field: String, value: String },

    /// A configured CSS selector is invalid.
    #[error("invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },
}

/// Result type for the fiskal library.
pub type Result<T> = std::result::Result<T, FiskalError>;
