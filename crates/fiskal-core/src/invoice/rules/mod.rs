//! Rules for normalizing labeled header fields.

pub mod dates;
pub mod tin;

pub use dates::{parse_receipt_datetime, parse_timezone};
pub use tin::{buyer_tin_from_label, normalize_tin};
