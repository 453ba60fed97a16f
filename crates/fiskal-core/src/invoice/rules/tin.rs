//! Tax identification number (PIB) handling.

/// Trim a printed tax identification number.
pub fn normalize_tin(value: &str) -> String {
    value.trim().to_string()
}

/// Buyer TIN from the buyer label.
///
/// The label reads `<id type>:<id>` (e.g. `10:987654321`); the id after the
/// colon is returned. Any other shape is returned trimmed as printed, and an
/// empty label means the receipt has no buyer.
pub fn buyer_tin_from_label(label: &str) -> Option<String> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    let parts: Vec<&str> = label.split(':').collect();
    match parts.as_slice() {
        [_, id] => Some(id.trim().to_string()),
        _ => Some(label.to_string()),
    }
}
