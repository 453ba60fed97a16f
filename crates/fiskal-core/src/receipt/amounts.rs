//! Amounts in the Serbian receipt convention (`1.960,00`).

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse an amount printed with `.` thousands and `,` decimal separators.
///
/// Dots are dropped and the comma becomes the decimal point, so `"4.000,00"`
/// is 4000.00. Anything but an optional leading minus, digits, dots and
/// commas is rejected.
pub fn parse_serbian_amount(s: &str) -> Option<Decimal> {
    let s = s.trim();
    let digits = s.strip_prefix('-').unwrap_or(s);

    if !digits.chars().any(|c| c.is_ascii_digit())
        || !digits
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
    {
        return None;
    }

    let normalized = s.replace('.', "").replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// Format amount in receipt style (1.234,56).
pub fn format_serbian_amount(amount: Decimal) -> String {
    let s = format!("{:.2}", amount.abs().round_dp(2));
    let Some((integer_part, decimal_part)) = s.split_once('.') else {
        return s;
    };

    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();
    if amount.is_sign_negative() && !amount.is_zero() {
        formatted.push('-');
    }

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(*c);
    }

    format!("{},{}", formatted, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serbian_amount() {
        assert_eq!(
            parse_serbian_amount("4.000,00"),
            Some(Decimal::from_str("4000.00").unwrap())
        );
        assert_eq!(
            parse_serbian_amount("1.960,00"),
            Some(Decimal::from_str("1960.00").unwrap())
        );
        assert_eq!(
            parse_serbian_amount("696,00"),
            Some(Decimal::from_str("696").unwrap())
        );
        assert_eq!(
            parse_serbian_amount("1.234.567,89"),
            Some(Decimal::from_str("1234567.89").unwrap())
        );
        assert_eq!(
            parse_serbian_amount("-50,00"),
            Some(Decimal::from_str("-50").unwrap())
        );
        assert_eq!(parse_serbian_amount("12"), Some(Decimal::from(12)));
    }

    #[test]
    fn test_parse_rejects_text() {
        assert_eq!(parse_serbian_amount("test"), None);
        assert_eq!(parse_serbian_amount("(Ђ)"), None);
        assert_eq!(parse_serbian_amount(""), None);
        assert_eq!(parse_serbian_amount(",."), None);
        assert_eq!(parse_serbian_amount("1,2,3"), None);
        assert_eq!(parse_serbian_amount("1e5"), None);
    }

    #[test]
    fn test_format_serbian_amount() {
        let amount = Decimal::from_str("8960").unwrap();
        assert_eq!(format_serbian_amount(amount), "8.960,00");

        let amount = Decimal::from_str("1234567.891").unwrap();
        assert_eq!(format_serbian_amount(amount), "1.234.567,89");

        let amount = Decimal::from_str("-196.5").unwrap();
        assert_eq!(format_serbian_amount(amount), "-196,50");
    }
}
