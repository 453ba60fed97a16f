//! VAT suffix decoding for item names.

use crate::models::invoice::VatMarker;

/// Split the VAT suffix off a Latin-script, trimmed item name.
///
/// The receipt prints the category as `(X)` at the very end of the name, so
/// the check is positional: the third-from-last char must be `(`, the
/// second-from-last is the letter, and the last three chars are dropped.
/// Parentheses anywhere else in the name are left alone. Names without the
/// suffix (including names shorter than three chars) carry no marker.
pub fn split_vat_suffix(name: &str) -> (&str, Option<VatMarker>) {
    let mut tail = name.char_indices().rev();
    let (Some(_), Some((_, letter)), Some((open_at, open))) = (tail.next(), tail.next(), tail.next())
    else {
        return (name, None);
    };

    if open != '(' {
        return (name, None);
    }

    (name[..open_at].trim(), Some(VatMarker::from_letter(letter)))
}

/// VAT percentage for an optional marker; names without one are untaxed.
pub fn vat_percent(marker: Option<VatMarker>) -> u8 {
    marker.map_or(0, |m| m.percent())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::invoice::VatCategory;

    #[test]
    fn test_split_known_suffixes() {
        assert_eq!(
            split_vat_suffix("Kratak naziv artikla 1 (E)"),
            ("Kratak naziv artikla 1", Some(VatMarker::Known(VatCategory::E)))
        );
        assert_eq!(
            split_vat_suffix("Test 1 (Đ)"),
            ("Test 1", Some(VatMarker::Known(VatCategory::Dj)))
        );
        assert_eq!(
            split_vat_suffix("Test (g)"),
            ("Test", Some(VatMarker::Known(VatCategory::G)))
        );
    }

    #[test]
    fn test_percentages() {
        for (name, expected) in [
            ("x (Đ)", 20),
            ("x (đ)", 20),
            ("x (E)", 10),
            ("x (e)", 10),
            ("x (A)", 0),
            ("x (a)", 0),
            ("x (G)", 0),
            ("x (g)", 0),
            ("x (Z)", 20),
        ] {
            let (_, marker) = split_vat_suffix(name);
            assert_eq!(vat_percent(marker), expected, "{}", name);
        }
    }

    #[test]
    fn test_no_suffix() {
        assert_eq!(split_vat_suffix("Mleko 1l"), ("Mleko 1l", None));
        assert_eq!(vat_percent(None), 0);
    }

    #[test]
    fn test_parentheses_elsewhere_ignored() {
        assert_eq!(
            split_vat_suffix("Sok (jabuka) 1l"),
            ("Sok (jabuka) 1l", None)
        );
        // Two-letter content is not a VAT suffix.
        assert_eq!(split_vat_suffix("Čaj (XL)"), ("Čaj (XL)", None));
    }

    #[test]
    fn test_short_names() {
        assert_eq!(split_vat_suffix(""), ("", None));
        assert_eq!(split_vat_suffix("ab"), ("ab", None));
        assert_eq!(
            split_vat_suffix("(E)"),
            ("", Some(VatMarker::Known(VatCategory::E)))
        );
    }
}
