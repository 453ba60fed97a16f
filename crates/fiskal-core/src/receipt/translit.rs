//! Serbian Cyrillic to Latin transliteration.

/// Latin spelling of a Serbian Cyrillic letter, or `None` for any other char.
fn latin_for(c: char) -> Option<&'static str> {
    let latin = match c {
        'А' => "A",
        'Б' => "B",
        'В' => "V",
        'Г' => "G",
        'Д' => "D",
        'Ђ' => "Đ",
        'Е' => "E",
        'Ж' => "Ž",
        'З' => "Z",
        'И' => "I",
        'Ј' => "J",
        'К' => "K",
        'Л' => "L",
        'Љ' => "Lj",
        'М' => "M",
        'Н' => "N",
        'Њ' => "Nj",
        'О' => "O",
        'П' => "P",
        'Р' => "R",
        'С' => "S",
        'Т' => "T",
        'Ћ' => "Ć",
        'У' => "U",
        'Ф' => "F",
        'Х' => "H",
        'Ц' => "C",
        'Ч' => "Č",
        'Џ' => "Dž",
        'Ш' => "Š",
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'ђ' => "đ",
        'е' => "e",
        'ж' => "ž",
        'з' => "z",
        'и' => "i",
        'ј' => "j",
        'к' => "k",
        'л' => "l",
        'љ' => "lj",
        'м' => "m",
        'н' => "n",
        'њ' => "nj",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'ћ' => "ć",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "c",
        'ч' => "č",
        'џ' => "dž",
        'ш' => "š",
        _ => return None,
    };
    Some(latin)
}

/// Transliterate Serbian Cyrillic text to Latin script.
///
/// Characters outside the Serbian alphabet pass through unchanged, so
/// already-Latin and mixed-script text is safe to feed in.
pub fn cyrillic_to_latin(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match latin_for(c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transliterate_words() {
        assert_eq!(cyrillic_to_latin("Београд"), "Beograd");
        assert_eq!(cyrillic_to_latin("Кнеза Михаила"), "Kneza Mihaila");
        assert_eq!(cyrillic_to_latin("Љубљана њива џеп"), "Ljubljana njiva džep");
        assert_eq!(cyrillic_to_latin("ћевапчићи"), "ćevapčići");
    }

    #[test]
    fn test_vat_markers() {
        assert_eq!(cyrillic_to_latin("(Ђ)"), "(Đ)");
        assert_eq!(cyrillic_to_latin("(Е)"), "(E)");
        assert_eq!(cyrillic_to_latin("(г)"), "(g)");
    }

    #[test]
    fn test_latin_passthrough() {
        assert_eq!(
            cyrillic_to_latin("Kratak naziv artikla 2 (G)"),
            "Kratak naziv artikla 2 (G)"
        );
        assert_eq!(cyrillic_to_latin("4.000,00"), "4.000,00");
    }
}
