/// Fold an accented character to its unaccented ASCII base.
///
/// The table is fixed: it covers the Latin-1 accents that occur in the
/// production corpus (Dutch body text with French/German loan words).
/// Characters outside the table are handled by the caller.
pub(crate) fn fold_diacritic(ch: char) -> Option<&'static str> {
    let folded = match ch {
        '\u{E0}' | '\u{E1}' | '\u{E2}' | '\u{E3}' | '\u{E4}' | '\u{E5}' => "a",
        '\u{E6}' => "ae",
        '\u{E7}' => "c",
        '\u{E8}' | '\u{E9}' | '\u{EA}' | '\u{EB}' => "e",
        '\u{EC}' | '\u{ED}' | '\u{EE}' | '\u{EF}' => "i",
        '\u{F1}' => "n",
        '\u{F2}' | '\u{F3}' | '\u{F4}' | '\u{F5}' | '\u{F6}' | '\u{F8}' => "o",
        '\u{153}' => "oe",
        '\u{F9}' | '\u{FA}' | '\u{FB}' | '\u{FC}' => "u",
        '\u{FD}' | '\u{FF}' => "y",
        '\u{DF}' => "ss",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_the_dutch_accent_set() {
        for (ch, want) in [
            ('\u{E9}', "e"),
            ('\u{EB}', "e"),
            ('\u{EF}', "i"),
            ('\u{F6}', "o"),
            ('\u{FC}', "u"),
            ('\u{E7}', "c"),
            ('\u{E6}', "ae"),
            ('\u{153}', "oe"),
            ('\u{DF}', "ss"),
        ] {
            assert_eq!(fold_diacritic(ch), Some(want));
        }
    }

    #[test]
    fn ascii_and_unknown_chars_are_not_folded() {
        assert_eq!(fold_diacritic('e'), None);
        assert_eq!(fold_diacritic('3'), None);
        assert_eq!(fold_diacritic('\u{142}'), None); // ł is outside the table
    }
}
