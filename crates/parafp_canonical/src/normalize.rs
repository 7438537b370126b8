use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::fold::fold_diacritic;

/// Bold-span wrappers injected by the rewriting stage. They carry styling
/// intent only and must never influence paragraph identity.
const BOLD_START: &str = "<<BOLD_START>>";
const BOLD_END: &str = "<<BOLD_END>>";

/// Normalize raw paragraph text into its canonical comparison form.
///
/// The result contains only lowercase ASCII letters, digits, and single
/// spaces, with no leading or trailing whitespace. The function is total
/// and idempotent: feeding canonical output back in returns it unchanged.
///
/// Transform order matters:
/// 1. compose combining accents (NFC) so decomposed input folds the same,
/// 2. strip bold-span wrappers and `<?ACE …?>` layout instructions,
/// 3. neutralize control characters and soft hyphens to whitespace,
///    drop zero-width and anchored-object placeholders outright,
/// 4. lowercase, fold the fixed diacritic table to ASCII,
/// 5. turn everything else non-alphanumeric into a space and collapse runs.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let composed: Cow<'_, str> = if raw.is_ascii() {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(raw.nfc().collect())
    };
    let stripped = strip_markers(composed.as_ref());

    let mut canonical = String::with_capacity(stripped.len());
    let mut pending_space = false;
    for ch in stripped.chars() {
        match ch {
            // Anchored-object and zero-width placeholders vanish without
            // separating the surrounding words.
            '\u{FFFC}' | '\u{FEFF}' => {}
            // Soft hyphens mark layout-chosen break points; treating them
            // as whitespace keeps hyphenated and unhyphenated renderings
            // of the same paragraph identical.
            '\u{00AD}' => pending_space = true,
            c if c.is_control() || c.is_whitespace() => pending_space = true,
            c => {
                for lower in c.to_lowercase() {
                    if let Some(folded) = fold_diacritic(lower) {
                        push_word(&mut canonical, &mut pending_space, folded);
                    } else if lower.is_ascii_lowercase() || lower.is_ascii_digit() {
                        let mut buf = [0u8; 4];
                        push_word(&mut canonical, &mut pending_space, lower.encode_utf8(&mut buf));
                    } else {
                        pending_space = true;
                    }
                }
            }
        }
    }
    canonical
}

fn push_word(canonical: &mut String, pending_space: &mut bool, text: &str) {
    if *pending_space && !canonical.is_empty() {
        canonical.push(' ');
    }
    *pending_space = false;
    canonical.push_str(text);
}

/// Remove the fixed family of inline markers. Anything that is not a
/// complete marker passes through untouched.
fn strip_markers(text: &str) -> Cow<'_, str> {
    if !text.contains('<') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix(BOLD_START) {
            rest = after;
        } else if let Some(after) = tail.strip_prefix(BOLD_END) {
            rest = after;
        } else if is_ace_instruction(tail) {
            match tail.find("?>") {
                Some(end) => rest = &tail[end + 2..],
                None => {
                    // Unterminated instruction: literal text.
                    out.push('<');
                    rest = &tail[1..];
                }
            }
        } else {
            out.push('<');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Layout engines emit page-number and variable placeholders as `<?ACE n?>`
/// processing instructions; the tag is matched case-insensitively.
fn is_ace_instruction(tail: &str) -> bool {
    tail.strip_prefix("<?")
        .and_then(|body| body.get(..3))
        .is_some_and(|tag| tag.eq_ignore_ascii_case("ace"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_markers_leaves_plain_text_borrowed() {
        assert!(matches!(strip_markers("geen markers"), Cow::Borrowed(_)));
    }

    #[test]
    fn strip_markers_removes_only_complete_markers() {
        assert_eq!(strip_markers("a <<BOLD_START>>b<<BOLD_END>> c"), "a b c");
        assert_eq!(strip_markers("x<?ACE 7?>y"), "xy");
        assert_eq!(strip_markers("x<?ace?>y"), "xy");
        assert_eq!(strip_markers("2 < 3 en 4 > 3"), "2 < 3 en 4 > 3");
        assert_eq!(strip_markers("<<BOLD"), "<<BOLD");
    }

    #[test]
    fn normalize_handles_adjacent_markers_and_noise() {
        assert_eq!(
            normalize("<?ACE 7?><<BOLD_START>>Osmose<<BOLD_END>>\u{FEFF} en diffusie"),
            "osmose en diffusie"
        );
    }
}
