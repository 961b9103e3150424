//! Character-level classification shared by conversion and transliteration.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Check the Runic block (U+16A0..U+16FF). Staveless forms borrow glyphs
/// from other blocks and are not covered.
pub fn is_runic(c: char) -> bool {
    ('\u{16A0}'..='\u{16FF}').contains(&c)
}

/// Digits copied through unchanged: any Unicode decimal digit (`Nd`).
pub fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Append the untranslatable marker `[c]`.
pub fn push_unmapped(out: &mut String, c: char) {
    out.push('[');
    out.push(c);
    out.push(']');
}

/// Count runic-block characters in `s`.
pub fn count_runic(s: &str) -> usize {
    s.chars().filter(|&c| is_runic(c)).count()
}
