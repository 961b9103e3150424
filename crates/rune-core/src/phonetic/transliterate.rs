use std::collections::HashSet;

use serde::Serialize;
use tracing::debug_span;

use crate::settings::Settings;
use crate::unicode::{is_decimal_digit, push_unmapped};

use super::PhoneticTable;

/// Approximate reading of a runic string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transliteration {
    pub latin: String,
    pub ipa: String,
    /// One `"<glyph> = <note>"` line per distinct glyph, or the configured
    /// empty-guide text.
    pub pronunciation_guide: String,
    pub note: String,
}

/// Map each glyph to its Latin approximation, IPA and pronunciation note.
pub fn transliterate(table: &PhoneticTable, settings: &Settings, runic: &str) -> Transliteration {
    let _span = debug_span!("transliterate", len = runic.len()).entered();

    let mut latin = String::with_capacity(runic.len());
    let mut ipa = String::with_capacity(runic.len());
    let mut notes: Vec<String> = Vec::new();
    let mut seen: HashSet<char> = HashSet::new();

    for c in runic.chars() {
        if let Some(entry) = table.get(c) {
            latin.push_str(&entry.latin);
            ipa.push_str(&entry.ipa);
            if !entry.note.is_empty() && seen.insert(c) {
                notes.push(format!("{c} = {}", entry.note));
            }
        } else if c == ' ' || is_decimal_digit(c) || settings.is_passthrough_symbol(c) {
            latin.push(c);
            ipa.push(c);
        } else {
            push_unmapped(&mut latin, c);
            push_unmapped(&mut ipa, c);
        }
    }

    let pronunciation_guide = if notes.is_empty() {
        settings.transliteration.empty_guide.clone()
    } else {
        notes.join("\n")
    };

    Transliteration {
        latin,
        ipa,
        pronunciation_guide,
        note: settings.transliteration.disclaimer.clone(),
    }
}

/// One Latin letter per Elder Futhark glyph, no annotations.
pub fn transliterate_plain(table: &PhoneticTable, settings: &Settings, runic: &str) -> String {
    let mut out = String::with_capacity(runic.len());
    for c in runic.chars() {
        if let Some(latin) = table.plain_latin(c) {
            out.push(latin);
        } else if c == ' ' || is_decimal_digit(c) || settings.is_passthrough_symbol(c) {
            out.push(c);
        } else {
            push_unmapped(&mut out, c);
        }
    }
    out
}
