//! Rune → Latin/IPA lookup used for reverse transliteration.
//!
//! The table is built from hand-authored entries and filled in from the
//! Elder Futhark alphabet for any glyph the entries do not cover. A glyph
//! appearing more than once keeps its first entry.

mod config;
mod transliterate;

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::alphabet::{AlphabetTable, TableConfigError};

pub use config::parse_phonetic_toml;
pub use transliterate::{transliterate, transliterate_plain, Transliteration};

pub(crate) const DEFAULT_PHONETICS_TOML: &str = include_str!("default_phonetics.toml");

/// Returns the embedded default phonetic TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_PHONETICS_TOML
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneticEntry {
    pub glyph: char,
    /// Latin approximation, e.g. `u/v/w`.
    pub latin: String,
    /// IPA-like rendering; may be empty.
    pub ipa: String,
    /// Pronunciation hint; may be empty.
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneticTable {
    entries: BTreeMap<char, PhoneticEntry>,
    /// Single-letter fallback: the first Elder Futhark one-character key
    /// written for each glyph.
    plain: BTreeMap<char, char>,
}

impl PhoneticTable {
    /// Build from entries in priority order plus the Elder Futhark table.
    pub fn build(entries: Vec<PhoneticEntry>, elder: &AlphabetTable) -> Self {
        let mut map = BTreeMap::new();
        for entry in entries {
            if let Entry::Vacant(slot) = map.entry(entry.glyph) {
                slot.insert(entry);
            }
        }
        let authored = map.len();

        for (glyph, keys) in reverse_single_glyphs(elder) {
            map.entry(glyph).or_insert_with(|| PhoneticEntry {
                glyph,
                latin: keys.join("/"),
                ipa: String::new(),
                note: String::new(),
            });
        }
        debug!(authored, derived = map.len() - authored, "phonetic table built");

        Self {
            entries: map,
            plain: plain_map(elder),
        }
    }

    /// Build from phonetic TOML and the Elder Futhark table.
    pub fn from_toml(toml_str: &str, elder: &AlphabetTable) -> Result<Self, TableConfigError> {
        Ok(Self::build(parse_phonetic_toml(toml_str)?, elder))
    }

    pub fn get(&self, glyph: char) -> Option<&PhoneticEntry> {
        self.entries.get(&glyph)
    }

    pub(crate) fn plain_latin(&self, glyph: char) -> Option<char> {
        self.plain.get(&glyph).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in glyph code point order.
    pub fn iter(&self) -> impl Iterator<Item = &PhoneticEntry> {
        self.entries.values()
    }
}

/// Glyph → every key that maps to exactly that one glyph, in table order.
/// Whitespace glyphs are skipped.
fn reverse_single_glyphs(table: &AlphabetTable) -> BTreeMap<char, Vec<&str>> {
    let mut reverse: BTreeMap<char, Vec<&str>> = BTreeMap::new();
    for (key, value) in table.iter() {
        if let Some(glyph) = single_char(value) {
            if !glyph.is_whitespace() {
                reverse.entry(glyph).or_default().push(key);
            }
        }
    }
    reverse
}

/// Glyph → first one-character key mapping to it, in table order.
fn plain_map(table: &AlphabetTable) -> BTreeMap<char, char> {
    let mut plain = BTreeMap::new();
    for (key, value) in table.iter() {
        if let (Some(latin), Some(glyph)) = (single_char(key), single_char(value)) {
            if !latin.is_whitespace() {
                plain.entry(glyph).or_insert(latin);
            }
        }
    }
    plain
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
