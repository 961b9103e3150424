use std::collections::BTreeMap;

use crate::system::RuneSystem;

/// Longest Latin key a table may hold, in characters.
pub const MAX_KEY_CHARS: usize = 2;

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no alphabet tables defined")]
    Empty,
    #[error("unknown rune system section: [{0}]")]
    UnknownSystem(String),
    #[error("[{0}] table is empty")]
    EmptyTable(&'static str),
    #[error("[{0}] table is required")]
    MissingTable(&'static str),
    #[error("empty key in [{0}]")]
    EmptyKey(&'static str),
    #[error("key {key:?} in [{system}] is longer than {} characters", MAX_KEY_CHARS)]
    KeyTooLong { system: &'static str, key: String },
    #[error("empty value for key {key:?} in [{system}]")]
    EmptyValue { system: &'static str, key: String },
    #[error("phonetic entry {index}: glyph {glyph:?} must be exactly one non-space character")]
    BadGlyph { index: usize, glyph: String },
    #[error("empty latin value for glyph {0:?}")]
    EmptyLatin(char),
}

/// One system's `(latin, runes)` pairs in file order.
pub type AlphabetEntries = Vec<(String, String)>;

/// Parse alphabet TOML into per-system `latin -> runes` pairs.
///
/// Each top-level table must be named after a [`RuneSystem`] identifier.
/// A file may cover any non-empty subset of the systems. Keys keep the
/// order they are written in.
pub fn parse_alphabet_toml(
    toml_str: &str,
) -> Result<BTreeMap<RuneSystem, AlphabetEntries>, TableConfigError> {
    let raw: toml::Table =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    if raw.is_empty() {
        return Err(TableConfigError::Empty);
    }

    let mut tables = BTreeMap::new();
    for (section, value) in raw {
        let system = RuneSystem::from_id(&section)
            .ok_or_else(|| TableConfigError::UnknownSystem(section.clone()))?;
        let id = system.id();
        let toml::Value::Table(mappings) = value else {
            return Err(TableConfigError::Parse(format!("[{id}] must be a table")));
        };
        if mappings.is_empty() {
            return Err(TableConfigError::EmptyTable(id));
        }
        let mut entries = Vec::with_capacity(mappings.len());
        for (key, value) in mappings {
            let len = key.chars().count();
            if len == 0 {
                return Err(TableConfigError::EmptyKey(id));
            }
            if len > MAX_KEY_CHARS {
                return Err(TableConfigError::KeyTooLong { system: id, key });
            }
            let toml::Value::String(runes) = value else {
                return Err(TableConfigError::Parse(format!(
                    "value for key {key:?} in [{id}] must be a string"
                )));
            };
            if runes.is_empty() {
                return Err(TableConfigError::EmptyValue { system: id, key });
            }
            entries.push((key, runes));
        }
        tables.insert(system, entries);
    }

    Ok(tables)
}
