use serde::Deserialize;

use crate::alphabet::TableConfigError;

use super::PhoneticEntry;

#[derive(Deserialize)]
struct PhoneticConfig {
    #[serde(default)]
    rune: Vec<RawEntry>,
}

#[derive(Deserialize)]
struct RawEntry {
    glyph: String,
    latin: String,
    #[serde(default)]
    ipa: String,
    #[serde(default)]
    note: String,
}

/// Parse phonetic TOML (`[[rune]]` entries) in file order.
///
/// Duplicate glyphs are kept here; the table keeps the first one.
pub fn parse_phonetic_toml(toml_str: &str) -> Result<Vec<PhoneticEntry>, TableConfigError> {
    let config: PhoneticConfig =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    if config.rune.is_empty() {
        return Err(TableConfigError::Empty);
    }

    config
        .rune
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let mut chars = raw.glyph.chars();
            let glyph = match (chars.next(), chars.next()) {
                (Some(c), None) if !c.is_whitespace() => c,
                _ => {
                    return Err(TableConfigError::BadGlyph {
                        index,
                        glyph: raw.glyph,
                    })
                }
            };
            if raw.latin.is_empty() {
                return Err(TableConfigError::EmptyLatin(glyph));
            }
            Ok(PhoneticEntry {
                glyph,
                latin: raw.latin,
                ipa: raw.ipa,
                note: raw.note,
            })
        })
        .collect()
}
