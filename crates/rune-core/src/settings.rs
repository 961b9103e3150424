//! Engine settings loaded from TOML.
//!
//! - `Settings::default()` parses the embedded `default_settings.toml`
//! - `parse_settings_toml(content)` validates a custom file
//! - The engine takes settings by value at construction; nothing is global

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub conversion: ConversionSettings,
    pub transliteration: TransliterationSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConversionSettings {
    /// Symbols copied through unchanged when no table entry matches.
    pub passthrough_symbols: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransliterationSettings {
    pub disclaimer: String,
    pub empty_guide: String,
}

impl Settings {
    pub fn is_passthrough_symbol(&self, c: char) -> bool {
        self.conversion.passthrough_symbols.contains(c)
    }
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("settings TOML must be valid")
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.trim().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_empty!(transliteration.disclaimer);
    check_non_empty!(transliteration.empty_guide);

    // Letters, digits and whitespace have their own handling in the converter.
    if let Some(c) = s
        .conversion
        .passthrough_symbols
        .chars()
        .find(|c| c.is_alphanumeric() || c.is_whitespace())
    {
        return Err(SettingsError::InvalidValue {
            field: "conversion.passthrough_symbols".to_string(),
            reason: format!("{c:?} is not a symbol"),
        });
    }

    Ok(())
}
