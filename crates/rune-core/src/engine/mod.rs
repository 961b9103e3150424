//! Latin → rune conversion and rune → Latin transliteration.
//!
//! An [`Engine`] owns the alphabet registry, the phonetic table and the
//! settings. It is built once, never mutated, and can be shared by reference
//! across threads.

mod convert;


use std::collections::BTreeMap;

use tracing::{debug_span, warn};

use crate::alphabet::{AlphabetRegistry, RuneError, TableConfigError};
use crate::normalize::normalize;
use crate::phonetic::{self, PhoneticTable, Transliteration};
use crate::settings::Settings;
use crate::system::RuneSystem;

#[derive(Debug, Clone)]
pub struct Engine {
    registry: AlphabetRegistry,
    phonetics: PhoneticTable,
    settings: Settings,
}

impl Engine {
    /// Engine over the embedded default tables and settings.
    pub fn new() -> Self {
        let registry = AlphabetRegistry::new();
        let elder = registry
            .table(RuneSystem::ElderFuthark)
            .expect("default alphabets include Elder Futhark");
        let phonetics = PhoneticTable::from_toml(phonetic::DEFAULT_PHONETICS_TOML, elder)
            .expect("default phonetic TOML must be valid");
        Self {
            registry,
            phonetics,
            settings: Settings::default(),
        }
    }

    pub fn with_parts(
        registry: AlphabetRegistry,
        phonetics: PhoneticTable,
        settings: Settings,
    ) -> Self {
        Self {
            registry,
            phonetics,
            settings,
        }
    }

    /// Engine over a custom alphabet registry, with the default phonetic
    /// table and settings.
    ///
    /// The phonetic table is derived from the registry's Elder Futhark
    /// table, so the registry must contain one.
    pub fn with_registry(registry: AlphabetRegistry) -> Result<Self, TableConfigError> {
        let elder = registry
            .table(RuneSystem::ElderFuthark)
            .map_err(|_| TableConfigError::MissingTable(RuneSystem::ElderFuthark.id()))?;
        let phonetics = PhoneticTable::from_toml(phonetic::DEFAULT_PHONETICS_TOML, elder)?;
        Ok(Self::with_parts(registry, phonetics, Settings::default()))
    }

    /// Replace the settings, keeping tables.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn registry(&self) -> &AlphabetRegistry {
        &self.registry
    }

    pub fn phonetics(&self) -> &PhoneticTable {
        &self.phonetics
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Convert `text` to runes in `system`.
    ///
    /// Fails only when the registry has no table for `system`.
    pub fn convert(&self, text: &str, system: RuneSystem) -> Result<String, RuneError> {
        let _span = debug_span!("convert", system = system.id(), len = text.len()).entered();
        let table = self.registry.table(system)?;
        let normalized = normalize(text, system);
        Ok(convert::tokenize(&normalized, table, &self.settings))
    }

    /// Convert using a system identifier or label.
    pub fn convert_named(&self, text: &str, system: &str) -> Result<String, RuneError> {
        self.convert(text, system.parse()?)
    }

    /// Convert `text` in every system. A failing system gets
    /// `"Error: <message>"` instead of aborting the batch.
    pub fn convert_all(&self, text: &str) -> BTreeMap<RuneSystem, String> {
        RuneSystem::ALL
            .into_iter()
            .map(|system| {
                let out = self.convert(text, system).unwrap_or_else(|e| {
                    warn!(system = system.id(), error = %e, "conversion failed");
                    format!("Error: {e}")
                });
                (system, out)
            })
            .collect()
    }

    /// Rich reverse transliteration with IPA and pronunciation notes.
    pub fn transliterate(&self, runic: &str) -> Transliteration {
        phonetic::transliterate(&self.phonetics, &self.settings, runic)
    }

    /// Plain reverse transliteration: one Latin letter per Elder Futhark glyph.
    pub fn transliterate_plain(&self, runic: &str) -> String {
        phonetic::transliterate_plain(&self.phonetics, &self.settings, runic)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
