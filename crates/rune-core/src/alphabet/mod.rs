//! Per-system Latin → rune tables.
//!
//! Tables are embedded as TOML, parsed once when the registry is built and
//! read-only afterwards. Keys are one or two characters; lookups try the
//! two-character key first.

mod config;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::system::RuneSystem;

pub use config::{parse_alphabet_toml, AlphabetEntries, TableConfigError, MAX_KEY_CHARS};

pub(crate) const DEFAULT_ALPHABETS_TOML: &str = include_str!("default_alphabets.toml");

/// Returns the embedded default alphabet TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_ALPHABETS_TOML
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuneError {
    #[error("Unknown runic system: {0}")]
    UnknownSystem(String),
    #[error("no alphabet table loaded for {0}")]
    MissingTable(RuneSystem),
}

/// One system's `latin -> runes` mapping, in the order it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetTable {
    system: RuneSystem,
    entries: AlphabetEntries,
    index: BTreeMap<String, usize>,
}

impl AlphabetTable {
    /// A key listed twice keeps its first value.
    pub fn new(system: RuneSystem, entries: AlphabetEntries) -> Self {
        let mut index = BTreeMap::new();
        for (i, (key, _)) in entries.iter().enumerate() {
            index.entry(key.clone()).or_insert(i);
        }
        Self {
            system,
            entries,
            index,
        }
    }

    pub fn system(&self) -> RuneSystem {
        self.system
    }

    pub fn get(&self, latin: &str) -> Option<&str> {
        self.index.get(latin).map(|&i| self.entries[i].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they were written.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// All loaded tables, keyed by system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetRegistry {
    tables: BTreeMap<RuneSystem, AlphabetTable>,
}

impl AlphabetRegistry {
    /// Build the registry from the embedded defaults. Covers all six systems.
    pub fn new() -> Self {
        Self::from_toml(DEFAULT_ALPHABETS_TOML).expect("default alphabet TOML must be valid")
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, TableConfigError> {
        let tables = parse_alphabet_toml(toml_str)?
            .into_iter()
            .map(|(system, entries)| (system, AlphabetTable::new(system, entries)))
            .collect::<BTreeMap<_, _>>();
        debug!(systems = tables.len(), "alphabet registry built");
        Ok(Self { tables })
    }

    /// Load alphabet tables from a TOML file.
    pub fn open(path: &Path) -> Result<Self, TableConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn table(&self, system: RuneSystem) -> Result<&AlphabetTable, RuneError> {
        self.tables
            .get(&system)
            .ok_or(RuneError::MissingTable(system))
    }

    /// Look up a table by identifier or label.
    pub fn table_named(&self, name: &str) -> Result<&AlphabetTable, RuneError> {
        self.table(name.parse()?)
    }

    /// Systems with a loaded table, in declaration order.
    pub fn systems(&self) -> impl Iterator<Item = RuneSystem> + '_ {
        self.tables.keys().copied()
    }
}

impl Default for AlphabetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_covers_all_systems() {
        let reg = AlphabetRegistry::new();
        assert_eq!(reg.systems().collect::<Vec<_>>(), RuneSystem::ALL.to_vec());
    }

    #[test]
    fn construction_is_deterministic() {
        assert_eq!(AlphabetRegistry::new(), AlphabetRegistry::new());
    }

    #[test]
    fn keys_are_short_and_values_non_empty() {
        let reg = AlphabetRegistry::new();
        for system in RuneSystem::ALL {
            let table = reg.table(system).unwrap();
            assert!(!table.is_empty());
            for (k, v) in table.iter() {
                let n = k.chars().count();
                assert!((1..=MAX_KEY_CHARS).contains(&n), "{}: {k:?}", system.id());
                assert!(!v.is_empty());
            }
        }
    }

    #[test]
    fn every_table_keeps_space() {
        let reg = AlphabetRegistry::new();
        for system in RuneSystem::ALL {
            assert_eq!(reg.table(system).unwrap().get(" "), Some(" "));
        }
    }

    #[test]
    fn digraphs_present() {
        let reg = AlphabetRegistry::new();
        let ef = reg.table(RuneSystem::ElderFuthark).unwrap();
        assert_eq!(ef.get("th"), Some("ᚦ"));
        assert_eq!(ef.get("ng"), Some("ᛜ"));
        assert_eq!(ef.get("q"), Some("ᚲᚹ"));
        let asx = reg.table(RuneSystem::AngloSaxon).unwrap();
        assert_eq!(asx.get("eo"), Some("ᛇ"));
        assert_eq!(asx.get("ea"), Some("ᛠ"));
        assert_eq!(asx.get("ia"), Some("ᛡ"));
    }

    #[test]
    fn iter_follows_file_order() {
        let reg = AlphabetRegistry::new();
        let ef = reg.table(RuneSystem::ElderFuthark).unwrap();
        let keys: Vec<&str> = ef.iter().map(|(k, _)| k).take(4).collect();
        assert_eq!(keys, ["f", "u", "th", "þ"]);
    }

    #[test]
    fn duplicate_key_keeps_first_value() {
        let table = AlphabetTable::new(
            RuneSystem::Medieval,
            vec![("a".into(), "ᛆ".into()), ("a".into(), "ᛅ".into())],
        );
        assert_eq!(table.get("a"), Some("ᛆ"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn younger_futhark_merges_sounds() {
        let reg = AlphabetRegistry::new();
        let yf = reg.table(RuneSystem::YoungerFuthark).unwrap();
        assert_eq!(yf.get("u"), Some("ᚢ"));
        assert_eq!(yf.get("v"), Some("ᚢ"));
        assert_eq!(yf.get("w"), Some("ᚢ"));
    }

    #[test]
    fn partial_registry_reports_missing_table() {
        let reg = AlphabetRegistry::from_toml("[medieval]\na = \"ᛆ\"\n").unwrap();
        assert!(reg.table(RuneSystem::Medieval).is_ok());
        assert_eq!(
            reg.table(RuneSystem::Staveless).unwrap_err(),
            RuneError::MissingTable(RuneSystem::Staveless)
        );
    }

    #[test]
    fn table_named_unknown() {
        let reg = AlphabetRegistry::new();
        let err = reg.table_named("cirth").unwrap_err();
        assert_eq!(err, RuneError::UnknownSystem("cirth".into()));
        assert_eq!(err.to_string(), "Unknown runic system: cirth");
    }

    #[test]
    fn open_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[short_twig]\nt = \"ᛐ\"").unwrap();
        let reg = AlphabetRegistry::open(file.path()).unwrap();
        assert_eq!(reg.table(RuneSystem::ShortTwig).unwrap().get("t"), Some("ᛐ"));
    }

    #[test]
    fn open_missing_file() {
        let err = AlphabetRegistry::open(Path::new("/nonexistent/alphabets.toml")).unwrap_err();
        assert!(matches!(err, TableConfigError::Io(_)));
    }
}
