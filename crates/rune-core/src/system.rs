//! The closed set of runic writing systems.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alphabet::RuneError;

/// A historical runic alphabet. Declaration order is the order used for
/// listings and for [`Engine::convert_all`](crate::Engine::convert_all).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuneSystem {
    ElderFuthark,
    YoungerFuthark,
    ShortTwig,
    AngloSaxon,
    Medieval,
    Staveless,
}

impl RuneSystem {
    pub const ALL: [RuneSystem; 6] = [
        RuneSystem::ElderFuthark,
        RuneSystem::YoungerFuthark,
        RuneSystem::ShortTwig,
        RuneSystem::AngloSaxon,
        RuneSystem::Medieval,
        RuneSystem::Staveless,
    ];

    /// Stable identifier, also the section name in alphabet TOML files.
    pub fn id(self) -> &'static str {
        match self {
            RuneSystem::ElderFuthark => "elder_futhark",
            RuneSystem::YoungerFuthark => "younger_futhark",
            RuneSystem::ShortTwig => "short_twig",
            RuneSystem::AngloSaxon => "anglo_saxon",
            RuneSystem::Medieval => "medieval",
            RuneSystem::Staveless => "staveless",
        }
    }

    /// Inverse of [`id`](Self::id). Exact match only.
    pub fn from_id(id: &str) -> Option<RuneSystem> {
        RuneSystem::ALL.into_iter().find(|sys| sys.id() == id)
    }

    /// Human-readable label with era, region and rune count.
    pub fn label(self) -> &'static str {
        match self {
            RuneSystem::ElderFuthark => "Elder Futhark (24 runes, 2nd-8th century)",
            RuneSystem::YoungerFuthark => "Younger Futhark (16 runes, 9th-11th century)",
            RuneSystem::ShortTwig => "Short-Twig/Rök (Swedish-Norwegian variant)",
            RuneSystem::AngloSaxon => "Anglo-Saxon Futhorc (28-33 runes, 5th-11th century)",
            RuneSystem::Medieval => "Medieval/Latinized Futhark (post-1100)",
            RuneSystem::Staveless => "Staveless/Hälsinge (simplified forms)",
        }
    }

    /// Systems that receive the historical sound-change normalization block.
    pub(crate) fn has_sound_changes(self) -> bool {
        matches!(self, RuneSystem::ElderFuthark | RuneSystem::YoungerFuthark)
    }
}

impl fmt::Display for RuneSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RuneSystem {
    type Err = RuneError;

    /// Accepts either the identifier (`elder_futhark`, case-insensitive) or
    /// the exact label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        RuneSystem::ALL
            .into_iter()
            .find(|sys| sys.id().eq_ignore_ascii_case(s) || sys.label() == s)
            .ok_or_else(|| RuneError::UnknownSystem(s.to_string()))
    }
}

/// Ordered `(system, label)` pairs for every known system.
pub fn list_systems() -> Vec<(RuneSystem, &'static str)> {
    RuneSystem::ALL.iter().map(|&s| (s, s.label())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_is_in_declaration_order() {
        let systems = list_systems();
        assert_eq!(systems.len(), 6);
        assert_eq!(systems[0].0, RuneSystem::ElderFuthark);
        assert_eq!(systems[5].0, RuneSystem::Staveless);
        assert_eq!(systems[3].1, "Anglo-Saxon Futhorc (28-33 runes, 5th-11th century)");
    }

    #[test]
    fn parse_id_and_label() {
        assert_eq!("short_twig".parse::<RuneSystem>().unwrap(), RuneSystem::ShortTwig);
        assert_eq!(" Medieval ".parse::<RuneSystem>().unwrap(), RuneSystem::Medieval);
        assert_eq!(
            "Staveless/Hälsinge (simplified forms)"
                .parse::<RuneSystem>()
                .unwrap(),
            RuneSystem::Staveless
        );
    }

    #[test]
    fn from_id_is_exact() {
        assert_eq!(RuneSystem::from_id("anglo_saxon"), Some(RuneSystem::AngloSaxon));
        assert_eq!(RuneSystem::from_id("Anglo_Saxon"), None);
        for sys in RuneSystem::ALL {
            assert_eq!(RuneSystem::from_id(sys.id()), Some(sys));
        }
    }

    #[test]
    fn parse_unknown() {
        let err = "ogham".parse::<RuneSystem>().unwrap_err();
        assert!(matches!(err, RuneError::UnknownSystem(ref s) if s == "ogham"));
        assert!(err.to_string().contains("ogham"));
    }

    #[test]
    fn ids_and_labels_unique() {
        for (i, a) in RuneSystem::ALL.iter().enumerate() {
            for b in &RuneSystem::ALL[i + 1..] {
                assert_ne!(a.id(), b.id());
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn display_is_label() {
        assert_eq!(
            RuneSystem::YoungerFuthark.to_string(),
            "Younger Futhark (16 runes, 9th-11th century)"
        );
    }
}
