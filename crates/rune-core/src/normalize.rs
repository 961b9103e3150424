//! Spelling normalization applied before table lookup.
//!
//! Rules are literal substring replacements applied one after another over
//! the whole string. Each rule runs a single left-to-right pass, so an
//! earlier rule can create or destroy matches for a later one.

use tracing::debug_span;

use crate::system::RuneSystem;

/// A literal `from -> to` replacement.
pub type Rule = (&'static str, &'static str);

/// Applied to every system.
pub const COMMON_RULES: &[Rule] = &[("qu", "kw"), ("x", "ks")];

/// Historical sound changes for Elder and Younger Futhark.
pub const SOUND_CHANGE_RULES: &[Rule] = &[
    ("ph", "f"),
    ("ch", "k"),
    ("ck", "k"),
    ("ee", "e"),
    ("oo", "o"),
    ("ll", "l"),
    ("tt", "t"),
    ("ss", "s"),
    ("mm", "m"),
    ("nn", "n"),
];

/// Anglo-Saxon digraph spellings.
pub const ANGLO_SAXON_RULES: &[Rule] = &[("sh", "sc"), ("ch", "c")];

/// The ordered rule list for `system`.
///
/// Anglo-Saxon does not get the sound-change block; the two
/// system-specific blocks never combine.
pub fn rules_for(system: RuneSystem) -> Vec<Rule> {
    let mut rules = COMMON_RULES.to_vec();
    if system.has_sound_changes() {
        rules.extend_from_slice(SOUND_CHANGE_RULES);
    }
    if system == RuneSystem::AngloSaxon {
        rules.extend_from_slice(ANGLO_SAXON_RULES);
    }
    rules
}

/// Lowercase `text` and apply the rule list for `system`.
///
/// Diacritic letters (þ, ð, æ, ø, å, œ) are lowercased but never folded.
pub fn normalize(text: &str, system: RuneSystem) -> String {
    let _span = debug_span!("normalize", system = system.id(), len = text.len()).entered();

    let mut out = text.to_lowercase();
    for (from, to) in rules_for(system) {
        // one non-overlapping left-to-right pass
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_keeps_diacritics() {
        assert_eq!(normalize("ÞÓRR ÆSIR", RuneSystem::Medieval), "þórr æsir");
        assert_eq!(normalize("Œ Ø Å Ð", RuneSystem::Staveless), "œ ø å ð");
    }

    #[test]
    fn common_rules_everywhere() {
        for system in RuneSystem::ALL {
            assert_eq!(normalize("Quiz", system), "kwiz");
            assert_eq!(normalize("box", system), "boks");
        }
    }

    #[test]
    fn sound_changes_only_for_futharks() {
        assert_eq!(normalize("philosophy", RuneSystem::ElderFuthark), "filosofy");
        assert_eq!(normalize("back", RuneSystem::YoungerFuthark), "bak");
        assert_eq!(normalize("moon", RuneSystem::ElderFuthark), "mon");
        assert_eq!(normalize("moon", RuneSystem::ShortTwig), "moon");
        assert_eq!(normalize("moon", RuneSystem::Medieval), "moon");
    }

    #[test]
    fn anglo_saxon_rules_are_exclusive() {
        assert_eq!(normalize("ship", RuneSystem::AngloSaxon), "scip");
        assert_eq!(normalize("church", RuneSystem::AngloSaxon), "curc");
        // no doubled-letter reduction for Anglo-Saxon
        assert_eq!(normalize("bell", RuneSystem::AngloSaxon), "bell");
        assert_eq!(normalize("ship", RuneSystem::ElderFuthark), "ship");
    }

    #[test]
    fn rule_order_feeds_forward() {
        // x -> ks, then ss -> s collapses the produced "ks" + "s" pair
        assert_eq!(normalize("exs", RuneSystem::ElderFuthark), "eks");
        // ch -> k runs before ck -> k, so "chk" becomes "kk", which stays
        assert_eq!(normalize("chk", RuneSystem::ElderFuthark), "kk");
        // ch -> k leaves "kck", then ck -> k
        assert_eq!(normalize("chck", RuneSystem::ElderFuthark), "kk");
    }

    #[test]
    fn single_pass_per_rule() {
        // "eee": one pass leaves "ee" -> "e" + "e"
        assert_eq!(normalize("eee", RuneSystem::ElderFuthark), "ee");
        assert_eq!(normalize("nnnn", RuneSystem::YoungerFuthark), "nn");
    }

    #[test]
    fn rules_for_lists() {
        assert_eq!(rules_for(RuneSystem::Staveless), COMMON_RULES.to_vec());
        assert_eq!(rules_for(RuneSystem::ElderFuthark).len(), 12);
        assert_eq!(rules_for(RuneSystem::AngloSaxon).len(), 4);
        assert_eq!(rules_for(RuneSystem::YoungerFuthark)[2], ("ph", "f"));
    }

    #[test]
    fn empty() {
        for system in RuneSystem::ALL {
            assert_eq!(normalize("", system), "");
        }
    }
}
