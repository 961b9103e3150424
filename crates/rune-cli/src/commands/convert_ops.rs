use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use rune_core::settings::parse_settings_toml;
use rune_core::unicode::count_runic;
use rune_core::{list_systems, AlphabetRegistry, Engine, PhoneticEntry, RuneSystem, Transliteration};

use super::input::require_text;

#[derive(Debug, Serialize)]
struct SystemInfo {
    id: &'static str,
    label: &'static str,
}

#[derive(Debug, Serialize)]
struct Conversion {
    system: &'static str,
    label: &'static str,
    runes: String,
}

#[derive(Debug, Serialize)]
struct ConvertReport {
    original_text: String,
    conversions: Vec<Conversion>,
}

#[derive(Debug, Serialize)]
struct TransliterateReport<'a> {
    runic_text: &'a str,
    transliteration: Transliteration,
}

/// Build the engine, optionally over alphabet and settings TOML files.
pub fn open_engine(tables: Option<&str>, settings: Option<&str>) -> Engine {
    let engine = match tables {
        Some(path) => {
            let registry = die!(
                AlphabetRegistry::open(Path::new(path)),
                "Error loading alphabet tables: {}"
            );
            info!(path, systems = registry.systems().count(), "loaded alphabet tables");
            die!(Engine::with_registry(registry), "Error: {}")
        }
        None => Engine::new(),
    };
    match settings {
        Some(path) => {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            let settings = die!(parse_settings_toml(&content), "Error loading settings: {}");
            info!(path, "loaded settings");
            engine.with_settings(settings)
        }
        None => engine,
    }
}

pub fn systems_cmd(json: bool) {
    let systems = list_systems();
    if json {
        let infos: Vec<SystemInfo> = systems
            .iter()
            .map(|&(s, label)| SystemInfo { id: s.id(), label })
            .collect();
        print_json(&infos);
        return;
    }
    let width = systems.iter().map(|(s, _)| s.id().len()).max().unwrap_or(0);
    for (system, label) in systems {
        println!("{:<width$}  {label}", system.id());
    }
}

pub fn convert_cmd(engine: &Engine, text: &str, system: Option<&str>, json: bool) {
    let text = die!(require_text(text, "Text"), "Error: {}");

    let conversions: Vec<Conversion> = match system {
        Some(name) => {
            let system = die!(name.parse::<RuneSystem>(), "Error: {}");
            let runes = die!(engine.convert(text, system), "Conversion error: {}");
            vec![Conversion {
                system: system.id(),
                label: system.label(),
                runes,
            }]
        }
        None => engine
            .convert_all(text)
            .into_iter()
            .map(|(system, runes)| Conversion {
                system: system.id(),
                label: system.label(),
                runes,
            })
            .collect(),
    };

    if json {
        print_json(&ConvertReport {
            original_text: text.to_string(),
            conversions,
        });
        return;
    }
    if let [only] = conversions.as_slice() {
        println!("{}", only.runes);
        return;
    }
    for c in &conversions {
        println!("{}", c.label);
        println!("  {}", c.runes);
    }
}

pub fn transliterate_cmd(engine: &Engine, runic: &str, plain: bool, json: bool) {
    let runic = die!(require_text(runic, "Runic text"), "Error: {}");
    if count_runic(runic) == 0 {
        eprintln!("Note: input contains no characters from the Runic block");
    }

    if plain {
        let latin = engine.transliterate_plain(runic);
        if json {
            print_json(&serde_json::json!({ "runic_text": runic, "latin": latin }));
        } else {
            println!("{latin}");
        }
        return;
    }

    let transliteration = engine.transliterate(runic);
    if json {
        print_json(&TransliterateReport {
            runic_text: runic,
            transliteration,
        });
        return;
    }
    println!("Latin: {}", transliteration.latin);
    println!("IPA:   {}", transliteration.ipa);
    println!();
    println!("{}", transliteration.pronunciation_guide);
    println!();
    println!("{}", transliteration.note);
}

pub fn table_cmd(engine: &Engine, system: &str) {
    let table = die!(engine.registry().table_named(system), "Error: {}");
    println!("{}", table.system().label());
    let width = table.iter().map(|(k, _)| display_key(k).width()).max().unwrap_or(0);
    for (key, runes) in table.iter() {
        let shown = display_key(key);
        let pad = width - shown.width();
        println!("  {shown}{:pad$}  {runes}", "");
    }
}

/// Print every glyph the transliterator knows, with its readings.
pub fn glyphs_cmd(engine: &Engine, json: bool) {
    let entries: Vec<&PhoneticEntry> = engine.phonetics().iter().collect();
    if json {
        print_json(&entries);
        return;
    }
    let width = entries.iter().map(|e| e.latin.width()).max().unwrap_or(0);
    for e in entries {
        let pad = width - e.latin.width();
        let line = format!("{}  {}{:pad$}  {}  {}", e.glyph, e.latin, "", e.ipa, e.note);
        println!("{}", line.trim_end());
    }
}

/// Quote keys that would be invisible in a listing.
fn display_key(key: &str) -> String {
    if key.trim().is_empty() {
        format!("{key:?}")
    } else {
        key.to_string()
    }
}

fn print_json<T: Serialize>(value: &T) {
    let out = die!(serde_json::to_string_pretty(value), "Error encoding JSON: {}");
    println!("{out}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_key_quotes_space() {
        assert_eq!(display_key(" "), "\" \"");
        assert_eq!(display_key("th"), "th");
    }

    #[test]
    fn glyph_listing_serializes_entries() {
        let engine = Engine::new();
        let entries: Vec<&PhoneticEntry> = engine.phonetics().iter().collect();
        assert_eq!(entries.len(), engine.phonetics().len());
        let json = serde_json::to_value(&entries).unwrap();
        let fehu = json
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["glyph"] == "ᚠ")
            .unwrap();
        assert_eq!(fehu["latin"], "f");
        assert_eq!(fehu["ipa"], "[f]");
    }

    #[test]
    fn convert_report_shape() {
        let engine = Engine::new();
        let report = ConvertReport {
            original_text: "Odin".into(),
            conversions: engine
                .convert_all("Odin")
                .into_iter()
                .map(|(system, runes)| Conversion {
                    system: system.id(),
                    label: system.label(),
                    runes,
                })
                .collect(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["original_text"], "Odin");
        assert_eq!(json["conversions"].as_array().unwrap().len(), 6);
        assert_eq!(json["conversions"][4]["system"], "medieval");
        assert_eq!(json["conversions"][4]["runes"], "ᚮᛑᛁᚿ");
    }
}
