use std::fs;

use rune_core::{alphabet, phonetic, settings, AlphabetRegistry, RuneSystem};

pub fn tables_export() {
    print!("{}", alphabet::default_toml());
}

pub fn tables_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let tables = die!(alphabet::parse_alphabet_toml(&content), "Error: {}");
    for (system, mappings) in &tables {
        println!("OK: [{}] {} mappings", system.id(), mappings.len());
    }
    let missing: Vec<&str> = RuneSystem::ALL
        .iter()
        .filter(|s| !tables.contains_key(*s))
        .map(|s| s.id())
        .collect();
    if !missing.is_empty() {
        println!("Not covered: {}", missing.join(", "));
    }
}

pub fn phonetics_export() {
    print!("{}", phonetic::default_toml());
}

pub fn phonetics_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let entries = die!(phonetic::parse_phonetic_toml(&content), "Error: {}");
    let registry = AlphabetRegistry::new();
    let elder = die!(registry.table(RuneSystem::ElderFuthark), "Error: {}");
    let table = phonetic::PhoneticTable::build(entries.clone(), elder);
    println!(
        "OK: {} entries, {} distinct glyphs after Elder Futhark fill-in",
        entries.len(),
        table.len()
    );
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: conversion.passthrough_symbols={:?}, transliteration.empty_guide={:?}",
        s.conversion.passthrough_symbols, s.transliteration.empty_guide
    );
}
