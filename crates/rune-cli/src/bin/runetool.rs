use std::path::PathBuf;

use clap::{Parser, Subcommand};

use rune_cli::commands::{config_ops, convert_ops};
use rune_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "runetool", about = "Historical runic alphabet converter")]
struct Cli {
    /// Write JSON trace logs to this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available runic systems
    Systems {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert English text to runes
    Convert {
        /// Text to convert
        text: String,
        /// System identifier or label (default: all systems)
        #[arg(short, long)]
        system: Option<String>,
        /// Alphabet TOML file to use instead of the built-in tables
        #[arg(long)]
        tables: Option<String>,
        /// Settings TOML file to use instead of the built-in settings
        #[arg(long)]
        settings: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read runes back as approximate Latin letters
    Transliterate {
        /// Runic text
        runes: String,
        /// One Latin letter per rune, without IPA or notes
        #[arg(long)]
        plain: bool,
        /// Settings TOML file to use instead of the built-in settings
        #[arg(long)]
        settings: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the glyphs the transliterator knows, with Latin, IPA and notes
    Glyphs {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one system's Latin-to-rune table
    Table {
        /// System identifier or label
        system: String,
        /// Alphabet TOML file to use instead of the built-in tables
        #[arg(long)]
        tables: Option<String>,
    },
    /// Export or validate alphabet tables
    Tables {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Export or validate the phonetic table
    Phonetics {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Export or validate engine settings
    Settings {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the built-in TOML
    Export,
    /// Check a TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.as_deref());

    match cli.command {
        Command::Systems { json } => convert_ops::systems_cmd(json),
        Command::Convert {
            text,
            system,
            tables,
            settings,
            json,
        } => {
            let engine = convert_ops::open_engine(tables.as_deref(), settings.as_deref());
            convert_ops::convert_cmd(&engine, &text, system.as_deref(), json);
        }
        Command::Transliterate {
            runes,
            plain,
            settings,
            json,
        } => {
            let engine = convert_ops::open_engine(None, settings.as_deref());
            convert_ops::transliterate_cmd(&engine, &runes, plain, json);
        }
        Command::Glyphs { json } => {
            let engine = convert_ops::open_engine(None, None);
            convert_ops::glyphs_cmd(&engine, json);
        }
        Command::Table { system, tables } => {
            let engine = convert_ops::open_engine(tables.as_deref(), None);
            convert_ops::table_cmd(&engine, &system);
        }
        Command::Tables { action } => match action {
            ConfigAction::Export => config_ops::tables_export(),
            ConfigAction::Validate { file } => config_ops::tables_validate(&file),
        },
        Command::Phonetics { action } => match action {
            ConfigAction::Export => config_ops::phonetics_export(),
            ConfigAction::Validate { file } => config_ops::phonetics_validate(&file),
        },
        Command::Settings { action } => match action {
            ConfigAction::Export => config_ops::settings_export(),
            ConfigAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
