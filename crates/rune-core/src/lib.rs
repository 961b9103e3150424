//! Modern English to historical runic alphabets, and an approximate
//! reverse transliteration back to Latin letters.
//!
//! ```
//! use rune_core::{Engine, RuneSystem};
//!
//! let engine = Engine::new();
//! assert_eq!(engine.convert("the", RuneSystem::ElderFuthark).unwrap(), "ᚦᛖ");
//! ```

pub mod alphabet;
pub mod engine;
pub mod normalize;
pub mod phonetic;
pub mod settings;
pub mod system;
pub mod unicode;

pub use alphabet::{AlphabetRegistry, AlphabetTable, RuneError, TableConfigError};
pub use engine::Engine;
pub use normalize::normalize;
pub use phonetic::{PhoneticEntry, PhoneticTable, Transliteration};
pub use settings::Settings;
pub use system::{list_systems, RuneSystem};
