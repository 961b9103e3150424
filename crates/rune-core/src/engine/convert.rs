use tracing::debug;

use crate::alphabet::AlphabetTable;
use crate::settings::Settings;
use crate::unicode::{is_decimal_digit, push_unmapped};

/// Greedy longest-match tokenization of already-normalized text.
///
/// At each position the two-character key is tried before the
/// one-character key. Unmatched digits and allow-listed symbols are copied;
/// anything else is emitted as `[c]`.
pub(crate) fn tokenize(normalized: &str, table: &AlphabetTable, settings: &Settings) -> String {
    let chars: Vec<char> = normalized.chars().collect();
    let mut out = String::with_capacity(normalized.len() * 3);
    let mut key = String::with_capacity(8);
    let mut unmapped = 0usize;
    let mut i = 0;

    while i < chars.len() {
        if i + 1 < chars.len() {
            key.clear();
            key.push(chars[i]);
            key.push(chars[i + 1]);
            if let Some(runes) = table.get(&key) {
                out.push_str(runes);
                i += 2;
                continue;
            }
        }

        let c = chars[i];
        key.clear();
        key.push(c);
        if let Some(runes) = table.get(&key) {
            out.push_str(runes);
        } else if is_decimal_digit(c) || settings.is_passthrough_symbol(c) {
            out.push(c);
        } else {
            push_unmapped(&mut out, c);
            unmapped += 1;
        }
        i += 1;
    }

    if unmapped > 0 {
        debug!(unmapped, system = table.system().id(), "unmapped characters");
    }
    out
}
