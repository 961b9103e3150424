//! Checks applied to user input before it reaches the engine.

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{0} cannot be empty")]
    Empty(&'static str),
}

/// Trim `raw` and reject it if nothing is left.
pub fn require_text<'a>(raw: &'a str, what: &'static str) -> Result<&'a str, InputError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(InputError::Empty(what));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims() {
        assert_eq!(require_text("  Odin \n", "Text"), Ok("Odin"));
    }

    #[test]
    fn rejects_blank() {
        assert_eq!(require_text("", "Text"), Err(InputError::Empty("Text")));
        let err = require_text(" \t ", "Runic text").unwrap_err();
        assert_eq!(err.to_string(), "Runic text cannot be empty");
    }
}
