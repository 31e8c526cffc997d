//! Stateless word-shape helpers shared by every rule chain.

pub mod casing;
pub mod phonetics;

/// Applies `f` to `text` without its surrounding whitespace and puts the
/// whitespace back. Empty or blank text is returned as is.
pub fn with_padding(text: &str, f: impl FnOnce(&str) -> String) -> String {
    let core = text.trim();
    if core.is_empty() {
        return text.to_string();
    }
    let start = text.len() - text.trim_start().len();
    let end = start + core.len();
    format!("{}{}{}", &text[..start], f(core), &text[end..])
}

/// Splits `text` into its first space-separated word and the remainder,
/// which keeps its leading separator.
pub fn split_first_word(text: &str) -> (&str, &str) {
    match text.find(char::is_whitespace) {
        Some(index) => text.split_at(index),
        None => (text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_is_restored() {
        assert_eq!(with_padding("  cat ", str::to_uppercase), "  CAT ");
        assert_eq!(with_padding("   ", str::to_uppercase), "   ");
        assert_eq!(with_padding("", str::to_uppercase), "");
    }

    #[test]
    fn first_word_split() {
        assert_eq!(split_first_word("give up"), ("give", " up"));
        assert_eq!(split_first_word("run"), ("run", ""));
    }
}
