//! Indefinite article selection.

use std::sync::LazyLock;

use regex::Regex;

use crate::engine::Engine;
use crate::morphology::casing::is_all_upper;
use crate::tables::LETTER_ABBREVIATIONS;
use crate::tables::articles::{
    CONSONANT_SOUND_PREFIXES, SILENT_H_PREFIXES, VOWEL_SOUND_LETTERS, YOU_SOUND_PATTERN,
};

static CONSONANT_SOUND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?:{})", CONSONANT_SOUND_PREFIXES.join("|")))
        .expect("built-in consonant-sound pattern should compile")
});

static YOU_SOUND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{YOU_SOUND_PATTERN}"))
        .expect("built-in you-sound pattern should compile")
});

/// Which indefinite article a word takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Article {
    A,
    An,
}

impl Article {
    fn as_str(self) -> &'static str {
        match self {
            Article::A => "a",
            Article::An => "an",
        }
    }
}

impl Engine {
    /// Prefixes `word` with "a" or "an".
    ///
    /// Custom exact words win over custom patterns, which win over the
    /// built-in sound heuristics; "a" overrides are checked before "an"
    /// overrides at each level.
    ///
    /// ```
    /// use inflect::Engine;
    ///
    /// let engine = Engine::new();
    /// assert_eq!(engine.an("hour"), "an hour");
    /// assert_eq!(engine.an("university"), "a university");
    /// assert_eq!(engine.an("FBI agent"), "an FBI agent");
    /// ```
    pub fn an(&self, word: &str) -> String {
        let text = word.trim_start();
        let Some(first) = text.split_whitespace().next() else {
            return word.to_string();
        };
        let article = self.custom_article(first).unwrap_or_else(|| default_article(first));
        format!("{} {text}", article.as_str())
    }

    /// Same as [`Engine::an`].
    pub fn a(&self, word: &str) -> String {
        self.an(word)
    }

    fn custom_article(&self, first: &str) -> Option<Article> {
        let lower = first.to_lowercase();
        let state = self.read();
        if state.a_words.contains(&lower) {
            return Some(Article::A);
        }
        if state.an_words.contains(&lower) {
            return Some(Article::An);
        }
        if state.a_patterns.iter().any(|pattern| pattern.is_match(&lower)) {
            return Some(Article::A);
        }
        if state.an_patterns.iter().any(|pattern| pattern.is_match(&lower)) {
            return Some(Article::An);
        }
        None
    }
}

fn letter_name_article(letter: char) -> Article {
    if VOWEL_SOUND_LETTERS.contains(&letter.to_ascii_lowercase()) {
        Article::An
    } else {
        Article::A
    }
}

/// Built-in sound heuristics for the first word of a phrase.
fn default_article(first: &str) -> Article {
    let lower = first.to_lowercase();
    let Some(initial) = lower.chars().next() else {
        return Article::A;
    };

    if SILENT_H_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
        return Article::An;
    }

    if initial.is_ascii_digit() {
        return numeral_article(&lower);
    }

    let letters: String = lower.chars().take_while(|c| c.is_alphabetic()).collect();
    let leading: String = first.chars().take_while(|c| c.is_alphabetic()).collect();
    if letters.chars().count() == 1
        || is_all_upper(&leading)
        || LETTER_ABBREVIATIONS.contains(letters.as_str())
    {
        return letter_name_article(initial);
    }

    if CONSONANT_SOUND.is_match(&lower) || YOU_SOUND.is_match(&lower) {
        return Article::A;
    }

    if matches!(initial, 'a' | 'e' | 'i' | 'o' | 'u') {
        Article::An
    } else {
        Article::A
    }
}

/// Numbers read aloud: "an 8", "an 11", "an 18,000", "a 110".
fn numeral_article(lower: &str) -> Article {
    let digits: String = lower
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(char::is_ascii_digit)
        .collect();
    if digits.starts_with('8') {
        return Article::An;
    }
    if (digits.starts_with("11") || digits.starts_with("18")) && digits.len().rem_euclid(3) == 2
    {
        return Article::An;
    }
    Article::A
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numerals() {
        assert_eq!(numeral_article("8"), Article::An);
        assert_eq!(numeral_article("800"), Article::An);
        assert_eq!(numeral_article("11"), Article::An);
        assert_eq!(numeral_article("18,000"), Article::An);
        assert_eq!(numeral_article("110"), Article::A);
        assert_eq!(numeral_article("1"), Article::A);
        assert_eq!(numeral_article("100"), Article::A);
    }

    #[test]
    fn sound_heuristics() {
        assert_eq!(default_article("hour"), Article::An);
        assert_eq!(default_article("honest"), Article::An);
        assert_eq!(default_article("house"), Article::A);
        assert_eq!(default_article("university"), Article::A);
        assert_eq!(default_article("unidentified"), Article::An);
        assert_eq!(default_article("one"), Article::A);
        assert_eq!(default_article("onerous"), Article::An);
        assert_eq!(default_article("euro"), Article::A);
        assert_eq!(default_article("usual"), Article::A);
        assert_eq!(default_article("umbrella"), Article::An);
        assert_eq!(default_article("apple"), Article::An);
        assert_eq!(default_article("banana"), Article::A);
    }

    #[test]
    fn letters_and_abbreviations() {
        assert_eq!(default_article("FBI"), Article::An);
        assert_eq!(default_article("URL"), Article::A);
        assert_eq!(default_article("x"), Article::An);
        assert_eq!(default_article("U-turn"), Article::A);
        assert_eq!(default_article("e-mail"), Article::An);
        assert_eq!(default_article("sql"), Article::An);
        assert_eq!(default_article("html"), Article::An);
    }
}
