//! Mutable per-engine state guarded by the engine's lock.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::engine::error::PatternError;
use crate::engine::options::{ClassicalFlags, EngineOptions, Gender, PossessiveStyle};
use crate::tables::nouns::IRREGULAR_PLURALS;

/// A registered article override pattern.
#[derive(Debug, Clone)]
pub struct ArticlePattern {
    /// Pattern text as registered, before anchoring.
    pub source: String,
    regex: Regex,
}

impl ArticlePattern {
    /// Compiles `source` anchored to match a whole word.
    pub fn compile(source: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(&format!("^(?:{source})$")).map_err(|source_error| {
            PatternError::InvalidPattern {
                pattern: source.to_string(),
                source: source_error,
            }
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }
}

/// A pair of maps kept as exact inverses of each other.
#[derive(Debug, Clone, Default)]
pub struct Bimap {
    forward: HashMap<String, String>,
    reverse: HashMap<String, String>,
}

impl Bimap {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut map = Self::default();
        for (key, value) in pairs {
            map.insert(key, value);
        }
        map
    }

    pub fn forward(&self, key: &str) -> Option<&String> {
        self.forward.get(key)
    }

    pub fn reverse(&self, value: &str) -> Option<&String> {
        self.reverse.get(value)
    }

    /// Maps `key` to `value`, dropping any entry either side was part of.
    pub fn insert(&mut self, key: &str, value: &str) {
        if let Some(old_value) = self.forward.remove(key) {
            self.reverse.remove(&old_value);
        }
        if let Some(old_key) = self.reverse.remove(value) {
            self.forward.remove(&old_key);
        }
        self.forward.insert(key.to_string(), value.to_string());
        self.reverse.insert(value.to_string(), key.to_string());
    }

    /// Removes the entry for `key`; returns whether there was one.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.forward.remove(key) {
            Some(value) => {
                self.reverse.remove(&value);
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// Everything an engine can change at runtime.
#[derive(Debug, Clone)]
pub struct EngineState {
    pub classical: ClassicalFlags,
    pub gender: Gender,
    pub possessive_style: PossessiveStyle,
    pub default_count: Option<i64>,
    /// Built-in irregular plurals merged with custom noun overrides.
    pub nouns: Bimap,
    pub verbs: Bimap,
    pub adjectives: Bimap,
    pub a_words: HashSet<String>,
    pub an_words: HashSet<String>,
    pub a_patterns: Vec<ArticlePattern>,
    pub an_patterns: Vec<ArticlePattern>,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            classical: ClassicalFlags::default(),
            gender: Gender::default(),
            possessive_style: PossessiveStyle::default(),
            default_count: None,
            nouns: Bimap::from_pairs(IRREGULAR_PLURALS),
            verbs: Bimap::default(),
            adjectives: Bimap::default(),
            a_words: HashSet::new(),
            an_words: HashSet::new(),
            a_patterns: Vec::new(),
            an_patterns: Vec::new(),
        }
    }
}

impl EngineState {
    pub fn from_options(options: &EngineOptions) -> Self {
        let mut state = Self::default();
        state.apply_options(options);
        state
    }

    pub fn apply_options(&mut self, options: &EngineOptions) {
        self.classical = options.classical;
        self.gender = options.gender;
        self.possessive_style = options.possessive_style;
        self.default_count = options.default_count;
    }

    pub fn options(&self) -> EngineOptions {
        EngineOptions {
            classical: self.classical,
            gender: self.gender,
            possessive_style: self.possessive_style,
            default_count: self.default_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bimap_insert_drops_competing_entries() {
        let mut map = Bimap::default();
        map.insert("cow", "kine");
        map.insert("cow", "cows");
        assert_eq!(map.forward("cow").map(String::as_str), Some("cows"));
        assert_eq!(map.reverse("kine"), None);

        map.insert("bovine", "cows");
        assert_eq!(map.forward("cow"), None);
        assert_eq!(map.reverse("cows").map(String::as_str), Some("bovine"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn bimap_remove_clears_both_directions() {
        let mut map = Bimap::from_pairs(&[("child", "children")]);
        assert!(map.remove("child"));
        assert!(!map.remove("child"));
        assert_eq!(map.reverse("children"), None);
        assert!(map.is_empty());
    }

    #[test]
    fn patterns_are_anchored() {
        let pattern = ArticlePattern::compile("euro.*").unwrap();
        assert!(pattern.is_match("european"));
        assert!(!pattern.is_match("neuron"));
        assert!(ArticlePattern::compile("(").is_err());
    }
}
