//! Number comparison, counted phrases and possessives.

use std::fmt::{self, Display, Formatter};

use crate::engine::{Engine, PossessiveStyle};
use crate::morphology::casing::{is_all_upper, is_proper_name};
use crate::morphology::with_padding;

/// How two words relate in number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// The words are the same.
    Equal,
    /// The first word is the singular of the second.
    SingularPlural,
    /// The first word is the plural of the second.
    PluralSingular,
    /// Both are plurals of the same singular (`indexes`, `indices`).
    PluralPlural,
}

impl Comparison {
    /// Short code: `eq`, `s:p`, `p:s` or `p:p`.
    pub fn code(self) -> &'static str {
        match self {
            Comparison::Equal => "eq",
            Comparison::SingularPlural => "s:p",
            Comparison::PluralSingular => "p:s",
            Comparison::PluralPlural => "p:p",
        }
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Engine {
    /// Compares two words as nouns, then verbs, then adjectives.
    ///
    /// ```
    /// use inflect::{Comparison, Engine};
    ///
    /// let engine = Engine::new();
    /// assert_eq!(engine.compare("cat", "cats"), Some(Comparison::SingularPlural));
    /// assert_eq!(engine.compare("cat", "dog"), None);
    /// ```
    pub fn compare(&self, first: &str, second: &str) -> Option<Comparison> {
        self.compare_nouns(first, second)
            .or_else(|| self.compare_verbs(first, second))
            .or_else(|| self.compare_adjs(first, second))
    }

    /// Compares two words as nouns.
    pub fn compare_nouns(&self, first: &str, second: &str) -> Option<Comparison> {
        let (first, second) = (first.trim().to_lowercase(), second.trim().to_lowercase());
        if first.is_empty() || second.is_empty() {
            return None;
        }
        if first == second {
            return Some(Comparison::Equal);
        }
        let first_singular = self.singular_noun_any(&first);
        let second_singular = self.singular_noun_any(&second);
        if second_singular == first || self.plural_noun_any(&first) == second {
            return Some(Comparison::SingularPlural);
        }
        if first_singular == second || self.plural_noun_any(&second) == first {
            return Some(Comparison::PluralSingular);
        }
        if first_singular == second_singular && first_singular != first && second_singular != second
        {
            return Some(Comparison::PluralPlural);
        }
        None
    }

    /// Compares two words as verbs.
    pub fn compare_verbs(&self, first: &str, second: &str) -> Option<Comparison> {
        self.compare_by(first, second, |word| self.plural_verb_any(word))
    }

    /// Compares two words as adjectives.
    pub fn compare_adjs(&self, first: &str, second: &str) -> Option<Comparison> {
        self.compare_by(first, second, |word| self.plural_adj_any(word))
    }

    fn compare_by(
        &self,
        first: &str,
        second: &str,
        plural: impl Fn(&str) -> String,
    ) -> Option<Comparison> {
        let (first, second) = (first.trim().to_lowercase(), second.trim().to_lowercase());
        if first.is_empty() || second.is_empty() {
            return None;
        }
        if first == second {
            return Some(Comparison::Equal);
        }
        if plural(&first) == second {
            return Some(Comparison::SingularPlural);
        }
        if plural(&second) == first {
            return Some(Comparison::PluralSingular);
        }
        None
    }

    /// Counted phrase: `no("error", Some(0))` is `"no errors"`,
    /// `no("error", Some(1))` is `"1 error"`.
    ///
    /// Without a count the engine's default count applies, then zero. In
    /// classical zero mode a count of zero keeps the singular.
    pub fn no(&self, word: &str, count: Option<i64>) -> String {
        let count = count.or_else(|| self.default_count()).unwrap_or(0);
        let noun = self.plural_noun_with_count(word, count);
        if count == 0 {
            format!("no {noun}")
        } else {
            format!("{count} {noun}")
        }
    }

    /// Possessive form: `cat` -> `cat's`, `cats` -> `cats'`,
    /// `children` -> `children's`. Singular words ending in `s` follow the
    /// engine's [`PossessiveStyle`].
    pub fn possessive(&self, word: &str) -> String {
        with_padding(word, |noun| {
            if noun.ends_with('\'') || noun.ends_with("'s") || noun.ends_with("'S") {
                return noun.to_string();
            }
            let lower = noun.to_lowercase();
            let suffix = if !lower.ends_with('s') {
                "'s"
            } else if !is_proper_name(noun) && self.singular_noun_any(&lower) != lower {
                "'"
            } else {
                match self.possessive_style() {
                    PossessiveStyle::Modern => "'s",
                    PossessiveStyle::Traditional => "'",
                }
            };
            if is_all_upper(noun) {
                format!("{noun}{}", suffix.to_uppercase())
            } else {
                format!("{noun}{suffix}")
            }
        })
    }
}
