//! Immutable, process-wide lookup tables.
//!
//! The tables are plain `static` slices. Indexed forms are built once on first
//! use and never mutated afterwards, so they are read without synchronization.

pub mod adjectives;
pub mod articles;
pub mod nouns;
pub mod numbers;
pub mod pronouns;
pub mod verbs;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::tables::numbers::CurrencyUnits;

fn index_pairs(pairs: &'static [(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
    pairs.iter().copied().collect()
}

/// Reverse of `pairs`; the first entry wins when several keys share a value.
fn index_reverse(
    pairs: &'static [(&'static str, &'static str)],
) -> HashMap<&'static str, &'static str> {
    let mut map = HashMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        map.entry(*value).or_insert(*key);
    }
    map
}

fn index_set(words: &'static [&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

// =============================================================================
// Nouns
// =============================================================================

pub static CLASSICAL_PLURAL: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| index_pairs(nouns::CLASSICAL_PLURALS));

pub static CLASSICAL_SINGULAR: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| index_reverse(nouns::CLASSICAL_PLURALS));

pub static UNCHANGED: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| index_set(nouns::UNCHANGED));

pub static HERD: LazyLock<HashSet<&'static str>> = LazyLock::new(|| index_set(nouns::HERD));

pub static MAN_EXCEPTIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| index_set(nouns::MAN_EXCEPTIONS));

pub static MEN_SINGULARS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| index_set(nouns::MEN_SINGULARS));

pub static ESE_EXCEPTIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| index_set(nouns::ESE_EXCEPTIONS));

pub static COMPOUND_PREPOSITIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| index_set(nouns::COMPOUND_PREPOSITIONS));

/// Returns the matching entry when `word` equals an entry in `list` or ends
/// with an entry of four or more letters.
pub fn compound_match(word: &str, list: &'static [&'static str]) -> Option<&'static str> {
    list.iter()
        .copied()
        .filter(|entry| word == *entry || (entry.len() >= 4 && word.ends_with(entry)))
        .max_by_key(|entry| entry.len())
}

// =============================================================================
// Pronouns
// =============================================================================

pub static PLURAL_PRONOUN: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| index_pairs(pronouns::PLURAL_PRONOUNS));

pub static SINGULAR_PRONOUN: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| index_pairs(pronouns::SINGULAR_PRONOUNS));

pub static GENDERED_PRONOUN: LazyLock<HashMap<&'static str, [&'static str; 4]>> =
    LazyLock::new(|| pronouns::GENDERED_PRONOUNS.iter().copied().collect());

// =============================================================================
// Verbs
// =============================================================================

/// Irregular verb forms keyed by base form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrregularVerb {
    pub past: &'static str,
    pub participle: &'static str,
}

pub static IRREGULAR_VERB: LazyLock<HashMap<&'static str, IrregularVerb>> = LazyLock::new(|| {
    let same = verbs::SAME_PAST_PARTICIPLE
        .iter()
        .map(|&(base, past)| {
            (
                base,
                IrregularVerb {
                    past,
                    participle: past,
                },
            )
        });
    let different = verbs::DIFFERENT_PAST_PARTICIPLE
        .iter()
        .map(|&(base, past, participle)| (base, IrregularVerb { past, participle }));
    same.chain(different).collect()
});

/// Irregular past forms and participles that differ from their base form.
pub static IRREGULAR_PARTICIPLE_FORMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let same = verbs::SAME_PAST_PARTICIPLE
        .iter()
        .filter(|(base, past)| base != past)
        .map(|(_, past)| *past);
    let different = verbs::DIFFERENT_PAST_PARTICIPLE
        .iter()
        .filter(|(base, _, participle)| base != participle)
        .map(|(_, _, participle)| *participle);
    same.chain(different).collect()
});

pub static IRREGULAR_PRESENT_PARTICIPLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| index_pairs(verbs::IRREGULAR_PRESENT_PARTICIPLES));

pub static STRESSED_FINAL_SYLLABLE: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| index_set(verbs::STRESSED_FINAL_SYLLABLE));

pub static C_PLAIN: LazyLock<HashSet<&'static str>> = LazyLock::new(|| index_set(verbs::C_PLAIN));

pub static NON_PARTICIPLE_ED: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| index_set(verbs::NON_PARTICIPLE_ED));

pub static PLURAL_VERB: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| index_pairs(verbs::PLURAL_VERBS));

pub static SINGULAR_VERB: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| index_reverse(verbs::PLURAL_VERBS));

pub static INVARIANT_VERBS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| index_set(verbs::INVARIANT_VERBS));

// =============================================================================
// Adjectives and adverbs
// =============================================================================

/// Irregular comparative and superlative keyed by positive form.
pub static IRREGULAR_COMPARISON: LazyLock<HashMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| {
        adjectives::IRREGULAR_COMPARISON
            .iter()
            .map(|(positive, comparative, superlative)| (*positive, (*comparative, *superlative)))
            .collect()
    });

pub static TWO_SYLLABLE_AFFIX: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| index_set(adjectives::TWO_SYLLABLE_AFFIX));

pub static IRREGULAR_ADVERB: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| index_pairs(adjectives::IRREGULAR_ADVERBS));

pub static FLAT_ADVERBS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| index_set(adjectives::FLAT_ADVERBS));

pub static LE_KEEPS_E: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| index_set(adjectives::LE_KEEPS_E));

pub static Y_KEEPS_Y: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| index_set(adjectives::Y_KEEPS_Y));

pub static PLURAL_ADJECTIVE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| index_pairs(adjectives::PLURAL_ADJECTIVES));

pub static SINGULAR_ADJECTIVE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| index_reverse(adjectives::PLURAL_ADJECTIVES));

// =============================================================================
// Articles
// =============================================================================

pub static LETTER_ABBREVIATIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| index_set(articles::LETTER_ABBREVIATIONS));

// =============================================================================
// Numbers
// =============================================================================

pub static IRREGULAR_ORDINAL: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| index_pairs(numbers::IRREGULAR_ORDINALS));

pub static CURRENCY: LazyLock<HashMap<&'static str, CurrencyUnits>> =
    LazyLock::new(|| numbers::CURRENCIES.iter().copied().collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn irregular_plurals_are_a_bijection() {
        let plurals: HashSet<&str> = nouns::IRREGULAR_PLURALS.iter().map(|(_, p)| *p).collect();
        assert_eq!(plurals.len(), nouns::IRREGULAR_PLURALS.len());
    }

    #[test]
    fn classical_plurals_do_not_collide_with_irregulars() {
        let irregular: HashSet<&str> = nouns::IRREGULAR_PLURALS.iter().map(|(_, p)| *p).collect();
        for (_, plural) in nouns::CLASSICAL_PLURALS {
            assert!(!irregular.contains(plural), "{plural} collides");
        }
        assert_eq!(CLASSICAL_SINGULAR.len(), nouns::CLASSICAL_PLURALS.len());
    }

    #[test]
    fn compound_match_prefers_longest_entry() {
        assert_eq!(compound_match("bookshelf", nouns::F_TO_VES), Some("shelf"));
        assert_eq!(compound_match("elf", nouns::F_TO_VES), Some("elf"));
        assert_eq!(compound_match("midwife", nouns::F_TO_VES), Some("wife"));
        assert_eq!(compound_match("chef", nouns::F_TO_VES), None);
        assert_eq!(compound_match("roof", nouns::F_TO_VES), None);
    }

    #[test]
    fn singular_verb_keeps_first_mapping() {
        assert_eq!(SINGULAR_VERB.get("are"), Some(&"is"));
        assert_eq!(SINGULAR_ADJECTIVE.get("some"), Some(&"a"));
        assert_eq!(SINGULAR_ADJECTIVE.get("their"), Some(&"his"));
    }
}
