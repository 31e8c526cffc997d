//! Syllable and consonant-vowel-consonant heuristics.
//!
//! These are pure functions over lowercase words, shared by the verb-tense,
//! participle and comparative rule chains so they all judge words the same way.

use crate::tables::STRESSED_FINAL_SYLLABLE;

/// Whether `c` is one of the five vowel letters.
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Whether `c` is an ASCII letter other than a vowel letter.
pub fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// Whether the second-to-last character of `word` is a consonant
/// (consonant + `y`, consonant + `o`).
pub fn consonant_before_last(word: &str) -> bool {
    let mut chars = word.chars().rev();
    chars.next();
    chars.next().is_some_and(is_consonant)
}

/// Estimated syllable count of a lowercase word.
///
/// Each run of vowels (`y` included after the first letter) is one syllable.
/// A final lone `e` after a consonant is silent unless it is the only vowel.
pub fn syllable_count(word: &str) -> usize {
    let chars: Vec<char> = word.chars().collect();
    let mut groups = 0;
    let mut in_group = false;
    for (i, &c) in chars.iter().enumerate() {
        let vowel = is_vowel(c) || (c == 'y' && i > 0);
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }

    let silent_e = chars.len() >= 2
        && chars[chars.len() - 1] == 'e'
        && is_consonant(chars[chars.len() - 2]);
    if silent_e && groups > 1 {
        groups -= 1;
    }
    groups.max(1)
}

/// Whether `word` ends consonant-vowel-consonant with a final consonant that
/// can be doubled (not `w`, `x` or `y`).
pub fn ends_cvc(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let [.., first, middle, last] = chars.as_slice() else {
        return false;
    };
    is_consonant(*first)
        && is_vowel(*middle)
        && is_consonant(*last)
        && !matches!(last, 'w' | 'x' | 'y')
}

/// Whether the final consonant should be doubled before a vowel suffix
/// (`-ed`, `-ing`, `-er`, `-est`).
pub fn doubles_final_consonant(word: &str) -> bool {
    ends_cvc(word) && (syllable_count(word) == 1 || STRESSED_FINAL_SYLLABLE.contains(word))
}

/// `word` with its final character repeated.
pub fn double_final(word: &str) -> String {
    let mut doubled = word.to_string();
    if let Some(last) = word.chars().last() {
        doubled.push(last);
    }
    doubled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_vowel_groups() {
        assert_eq!(syllable_count("big"), 1);
        assert_eq!(syllable_count("happy"), 2);
        assert_eq!(syllable_count("beautiful"), 3);
        assert_eq!(syllable_count("rhythm"), 1);
    }

    #[test]
    fn silent_e_is_not_counted() {
        assert_eq!(syllable_count("large"), 1);
        assert_eq!(syllable_count("simple"), 1);
        assert_eq!(syllable_count("the"), 1);
        assert_eq!(syllable_count("free"), 1);
        assert_eq!(syllable_count("blue"), 1);
    }

    #[test]
    fn cvc_detection() {
        assert!(ends_cvc("stop"));
        assert!(ends_cvc("big"));
        assert!(!ends_cvc("snow"));
        assert!(!ends_cvc("fix"));
        assert!(!ends_cvc("play"));
        assert!(!ends_cvc("cool"));
        assert!(!ends_cvc("go"));
    }

    #[test]
    fn doubling_requires_one_syllable_or_final_stress() {
        assert!(doubles_final_consonant("run"));
        assert!(doubles_final_consonant("prefer"));
        assert!(!doubles_final_consonant("visit"));
        assert!(!doubles_final_consonant("open"));
        assert!(!doubles_final_consonant("common"));
    }
}
