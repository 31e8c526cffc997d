//! Verb agreement, tense and participle rule chains.

use crate::engine::Engine;
use crate::morphology::casing::{match_case, prefix_matching_case};
use crate::morphology::phonetics::{consonant_before_last, double_final, doubles_final_consonant};
use crate::morphology::{split_first_word, with_padding};
use crate::rules::nouns::singular_of_ies;
use crate::tables::verbs::IRREGULAR_PREFIXES;
use crate::tables::{
    C_PLAIN, INVARIANT_VERBS, IRREGULAR_PARTICIPLE_FORMS, IRREGULAR_PRESENT_PARTICIPLE,
    IRREGULAR_VERB, IrregularVerb, NON_PARTICIPLE_ED, PLURAL_VERB, SINGULAR_VERB,
};

impl Engine {
    /// Plural (third-person agreement) form of a verb: `is` -> `are`,
    /// `watches` -> `watch`. Multi-word phrases inflect their first word.
    pub fn plural_verb(&self, word: &str) -> String {
        match self.default_count() {
            Some(count) => self.plural_verb_with_count(word, count),
            None => self.plural_verb_any(word),
        }
    }

    /// [`Engine::plural_verb`] agreeing with `count`.
    pub fn plural_verb_with_count(&self, word: &str, count: i64) -> String {
        if self.count_selects_singular(count) {
            word.to_string()
        } else {
            self.plural_verb_any(word)
        }
    }

    /// Third-person singular form of a verb: `are` -> `is`, `watch` ->
    /// `watches`.
    pub fn singular_verb(&self, word: &str) -> String {
        on_first_word(word, |verb| {
            let lower = verb.to_lowercase();
            let custom = self.read().verbs.reverse(&lower).cloned();
            if let Some(singular) = custom {
                return match_case(verb, &singular);
            }
            if let Some(singular) = SINGULAR_VERB.get(lower.as_str()) {
                return match_case(verb, singular);
            }
            match third_person_singular(&lower) {
                Some(singular) => match_case(verb, &singular),
                None => verb.to_string(),
            }
        })
    }

    pub(crate) fn plural_verb_any(&self, word: &str) -> String {
        on_first_word(word, |verb| {
            let lower = verb.to_lowercase();
            if let Some(plural) = self.custom_plural_verb(&lower) {
                return match_case(verb, &plural);
            }
            if let Some(plural) = PLURAL_VERB.get(lower.as_str()) {
                return match_case(verb, plural);
            }
            if INVARIANT_VERBS.contains(lower.as_str()) {
                return verb.to_string();
            }
            match third_person_plural(&lower) {
                Some(plural) => match_case(verb, &plural),
                None => verb.to_string(),
            }
        })
    }

    pub(crate) fn custom_plural_verb(&self, lower: &str) -> Option<String> {
        self.read().verbs.forward(lower).cloned()
    }

    /// Simple past tense: `walk` -> `walked`, `go` -> `went`,
    /// `stop` -> `stopped`.
    pub fn past_tense(&self, word: &str) -> String {
        on_first_word(word, |verb| {
            let lower = verb.to_lowercase();
            let past = match irregular_verb(&lower) {
                Some((prefix, forms)) => format!("{prefix}{}", forms.past),
                None => regular_past(&lower),
            };
            match_case(verb, &past)
        })
    }

    /// Past participle: `write` -> `written`, regular verbs as in
    /// [`Engine::past_tense`].
    pub fn past_participle(&self, word: &str) -> String {
        on_first_word(word, |verb| {
            let lower = verb.to_lowercase();
            let participle = match irregular_verb(&lower) {
                Some((prefix, forms)) => format!("{prefix}{}", forms.participle),
                None => regular_past(&lower),
            };
            match_case(verb, &participle)
        })
    }

    /// Present participle: `run` -> `running`, `make` -> `making`,
    /// `die` -> `dying`. Words that already are present participles are
    /// returned unchanged.
    pub fn present_participle(&self, word: &str) -> String {
        on_first_word(word, |verb| {
            let lower = verb.to_lowercase();
            match present_participle_of(&lower) {
                Some(participle) => match_case(verb, &participle),
                None => verb.to_string(),
            }
        })
    }

    /// Future tense: `go` -> `will go`.
    pub fn future_tense(&self, word: &str) -> String {
        with_padding(word, |verb| prefix_matching_case("will", verb))
    }

    /// Whether `word` looks like a present or past participle.
    pub fn is_participle(&self, word: &str) -> bool {
        let lower = word.trim().to_lowercase();
        if lower.is_empty() {
            return false;
        }
        if is_ing_form(&lower) || IRREGULAR_PARTICIPLE_FORMS.contains(lower.as_str()) {
            return true;
        }
        match lower.strip_suffix("ed") {
            Some(stem) => !NON_PARTICIPLE_ED.contains(lower.as_str()) && has_vowel(stem),
            None => false,
        }
    }
}

/// Applies `f` to the first word of `text`, keeping the rest verbatim.
fn on_first_word(text: &str, f: impl FnOnce(&str) -> String) -> String {
    with_padding(text, |core| {
        let (first, rest) = split_first_word(core);
        format!("{}{rest}", f(first))
    })
}

fn has_vowel(text: &str) -> bool {
    text.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}

/// An `-ing` word whose stem has at least two letters and a vowel, so
/// `running` and `going` qualify while `sing` and `bring` do not.
fn is_ing_form(lower: &str) -> bool {
    lower
        .strip_suffix("ing")
        .is_some_and(|stem| stem.chars().count() >= 2 && has_vowel(stem))
}

/// Irregular forms of `lower`, directly or under a prefix such as `under-`
/// or `re-`. Returns the prefix to put back.
fn irregular_verb(lower: &str) -> Option<(&str, IrregularVerb)> {
    if let Some(forms) = IRREGULAR_VERB.get(lower) {
        return Some(("", *forms));
    }
    IRREGULAR_PREFIXES.iter().find_map(|prefix| {
        let base = lower.strip_prefix(prefix)?;
        if base.chars().count() < 2 {
            return None;
        }
        IRREGULAR_VERB.get(base).map(|forms| (&lower[..prefix.len()], *forms))
    })
}

/// Regular `-ed` form.
fn regular_past(lower: &str) -> String {
    if lower.ends_with('e') {
        return format!("{lower}d");
    }
    if let Some(stem) = lower.strip_suffix('y') {
        if consonant_before_last(lower) {
            return format!("{stem}ied");
        }
    }
    if lower.ends_with('c') && !C_PLAIN.contains(lower) {
        return format!("{lower}ked");
    }
    if doubles_final_consonant(lower) {
        return format!("{}ed", double_final(lower));
    }
    format!("{lower}ed")
}

/// `-ing` form; `None` when `lower` already is one.
fn present_participle_of(lower: &str) -> Option<String> {
    if let Some(participle) = IRREGULAR_PRESENT_PARTICIPLE.get(lower) {
        return Some((*participle).to_string());
    }
    if is_ing_form(lower) {
        return None;
    }
    if let Some(stem) = lower.strip_suffix("ie") {
        return Some(format!("{stem}ying"));
    }
    if lower.ends_with("ee") || lower.ends_with("ye") || lower.ends_with("oe") {
        return Some(format!("{lower}ing"));
    }
    if let Some(stem) = lower.strip_suffix('e') {
        if !stem.is_empty() {
            return Some(format!("{stem}ing"));
        }
    }
    if lower.ends_with('c') && !C_PLAIN.contains(lower) {
        return Some(format!("{lower}king"));
    }
    if doubles_final_consonant(lower) {
        return Some(format!("{}ing", double_final(lower)));
    }
    Some(format!("{lower}ing"))
}

/// Base form of a third-person singular verb; `None` when `lower` is
/// not one.
fn third_person_plural(lower: &str) -> Option<String> {
    if let Some(stem) = lower.strip_suffix("ies") {
        return Some(singular_of_ies(stem));
    }
    if ["sses", "shes", "ches", "xes", "zzes", "oes"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        return lower.strip_suffix("es").map(str::to_string);
    }
    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        return None;
    }
    lower.strip_suffix('s').map(str::to_string)
}

/// Third-person singular of a base verb; `None` when `lower` already is
/// one or is a past form.
fn third_person_singular(lower: &str) -> Option<String> {
    if INVARIANT_VERBS.contains(lower)
        || IRREGULAR_PARTICIPLE_FORMS.contains(lower)
        || lower.ends_with("ed")
    {
        return None;
    }
    if lower.ends_with('s') && !lower.ends_with("ss") {
        return None;
    }
    if let Some(stem) = lower.strip_suffix('y') {
        if consonant_before_last(lower) {
            return Some(format!("{stem}ies"));
        }
    }
    if ["s", "sh", "ch", "x", "z"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
        || (lower.ends_with('o') && consonant_before_last(lower))
    {
        return Some(format!("{lower}es"));
    }
    Some(format!("{lower}s"))
}
