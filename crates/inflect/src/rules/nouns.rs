//! Plural and singular rule chains for nouns and pronouns.

use crate::engine::{ClassicalMode, Engine};
use crate::morphology::casing::{is_proper_name, match_case};
use crate::morphology::phonetics::{consonant_before_last, double_final, ends_cvc, syllable_count};
use crate::morphology::with_padding;
use crate::plural::is_singular_count;
use crate::rules::inflect_compound;
use crate::tables::nouns::{
    self, CHE_WORDS, F_TO_VES, IE_WORDS, O_TAKES_S, OE_WORDS, S_SINGULARS, SINGLE_Z,
    UNCHANGED_SUFFIXES, USE_WORDS,
};
use crate::tables::{
    CLASSICAL_PLURAL, CLASSICAL_SINGULAR, ESE_EXCEPTIONS, GENDERED_PRONOUN, HERD,
    MAN_EXCEPTIONS, MEN_SINGULARS, PLURAL_ADJECTIVE, PLURAL_PRONOUN, PLURAL_VERB,
    SINGULAR_PRONOUN, UNCHANGED, compound_match,
};

impl Engine {
    /// Plural of a noun, pronoun, determiner or auxiliary verb.
    ///
    /// Determiners (`this` -> `these`) and auxiliaries (`is` -> `are`) are
    /// recognized first; everything else goes through the noun chain. When a
    /// default count is set (see [`Engine::num`]) it applies here.
    ///
    /// ```
    /// use inflect::Engine;
    ///
    /// let engine = Engine::new();
    /// assert_eq!(engine.plural("child"), "children");
    /// assert_eq!(engine.plural("CHILD"), "CHILDREN");
    /// assert_eq!(engine.plural("this"), "these");
    /// ```
    pub fn plural(&self, word: &str) -> String {
        match self.default_count() {
            Some(count) => self.plural_with_count(word, count),
            None => self.plural_any(word),
        }
    }

    /// [`Engine::plural`] agreeing with `count`: 1 and -1 keep `word`.
    pub fn plural_with_count(&self, word: &str, count: i64) -> String {
        if self.count_selects_singular(count) {
            word.to_string()
        } else {
            self.plural_any(word)
        }
    }

    /// Plural of a noun or personal pronoun.
    pub fn plural_noun(&self, word: &str) -> String {
        match self.default_count() {
            Some(count) => self.plural_noun_with_count(word, count),
            None => self.plural_noun_any(word),
        }
    }

    /// [`Engine::plural_noun`] agreeing with `count`.
    pub fn plural_noun_with_count(&self, word: &str, count: i64) -> String {
        if self.count_selects_singular(count) {
            word.to_string()
        } else {
            self.plural_noun_any(word)
        }
    }

    /// Singular of a noun. Same as [`Engine::singular_noun`].
    pub fn singular(&self, word: &str) -> String {
        self.singular_noun(word)
    }

    /// [`Engine::singular`] agreeing with `count`.
    pub fn singular_with_count(&self, word: &str, count: i64) -> String {
        self.singular_noun_with_count(word, count)
    }

    /// Singular of a noun or personal pronoun.
    ///
    /// Third-person plural pronouns resolve through the engine's gender:
    /// `they` becomes `it` by default, `he`, `she` or `they` otherwise.
    pub fn singular_noun(&self, word: &str) -> String {
        match self.default_count() {
            Some(count) => self.singular_noun_with_count(word, count),
            None => self.singular_noun_any(word),
        }
    }

    /// [`Engine::singular_noun`] agreeing with `count`: any count other
    /// than 1 and -1 keeps the plural `word`.
    pub fn singular_noun_with_count(&self, word: &str, count: i64) -> String {
        if self.count_selects_singular(count) {
            self.singular_noun_any(word)
        } else {
            word.to_string()
        }
    }

    pub(crate) fn plural_any(&self, word: &str) -> String {
        with_padding(word, |core| {
            let lower = core.to_lowercase();
            if let Some(plural) = self.custom_plural_adj(&lower) {
                return match_case(core, &plural);
            }
            if let Some(plural) = PLURAL_ADJECTIVE.get(lower.as_str()) {
                return match_case(core, plural);
            }
            if let Some(plural) = self.custom_plural_verb(&lower) {
                return match_case(core, &plural);
            }
            if let Some(plural) = PLURAL_VERB.get(lower.as_str()) {
                return match_case(core, plural);
            }
            self.plural_noun_core(core)
        })
    }

    pub(crate) fn plural_noun_any(&self, word: &str) -> String {
        with_padding(word, |core| self.plural_noun_core(core))
    }

    fn plural_noun_core(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if let Some(plural) = PLURAL_PRONOUN.get(lower.as_str()) {
            return match_pronoun_case(word, plural);
        }
        inflect_compound(word, &|part| self.plural_word(part))
    }

    pub(crate) fn singular_noun_any(&self, word: &str) -> String {
        with_padding(word, |core| {
            let lower = core.to_lowercase();
            if let Some(singular) = SINGULAR_PRONOUN.get(lower.as_str()) {
                return match_pronoun_case(core, singular);
            }
            if let Some(forms) = GENDERED_PRONOUN.get(lower.as_str()) {
                return match_case(core, forms[self.gender().index()]);
            }
            inflect_compound(core, &|part| self.singular_word(part))
        })
    }

    /// Plural of a single word.
    pub(crate) fn plural_word(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        let classical = self.classical_flags();

        if classical.is_active(ClassicalMode::Names) && is_proper_name(word) && lower.ends_with('s')
        {
            return word.to_string();
        }
        if classical.is_active(ClassicalMode::Ancient) {
            if let Some(plural) = CLASSICAL_PLURAL.get(lower.as_str()) {
                return match_case(word, plural);
            }
        }
        if classical.is_active(ClassicalMode::Persons) && lower.ends_with("person") {
            return match_case(word, &format!("{lower}s"));
        }

        let irregular = self.read().nouns.forward(&lower).cloned();
        if let Some(plural) = irregular {
            return match_case(word, &plural);
        }

        if is_unchanged(&lower)
            || (classical.is_active(ClassicalMode::Herd) && HERD.contains(lower.as_str()))
            || is_nationality(&lower)
        {
            return word.to_string();
        }

        match_case(word, &plural_by_suffix(&lower, is_proper_name(word)))
    }

    /// Singular of a single word.
    pub(crate) fn singular_word(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        let classical = self.classical_flags();

        if classical.is_active(ClassicalMode::Names) && is_proper_name(word) && lower.ends_with('s')
        {
            return match lower.strip_suffix("ses") {
                Some(stem) => match_case(word, &format!("{stem}s")),
                None => word.to_string(),
            };
        }

        let irregular = self.read().nouns.reverse(&lower).cloned();
        if let Some(singular) = irregular {
            return match_case(word, &singular);
        }

        if is_unchanged(&lower) || HERD.contains(lower.as_str()) || is_nationality(&lower) {
            return word.to_string();
        }
        if let Some(singular) = CLASSICAL_SINGULAR.get(lower.as_str()) {
            return match_case(word, singular);
        }

        match singular_by_suffix(&lower) {
            Some(singular) => match_case(word, &singular),
            None => word.to_string(),
        }
    }

    /// Whether a count selects the singular form under the current
    /// classical zero setting.
    pub(crate) fn count_selects_singular(&self, count: i64) -> bool {
        is_singular_count(count)
            || (count == 0 && self.is_classical(ClassicalMode::Zero))
    }
}

/// Case matching that treats the pronoun `I` as lowercase.
fn match_pronoun_case(source: &str, target: &str) -> String {
    let result = if source == "I" {
        target.to_string()
    } else {
        match_case(source, target)
    };
    if result == "i" { "I".to_string() } else { result }
}

fn is_unchanged(lower: &str) -> bool {
    UNCHANGED.contains(lower) || compound_match(lower, UNCHANGED_SUFFIXES).is_some()
}

fn is_nationality(lower: &str) -> bool {
    (lower.ends_with("ese") && !ESE_EXCEPTIONS.contains(lower)) || lower.ends_with("ois")
}

/// Suffix rules for plurals, applied after every table lookup missed.
fn plural_by_suffix(lower: &str, proper_name: bool) -> String {
    if let Some(stem) = lower.strip_suffix("man") {
        return if lower.ends_with("human") || MAN_EXCEPTIONS.contains(lower) {
            format!("{lower}s")
        } else {
            format!("{stem}men")
        };
    }

    if lower.ends_with("ch") {
        return if compound_match(lower, nouns::HARD_CH).is_some() {
            format!("{lower}s")
        } else {
            format!("{lower}es")
        };
    }
    if lower.ends_with('s') || lower.ends_with("sh") || lower.ends_with('x') {
        return format!("{lower}es");
    }
    if lower.ends_with('z') {
        return if ends_cvc(lower) && syllable_count(lower) == 1 {
            format!("{}es", double_final(lower))
        } else {
            format!("{lower}es")
        };
    }

    if let Some(stem) = lower.strip_suffix('y') {
        if consonant_before_last(lower) {
            return if proper_name {
                format!("{lower}s")
            } else {
                format!("{stem}ies")
            };
        }
    }

    if compound_match(lower, F_TO_VES).is_some() {
        if let Some(stem) = lower.strip_suffix("fe") {
            return format!("{stem}ves");
        }
        if let Some(stem) = lower.strip_suffix('f') {
            return format!("{stem}ves");
        }
    }

    if lower.ends_with('o')
        && consonant_before_last(lower)
        && !proper_name
        && compound_match(lower, O_TAKES_S).is_none()
    {
        return format!("{lower}es");
    }

    format!("{lower}s")
}

/// Suffix rules for singulars; `None` when the word is already singular.
fn singular_by_suffix(lower: &str) -> Option<String> {
    if let Some(stem) = lower.strip_suffix("men") {
        return if MEN_SINGULARS.contains(lower) {
            None
        } else {
            Some(format!("{stem}man"))
        };
    }

    if let Some(stem) = lower.strip_suffix("ies") {
        return Some(singular_of_ies(stem));
    }

    if let Some(stem) = lower.strip_suffix("ves") {
        let with_fe = format!("{stem}fe");
        if compound_match(&with_fe, F_TO_VES).is_some_and(|entry| entry.ends_with("fe")) {
            return Some(with_fe);
        }
        let with_f = format!("{stem}f");
        if compound_match(&with_f, F_TO_VES).is_some_and(|entry| entry.ends_with('f')) {
            return Some(with_f);
        }
        return Some(format!("{stem}ve"));
    }

    if let Some(stem) = lower.strip_suffix("oes") {
        let with_oe = format!("{stem}oe");
        if compound_match(&with_oe, OE_WORDS).is_some() {
            return Some(with_oe);
        }
        return Some(format!("{stem}o"));
    }

    if let Some(stem) = lower.strip_suffix("zes") {
        if stem.ends_with('z') && compound_match(stem, SINGLE_Z).is_some() {
            return Some(stem.to_string());
        }
    }

    if ["sses", "shes", "xes", "zzes", "tzes"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        return lower.strip_suffix("es").map(str::to_string);
    }

    if let Some(stem) = lower.strip_suffix("ches") {
        let with_che = format!("{stem}che");
        if compound_match(&with_che, CHE_WORDS).is_some() {
            return Some(with_che);
        }
        return Some(format!("{stem}ch"));
    }

    if let Some(stem) = lower.strip_suffix("uses") {
        let with_use = format!("{stem}use");
        if stem.ends_with('o') || stem.ends_with('a') || compound_match(&with_use, USE_WORDS).is_some()
        {
            return Some(with_use);
        }
        return Some(format!("{stem}us"));
    }

    if let Some(stem) = lower.strip_suffix("ses") {
        let base = format!("{stem}s");
        if S_SINGULARS.contains(&base.as_str()) {
            return Some(base);
        }
        return Some(format!("{stem}se"));
    }

    if lower.ends_with("ss")
        || lower.ends_with("us")
        || lower.ends_with("is")
        || S_SINGULARS.contains(&lower)
    {
        return None;
    }

    lower.strip_suffix('s').map(str::to_string)
}

/// `-ies` plurals: `-ie` words ("movies", "ties"), otherwise `-y`.
pub(crate) fn singular_of_ies(stem: &str) -> String {
    let with_ie = format!("{stem}ie");
    if stem.chars().count() <= 1 || compound_match(&with_ie, IE_WORDS).is_some() {
        with_ie
    } else {
        format!("{stem}y")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_plurals() {
        assert_eq!(plural_by_suffix("box", false), "boxes");
        assert_eq!(plural_by_suffix("church", false), "churches");
        assert_eq!(plural_by_suffix("stomach", false), "stomachs");
        assert_eq!(plural_by_suffix("city", false), "cities");
        assert_eq!(plural_by_suffix("mary", true), "marys");
        assert_eq!(plural_by_suffix("day", false), "days");
        assert_eq!(plural_by_suffix("knife", false), "knives");
        assert_eq!(plural_by_suffix("roof", false), "roofs");
        assert_eq!(plural_by_suffix("potato", false), "potatoes");
        assert_eq!(plural_by_suffix("piano", false), "pianos");
        assert_eq!(plural_by_suffix("radio", false), "radios");
        assert_eq!(plural_by_suffix("fireman", false), "firemen");
        assert_eq!(plural_by_suffix("human", false), "humans");
        assert_eq!(plural_by_suffix("german", false), "germans");
        assert_eq!(plural_by_suffix("fez", false), "fezzes");
        assert_eq!(plural_by_suffix("waltz", false), "waltzes");
    }

    #[test]
    fn suffix_singulars() {
        assert_eq!(singular_by_suffix("boxes").as_deref(), Some("box"));
        assert_eq!(singular_by_suffix("cities").as_deref(), Some("city"));
        assert_eq!(singular_by_suffix("movies").as_deref(), Some("movie"));
        assert_eq!(singular_by_suffix("ties").as_deref(), Some("tie"));
        assert_eq!(singular_by_suffix("wolves").as_deref(), Some("wolf"));
        assert_eq!(singular_by_suffix("knives").as_deref(), Some("knife"));
        assert_eq!(singular_by_suffix("gloves").as_deref(), Some("glove"));
        assert_eq!(singular_by_suffix("heroes").as_deref(), Some("hero"));
        assert_eq!(singular_by_suffix("shoes").as_deref(), Some("shoe"));
        assert_eq!(singular_by_suffix("churches").as_deref(), Some("church"));
        assert_eq!(singular_by_suffix("headaches").as_deref(), Some("headache"));
        assert_eq!(singular_by_suffix("houses").as_deref(), Some("house"));
        assert_eq!(singular_by_suffix("buses").as_deref(), Some("bus"));
        assert_eq!(singular_by_suffix("viruses").as_deref(), Some("virus"));
        assert_eq!(singular_by_suffix("gases").as_deref(), Some("gas"));
        assert_eq!(singular_by_suffix("cases").as_deref(), Some("case"));
        assert_eq!(singular_by_suffix("firemen").as_deref(), Some("fireman"));
        assert_eq!(singular_by_suffix("fezzes").as_deref(), Some("fez"));
        assert_eq!(singular_by_suffix("whizzes").as_deref(), Some("whiz"));
        assert_eq!(singular_by_suffix("buzzes").as_deref(), Some("buzz"));
        assert_eq!(singular_by_suffix("waltzes").as_deref(), Some("waltz"));
        assert_eq!(singular_by_suffix("specimen"), None);
        assert_eq!(singular_by_suffix("class"), None);
        assert_eq!(singular_by_suffix("cat"), None);
    }
}
