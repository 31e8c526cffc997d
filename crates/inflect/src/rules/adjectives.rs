//! Adjective agreement, comparison and adverb rule chains.

use crate::engine::Engine;
use crate::morphology::casing::{is_all_upper, match_case, prefix_matching_case};
use crate::morphology::phonetics::{
    consonant_before_last, double_final, doubles_final_consonant, syllable_count,
};
use crate::morphology::with_padding;
use crate::tables::{
    FLAT_ADVERBS, GENDERED_PRONOUN, IRREGULAR_ADVERB, IRREGULAR_COMPARISON, LE_KEEPS_E,
    PLURAL_ADJECTIVE, SINGULAR_ADJECTIVE, TWO_SYLLABLE_AFFIX, Y_KEEPS_Y,
};

#[derive(Clone, Copy)]
enum Degree {
    Comparative,
    Superlative,
}

impl Degree {
    fn suffix(self) -> &'static str {
        match self {
            Degree::Comparative => "er",
            Degree::Superlative => "est",
        }
    }

    fn periphrasis(self) -> &'static str {
        match self {
            Degree::Comparative => "more",
            Degree::Superlative => "most",
        }
    }
}

impl Engine {
    /// Plural of a determiner, demonstrative or possessive:
    /// `this` -> `these`, `a` -> `some`, `child's` -> `children's`.
    /// Other adjectives do not inflect and are returned unchanged.
    pub fn plural_adj(&self, word: &str) -> String {
        match self.default_count() {
            Some(count) => self.plural_adj_with_count(word, count),
            None => self.plural_adj_any(word),
        }
    }

    /// [`Engine::plural_adj`] agreeing with `count`.
    pub fn plural_adj_with_count(&self, word: &str, count: i64) -> String {
        if self.count_selects_singular(count) {
            word.to_string()
        } else {
            self.plural_adj_any(word)
        }
    }

    /// Reverse of [`Engine::plural_adj`]; `their` resolves through the
    /// engine's gender.
    pub fn singular_adj(&self, word: &str) -> String {
        with_padding(word, |adjective| {
            let lower = adjective.to_lowercase();
            let custom = self.read().adjectives.reverse(&lower).cloned();
            if let Some(singular) = custom {
                return match_case(adjective, &singular);
            }
            if lower == "their" {
                if let Some(forms) = GENDERED_PRONOUN.get("their") {
                    return match_case(adjective, forms[self.gender().index()]);
                }
            }
            if let Some(singular) = SINGULAR_ADJECTIVE.get(lower.as_str()) {
                return match_case(adjective, singular);
            }
            if let Some(owner) = adjective.strip_suffix("s'") {
                return format!("{}'s", self.singular_noun_any(&format!("{owner}s")));
            }
            if let Some(owner) = adjective.strip_suffix("'s") {
                let singular = self.singular_noun_any(owner);
                if singular != owner {
                    return format!("{singular}'s");
                }
            }
            adjective.to_string()
        })
    }

    pub(crate) fn plural_adj_any(&self, word: &str) -> String {
        with_padding(word, |adjective| {
            let lower = adjective.to_lowercase();
            if let Some(plural) = self.custom_plural_adj(&lower) {
                return match_case(adjective, &plural);
            }
            if let Some(plural) = PLURAL_ADJECTIVE.get(lower.as_str()) {
                return match_case(adjective, plural);
            }
            let possessive = adjective
                .strip_suffix("'s")
                .or_else(|| adjective.strip_suffix("'S"));
            if let Some(owner) = possessive {
                let plural = self.plural_noun_any(owner);
                let suffix = if plural.ends_with(['s', 'S']) { "'" } else { "'s" };
                let suffix = if is_all_upper(owner) {
                    suffix.to_uppercase()
                } else {
                    suffix.to_string()
                };
                return format!("{plural}{suffix}");
            }
            adjective.to_string()
        })
    }

    pub(crate) fn custom_plural_adj(&self, lower: &str) -> Option<String> {
        self.read().adjectives.forward(lower).cloned()
    }

    /// Comparative degree: `big` -> `bigger`, `happy` -> `happier`,
    /// `beautiful` -> `more beautiful`, `good` -> `better`.
    pub fn comparative(&self, word: &str) -> String {
        compare_degree(word, Degree::Comparative)
    }

    /// Superlative degree: `big` -> `biggest`, `beautiful` ->
    /// `most beautiful`, `good` -> `best`.
    pub fn superlative(&self, word: &str) -> String {
        compare_degree(word, Degree::Superlative)
    }

    /// Adverb formed from an adjective: `quick` -> `quickly`,
    /// `happy` -> `happily`, `basic` -> `basically`, `good` -> `well`.
    pub fn adverb(&self, word: &str) -> String {
        with_padding(word, |adjective| {
            match_case(adjective, &adverb_of(&adjective.to_lowercase()))
        })
    }
}

fn compare_degree(word: &str, degree: Degree) -> String {
    with_padding(word, |adjective| {
        let lower = adjective.to_lowercase();
        if let Some((comparative, superlative)) = IRREGULAR_COMPARISON.get(lower.as_str()) {
            let form = match degree {
                Degree::Comparative => comparative,
                Degree::Superlative => superlative,
            };
            return match_case(adjective, form);
        }
        if lower.contains(char::is_whitespace) || !takes_affix(&lower) {
            return prefix_matching_case(degree.periphrasis(), adjective);
        }
        match_case(adjective, &with_degree_suffix(&lower, degree))
    })
}

/// One-syllable words, two-syllable words in `-y`, and a closed set of
/// other two-syllable words take `-er`/`-est`.
fn takes_affix(lower: &str) -> bool {
    match syllable_count(lower) {
        1 => true,
        2 => lower.ends_with('y') || TWO_SYLLABLE_AFFIX.contains(lower),
        _ => false,
    }
}

fn with_degree_suffix(lower: &str, degree: Degree) -> String {
    let suffix = degree.suffix();
    if lower.ends_with('e') {
        return format!("{lower}{}", &suffix[1..]);
    }
    if let Some(stem) = lower.strip_suffix('y') {
        if consonant_before_last(lower) {
            return format!("{stem}i{suffix}");
        }
    }
    if doubles_final_consonant(lower) {
        return format!("{}{suffix}", double_final(lower));
    }
    format!("{lower}{suffix}")
}

fn adverb_of(lower: &str) -> String {
    if let Some(adverb) = IRREGULAR_ADVERB.get(lower) {
        return (*adverb).to_string();
    }
    if FLAT_ADVERBS.contains(lower) {
        return lower.to_string();
    }
    if lower == "public" {
        return "publicly".to_string();
    }
    if lower.ends_with("ic") {
        return format!("{lower}ally");
    }
    if lower.ends_with("ll") {
        return format!("{lower}y");
    }
    if let Some(stem) = lower.strip_suffix("ue") {
        if !stem.ends_with(['q', 'g']) {
            return format!("{stem}uly");
        }
    }
    if lower.ends_with("ile") || LE_KEEPS_E.contains(lower) {
        return format!("{lower}ly");
    }
    if let Some(stem) = lower.strip_suffix("le") {
        return format!("{stem}ly");
    }
    if let Some(stem) = lower.strip_suffix('y') {
        if consonant_before_last(lower) && !Y_KEEPS_Y.contains(lower) {
            return format!("{stem}ily");
        }
    }
    format!("{lower}ly")
}
