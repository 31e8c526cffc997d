//! Rule chains, implemented as methods on [`Engine`](crate::Engine).

mod adjectives;
mod agreement;
mod articles;
mod nouns;
mod verbs;

pub use agreement::Comparison;

use crate::tables::COMPOUND_PREPOSITIONS;

fn is_preposition(word: &str) -> bool {
    COMPOUND_PREPOSITIONS.contains(word.to_lowercase().as_str())
}

/// Applies a single-word rule to the head of a compound noun.
///
/// The head is the word before the first preposition (`mother-in-law`,
/// `son of a gun`); without a preposition it is the last word.
pub(crate) fn inflect_compound(text: &str, inflect_word: &dyn Fn(&str) -> String) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    if let Some((last, init)) = words.split_last() {
        if !init.is_empty() {
            if let Some(position) = words.iter().skip(1).position(|w| is_preposition(w)) {
                let head_end = position + 1;
                let head = words[..head_end].join(" ");
                let tail = words[head_end..].join(" ");
                return format!("{} {tail}", inflect_compound(&head, inflect_word));
            }
            return format!("{} {}", init.join(" "), inflect_word(last));
        }
    }

    let parts: Vec<&str> = text.split('-').collect();
    if parts.len() > 2 {
        if let Some(position) = parts.iter().skip(1).position(|p| is_preposition(p)) {
            let head_end = position + 1;
            let head = parts[..head_end].join("-");
            let tail = parts[head_end..].join("-");
            return format!("{}-{tail}", inflect_word(&head));
        }
    }

    inflect_word(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shout(word: &str) -> String {
        word.to_uppercase()
    }

    #[test]
    fn compound_heads() {
        assert_eq!(inflect_compound("mother-in-law", &shout), "MOTHER-in-law");
        assert_eq!(inflect_compound("son of a gun", &shout), "SON of a gun");
        assert_eq!(inflect_compound("post office", &shout), "post OFFICE");
        assert_eq!(inflect_compound("check-in", &shout), "CHECK-IN");
        assert_eq!(inflect_compound("cat", &shout), "CAT");
    }
}
