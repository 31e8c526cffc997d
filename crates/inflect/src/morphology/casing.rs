//! Case-matching helpers.
//!
//! Rules compute on lowercase text; these helpers carry the input word's
//! capitalization pattern (lowercase, Capitalized, ALL-CAPS) over to the result.

use unicode_segmentation::UnicodeSegmentation;

/// Whether `word` has at least two letters and none of them is lowercase.
pub fn is_all_upper(word: &str) -> bool {
    let mut letters = 0;
    for c in word.chars().filter(|c| c.is_alphabetic()) {
        if c.is_lowercase() {
            return false;
        }
        letters += 1;
    }
    letters >= 2
}

/// Whether the first character of `word` is uppercase.
pub fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// A capitalized word that is not all-caps, read as a proper name.
pub fn is_proper_name(word: &str) -> bool {
    is_capitalized(word) && !is_all_upper(word)
}

/// Uppercases the first grapheme of `text`.
pub fn capitalize(text: &str) -> String {
    let mut graphemes = text.graphemes(true);
    match graphemes.next() {
        Some(first) => {
            let mut result = first.to_uppercase();
            result.push_str(graphemes.as_str());
            result
        }
        None => String::new(),
    }
}

/// Lowercases the first grapheme of `text`.
pub fn decapitalize(text: &str) -> String {
    let mut graphemes = text.graphemes(true);
    match graphemes.next() {
        Some(first) => {
            let mut result = first.to_lowercase();
            result.push_str(graphemes.as_str());
            result
        }
        None => String::new(),
    }
}

/// Applies the capitalization pattern of `source` to `target`.
///
/// `target` is assumed to be computed from the lowercase form of `source`.
/// All-caps sources give all-caps results. Otherwise the characters `target`
/// shares with the lowercase source keep the source's original casing, and a
/// capitalized source gives a capitalized result.
pub fn match_case(source: &str, target: &str) -> String {
    if is_all_upper(source) {
        return target.to_uppercase();
    }

    let mut result = String::with_capacity(target.len());
    let mut source_chars = source.chars();
    let mut target_chars = target.chars();
    for target_char in target_chars.by_ref() {
        match source_chars.next() {
            Some(source_char) if source_char.to_lowercase().eq(target_char.to_lowercase()) => {
                result.push(source_char);
            }
            _ => {
                result.push(target_char);
                break;
            }
        }
    }
    result.push_str(target_chars.as_str());

    if is_capitalized(source) {
        capitalize(&result)
    } else {
        result
    }
}

/// An uppercase first letter followed by at least one letter, all of them
/// lowercase (`Beautiful`, not `NASA`, `iPhone` or `I`).
fn is_plain_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    if !chars.next().is_some_and(char::is_uppercase) {
        return false;
    }
    let mut letters = chars.filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(char::is_lowercase)
}

/// Prefixes `word` with a lowercase `prefix` ("more", "will"), moving the
/// word's capitalization onto the prefix.
///
/// Only a plainly capitalized first word gives up its capital; acronyms and
/// mixed-case words keep their spelling.
pub fn prefix_matching_case(prefix: &str, word: &str) -> String {
    let first = word.split_whitespace().next().unwrap_or_default();
    if is_all_upper(word) {
        format!("{} {word}", prefix.to_uppercase())
    } else if is_plain_capitalized(first) {
        format!("{} {}", capitalize(prefix), decapitalize(word))
    } else if is_capitalized(word) {
        format!("{} {word}", capitalize(prefix))
    } else {
        format!("{prefix} {word}")
    }
}
