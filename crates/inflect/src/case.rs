//! Identifier case conversion.

use std::mem;

use crate::morphology::casing::capitalize;

/// Splits `text` into words at non-alphanumeric characters, lower-to-upper
/// transitions and acronym boundaries: `HTTPServer_v2` -> `HTTP`, `Server`,
/// `v2`.
pub fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    for chunk in text.split(|c: char| !c.is_alphanumeric()) {
        let chars: Vec<char> = chunk.chars().collect();
        let mut word = String::new();
        for (index, &current) in chars.iter().enumerate() {
            let next = chars.get(index + 1).copied();
            if index > 0 && starts_word(chars[index - 1], current, next) {
                words.push(mem::take(&mut word));
            }
            word.push(current);
        }
        if !word.is_empty() {
            words.push(word);
        }
    }
    words
}

fn starts_word(previous: char, current: char, next: Option<char>) -> bool {
    if !current.is_uppercase() {
        return false;
    }
    previous.is_lowercase()
        || previous.is_numeric()
        || (previous.is_uppercase() && next.is_some_and(char::is_lowercase))
}

fn lower_words(text: &str) -> Vec<String> {
    split_words(text).iter().map(|word| word.to_lowercase()).collect()
}

/// `hello world` -> `helloWorld`.
pub fn camel_case(text: &str) -> String {
    lower_words(text)
        .iter()
        .enumerate()
        .map(|(index, word)| if index == 0 { word.clone() } else { capitalize(word) })
        .collect()
}

/// `hello world` -> `HelloWorld`.
pub fn pascal_case(text: &str) -> String {
    lower_words(text).iter().map(|word| capitalize(word)).collect()
}

/// `HelloWorld` -> `hello_world`.
pub fn snake_case(text: &str) -> String {
    lower_words(text).join("_")
}

/// `HelloWorld` -> `hello-world`.
pub fn kebab_case(text: &str) -> String {
    lower_words(text).join("-")
}

/// `hello_world` -> `Hello World`.
pub fn title_case(text: &str) -> String {
    lower_words(text)
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}
