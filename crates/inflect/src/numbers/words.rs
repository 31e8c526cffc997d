//! Cardinal and ordinal number words.

use crate::tables::IRREGULAR_ORDINAL;
use crate::tables::numbers::{ONES, SCALES, TENS};

/// Spells out an integer in US style: `123` -> `"one hundred twenty-three"`.
///
/// ```
/// assert_eq!(inflect::number_to_words(-42), "negative forty-two");
/// assert_eq!(inflect::number_to_words(1_000_001), "one million one");
/// ```
pub fn number_to_words(number: i64) -> String {
    if number == 0 {
        return ONES[0].to_string();
    }
    let words = unsigned_words(number.unsigned_abs());
    if number < 0 {
        format!("negative {words}")
    } else {
        words
    }
}

fn unsigned_words(mut number: u64) -> String {
    let mut groups = Vec::new();
    let mut scale = 0;
    while number > 0 {
        let group = number.rem_euclid(1000);
        if group > 0 {
            let words = hundreds_words(group);
            groups.push(match SCALES[scale] {
                "" => words,
                name => format!("{words} {name}"),
            });
        }
        number = number.div_euclid(1000);
        scale += 1;
    }
    groups.reverse();
    groups.join(" ")
}

/// Words for `1..=999`.
fn hundreds_words(number: u64) -> String {
    let hundreds = number.div_euclid(100);
    let rest = number.rem_euclid(100);
    let mut parts = Vec::new();
    if hundreds > 0 {
        parts.push(format!("{} hundred", ONES[hundreds as usize]));
    }
    if rest > 0 {
        parts.push(tens_words(rest));
    }
    parts.join(" ")
}

/// Words for `1..=99`.
fn tens_words(number: u64) -> String {
    if number < 20 {
        return ONES[number as usize].to_string();
    }
    let tens = TENS[number.div_euclid(10) as usize];
    match number.rem_euclid(10) {
        0 => tens.to_string(),
        ones => format!("{tens}-{}", ONES[ones as usize]),
    }
}

/// Numeric ordinal: `1` -> `"1st"`, `12` -> `"12th"`, `-3` -> `"-3rd"`.
pub fn ordinal(number: i64) -> String {
    let magnitude = number.unsigned_abs();
    let suffix = if (11..=13).contains(&magnitude.rem_euclid(100)) {
        "th"
    } else {
        match magnitude.rem_euclid(10) {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{number}{suffix}")
}

/// Spelled-out ordinal: `21` -> `"twenty-first"`, `100` -> `"one hundredth"`.
pub fn ordinal_word(number: i64) -> String {
    let words = number_to_words(number);
    let split = words.rfind([' ', '-']).map_or(0, |index| index + 1);
    let (head, last) = words.split_at(split);
    format!("{head}{}", ordinal_of_word(last))
}

fn ordinal_of_word(word: &str) -> String {
    if let Some(ordinal) = IRREGULAR_ORDINAL.get(word) {
        return (*ordinal).to_string();
    }
    match word.strip_suffix('y') {
        Some(stem) => format!("{stem}ieth"),
        None => format!("{word}th"),
    }
}
