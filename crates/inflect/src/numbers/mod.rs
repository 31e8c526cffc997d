//! Number words, ordinals, Roman numerals and currency amounts.
//!
//! These helpers hold no engine state and are plain functions.

mod currency;
mod roman;
mod words;

pub use currency::currency_to_words;
pub use roman::{RomanError, int_to_roman, roman_to_int};
pub use words::{number_to_words, ordinal, ordinal_word};
