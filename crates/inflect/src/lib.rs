//! English inflection: plurals and singulars, verb tenses, comparatives,
//! indefinite articles, number words, and a macro interpreter that expands
//! `plural('cat', 2)`-style calls embedded in text.
//!
//! Every operation is a method on [`Engine`], which holds the mutable
//! configuration (classical modes, gender, custom overrides), and also a
//! free function operating on a shared default engine.
//!
//! ```
//! use inflect::{Engine, Gender};
//!
//! let engine = Engine::new();
//! assert_eq!(engine.plural("mother-in-law"), "mothers-in-law");
//! assert_eq!(engine.past_tense("go"), "went");
//! assert_eq!(engine.an("hour"), "an hour");
//!
//! engine.set_gender(Gender::Feminine);
//! assert_eq!(engine.singular_noun("they"), "she");
//!
//! assert_eq!(inflect::ordinal_word(21), "twenty-first");
//! ```

mod case;
mod engine;
mod global;
pub mod interpreter;
mod morphology;
mod numbers;
pub mod parser;
mod plural;
mod rails;
mod rules;
mod tables;
pub mod types;

pub use case::{camel_case, kebab_case, pascal_case, snake_case, split_words, title_case};
pub use engine::{
    ClassicalFlags, ClassicalMode, Engine, EngineOptions, Gender, PatternError, PossessiveStyle,
};
pub use global::*;
pub use interpreter::{CallError, InflectReport, SkippedToken, compute_suggestions};
pub use numbers::{
    RomanError, currency_to_words, int_to_roman, number_to_words, ordinal, ordinal_word,
    roman_to_int,
};
pub use plural::is_singular_count;
pub use rails::{foreign_key, humanize, titleize};
pub use rules::Comparison;
pub use types::Value;

/// Creates a `Vec<Value>` of call arguments.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, or strings directly.
///
/// # Example
///
/// ```
/// use inflect::{Engine, args};
///
/// let engine = Engine::new();
/// assert_eq!(engine.call("plural", &args!["ox", 2]).unwrap(), "oxen");
/// assert_eq!(engine.call("currency_to_words", &args![2.5, "EUR"]).unwrap(),
///     "two euros and fifty cents");
/// assert!(args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    [] => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    [ $($value:expr),+ $(,)? ] => {
        ::std::vec![$(::std::convert::Into::<$crate::Value>::into($value)),+]
    };
}
