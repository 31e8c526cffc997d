//! The process-wide default engine and free functions operating on it.
//!
//! Every [`Engine`] method has a free-function counterpart here with the
//! same name and semantics, so `inflect::plural("cat")` is
//! `inflect::engine().plural("cat")`.

use std::sync::LazyLock;

use crate::engine::{
    ClassicalFlags, ClassicalMode, Engine, EngineOptions, Gender, PatternError, PossessiveStyle,
};
use crate::interpreter::{CallError, InflectReport};
use crate::rules::Comparison;
use crate::types::Value;

static DEFAULT_ENGINE: LazyLock<Engine> = LazyLock::new(Engine::new);

/// The shared default engine used by the free functions.
///
/// ```
/// inflect::engine().def_noun("pokemon", "pokemon");
/// assert_eq!(inflect::plural("pokemon"), "pokemon");
/// ```
pub fn engine() -> &'static Engine {
    &DEFAULT_ENGINE
}

macro_rules! delegate {
    () => {};
    (fn $name:ident($($arg:ident: $ty:ty),*) -> $ret:ty; $($rest:tt)*) => {
        #[doc = concat!("[`Engine::", stringify!($name), "`] on the default engine.")]
        pub fn $name($($arg: $ty),*) -> $ret {
            engine().$name($($arg),*)
        }
        delegate!($($rest)*);
    };
    (fn $name:ident($($arg:ident: $ty:ty),*); $($rest:tt)*) => {
        #[doc = concat!("[`Engine::", stringify!($name), "`] on the default engine.")]
        pub fn $name($($arg: $ty),*) {
            engine().$name($($arg),*);
        }
        delegate!($($rest)*);
    };
}

// Nouns
delegate! {
    fn plural(word: &str) -> String;
    fn plural_with_count(word: &str, count: i64) -> String;
    fn plural_noun(word: &str) -> String;
    fn plural_noun_with_count(word: &str, count: i64) -> String;
    fn singular(word: &str) -> String;
    fn singular_with_count(word: &str, count: i64) -> String;
    fn singular_noun(word: &str) -> String;
    fn singular_noun_with_count(word: &str, count: i64) -> String;
}

// Verbs
delegate! {
    fn plural_verb(word: &str) -> String;
    fn plural_verb_with_count(word: &str, count: i64) -> String;
    fn singular_verb(word: &str) -> String;
    fn past_tense(word: &str) -> String;
    fn past_participle(word: &str) -> String;
    fn present_participle(word: &str) -> String;
    fn future_tense(word: &str) -> String;
    fn is_participle(word: &str) -> bool;
}

// Adjectives and adverbs
delegate! {
    fn plural_adj(word: &str) -> String;
    fn plural_adj_with_count(word: &str, count: i64) -> String;
    fn singular_adj(word: &str) -> String;
    fn comparative(word: &str) -> String;
    fn superlative(word: &str) -> String;
    fn adverb(word: &str) -> String;
}

// Articles, agreement and naming
delegate! {
    fn an(word: &str) -> String;
    fn a(word: &str) -> String;
    fn compare(first: &str, second: &str) -> Option<Comparison>;
    fn compare_nouns(first: &str, second: &str) -> Option<Comparison>;
    fn compare_verbs(first: &str, second: &str) -> Option<Comparison>;
    fn compare_adjs(first: &str, second: &str) -> Option<Comparison>;
    fn no(word: &str, count: Option<i64>) -> String;
    fn num(count: Option<i64>) -> String;
    fn possessive(word: &str) -> String;
    fn tableize(text: &str) -> String;
    fn classify(text: &str) -> String;
}

// Macro interpreter
delegate! {
    fn inflect(text: &str) -> String;
    fn inflect_with_report(text: &str) -> InflectReport;
    fn call(name: &str, values: &[Value]) -> Result<String, CallError>;
}

// Configuration
delegate! {
    fn options() -> EngineOptions;
    fn apply_options(options: &EngineOptions);
    fn reset();
    fn set_classical(mode: ClassicalMode, enabled: bool);
    fn is_classical(mode: ClassicalMode) -> bool;
    fn set_classical_all(enabled: bool);
    fn is_classical_all() -> bool;
    fn classical_flags() -> ClassicalFlags;
    fn gender() -> Gender;
    fn set_gender(gender: Gender);
    fn possessive_style() -> PossessiveStyle;
    fn set_possessive_style(style: PossessiveStyle);
    fn default_count() -> Option<i64>;
}

// Custom overrides
delegate! {
    fn def_noun(singular: &str, plural: &str);
    fn undef_noun(singular: &str) -> bool;
    fn reset_nouns();
    fn def_verb(singular: &str, plural: &str);
    fn undef_verb(singular: &str) -> bool;
    fn reset_verbs();
    fn def_adj(singular: &str, plural: &str);
    fn undef_adj(singular: &str) -> bool;
    fn reset_adjs();
    fn def_a(word: &str);
    fn def_an(word: &str);
    fn undef_a(word: &str) -> bool;
    fn undef_an(word: &str) -> bool;
    fn def_a_pattern(pattern: &str) -> Result<(), PatternError>;
    fn def_an_pattern(pattern: &str) -> Result<(), PatternError>;
    fn undef_a_pattern(pattern: &str) -> bool;
    fn undef_an_pattern(pattern: &str) -> bool;
    fn def_a_reset();
}
