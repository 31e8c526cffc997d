//! Integration tests for engine configuration, isolation and sharing.

use std::thread;

use inflect::{ClassicalFlags, ClassicalMode, Engine, EngineOptions, Gender, PossessiveStyle};

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn classical_flags_toggle_independently() {
    let engine = Engine::new();
    assert!(!engine.is_classical(ClassicalMode::Ancient));

    engine.set_classical(ClassicalMode::Ancient, true);
    assert!(engine.is_classical(ClassicalMode::Ancient));
    assert!(!engine.is_classical(ClassicalMode::Herd));
    assert!(!engine.is_classical_all());

    engine.set_classical(ClassicalMode::General, true);
    assert!(engine.is_classical(ClassicalMode::Herd));
    assert!(!engine.is_classical_all());

    engine.set_classical_all(true);
    assert!(engine.is_classical_all());
    assert_eq!(engine.classical_flags(), ClassicalFlags::ALL);

    engine.set_classical_all(false);
    assert_eq!(engine.classical_flags(), ClassicalFlags::default());
}

#[test]
fn num_sets_and_clears_the_default_count() {
    let engine = Engine::new();
    assert_eq!(engine.num(Some(1)), "1");
    assert_eq!(engine.default_count(), Some(1));
    assert_eq!(engine.plural("cat"), "cat");
    assert_eq!(engine.num(None), "");
    assert_eq!(engine.default_count(), None);
    assert_eq!(engine.plural("cat"), "cats");
}

#[test]
fn options_builder_configures_an_engine() {
    let options = EngineOptions::builder()
        .gender(Gender::Masculine)
        .possessive_style(PossessiveStyle::Traditional)
        .default_count(3)
        .build();
    let engine = Engine::with_options(options.clone());
    assert_eq!(engine.options(), options);
    assert_eq!(engine.singular_noun_with_count("they", 1), "he");
    assert_eq!(engine.singular_noun("they"), "they");
    assert_eq!(engine.possessive("James"), "James'");
    assert_eq!(engine.plural_verb("is"), "are");
}

#[test]
fn options_round_trip_through_json() {
    let engine = Engine::new();
    engine.set_gender(Gender::They);
    engine.set_classical(ClassicalMode::Herd, true);

    let json = serde_json::to_string(&engine.options()).unwrap();
    let parsed: EngineOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.gender, Gender::They);
    assert!(parsed.classical.herd);

    let other = Engine::new();
    other.apply_options(&parsed);
    assert_eq!(other.options(), engine.options());
}

#[test]
fn apply_options_keeps_custom_words() {
    let engine = Engine::new();
    engine.def_noun("cactus", "cactuses");
    engine.apply_options(&EngineOptions::default());
    assert_eq!(engine.plural("cactus"), "cactuses");
}

#[test]
fn reset_restores_defaults_and_drops_overrides() {
    let engine = Engine::new();
    engine.def_noun("cow", "kine");
    engine.def_a("apple");
    engine.set_gender(Gender::Feminine);
    engine.set_classical_all(true);
    engine.num(Some(1));

    engine.reset();
    assert_eq!(engine.options(), EngineOptions::default());
    assert_eq!(engine.plural("cow"), "cows");
    assert_eq!(engine.an("apple"), "an apple");
}

// =============================================================================
// Isolation and sharing
// =============================================================================

#[test]
fn clones_are_independent() {
    let engine = Engine::new();
    engine.def_noun("data", "datums");
    let copy = engine.clone();
    assert_eq!(copy.plural("data"), "datums");

    copy.def_noun("data", "data");
    copy.set_gender(Gender::Feminine);
    assert_eq!(engine.plural("data"), "datums");
    assert_eq!(engine.gender(), Gender::Neuter);
    assert_eq!(copy.plural("data"), "data");
}

#[test]
fn engines_do_not_share_state() {
    let first = Engine::new();
    let second = Engine::new();
    first.set_classical(ClassicalMode::Ancient, true);
    assert_eq!(first.plural("formula"), "formulae");
    assert_eq!(second.plural("formula"), "formulas");
}

#[test]
fn engine_is_shared_across_threads() {
    let engine = Engine::new();
    let words = ["ox", "mouse", "child", "box", "city", "wolf"];
    thread::scope(|scope| {
        for (index, word) in words.iter().enumerate() {
            let engine = &engine;
            scope.spawn(move || {
                let custom = format!("zorb{index}");
                engine.def_noun(&custom, &format!("{custom}ii"));
                for _ in 0..100 {
                    let plural = engine.plural(word);
                    assert_eq!(engine.singular(&plural), *word);
                    assert_eq!(engine.plural(&custom), format!("{custom}ii"));
                }
            });
        }
    });
    assert_eq!(engine.plural("zorb0"), "zorb0ii");
    assert_eq!(engine.plural("zorb5"), "zorb5ii");
}

// =============================================================================
// Default engine
// =============================================================================

#[test]
fn free_functions_use_the_default_engine() {
    assert_eq!(inflect::plural("child"), "children");
    assert_eq!(inflect::an("hour"), "an hour");
    assert_eq!(inflect::inflect("plural_noun('box')"), "boxes");

    inflect::def_noun("glorp", "glorpen");
    assert_eq!(inflect::engine().plural("glorp"), "glorpen");
    assert!(inflect::undef_noun("glorp"));
    assert_eq!(inflect::plural("glorp"), "glorps");
}

#[test]
fn default_engine_expands_text_independently_across_threads() {
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(inflect::inflect("num(1)plural('cat')"), "cat");
                    assert_eq!(inflect::inflect("plural('cat')"), "cats");
                }
            });
        }
    });
    assert_eq!(inflect::engine().default_count(), None);
}
