//! Integration tests for noun plurals and singulars.

use inflect::{ClassicalMode, Engine, Gender};

// =============================================================================
// Plurals
// =============================================================================

#[test]
fn regular_suffix_plurals() {
    let engine = Engine::new();
    let cases = [
        ("cat", "cats"),
        ("box", "boxes"),
        ("church", "churches"),
        ("dish", "dishes"),
        ("city", "cities"),
        ("day", "days"),
        ("knife", "knives"),
        ("wolf", "wolves"),
        ("bookshelf", "bookshelves"),
        ("roof", "roofs"),
        ("potato", "potatoes"),
        ("piano", "pianos"),
        ("stomach", "stomachs"),
        ("fireman", "firemen"),
        ("human", "humans"),
    ];
    for (singular, plural) in cases {
        assert_eq!(engine.plural_noun(singular), plural, "plural of {singular}");
    }
}

#[test]
fn irregular_and_unchanged_plurals() {
    let engine = Engine::new();
    assert_eq!(engine.plural("child"), "children");
    assert_eq!(engine.plural("person"), "people");
    assert_eq!(engine.plural("mouse"), "mice");
    assert_eq!(engine.plural("criterion"), "criteria");
    assert_eq!(engine.plural("sheep"), "sheep");
    assert_eq!(engine.plural("goldfish"), "goldfish");
    assert_eq!(engine.plural("series"), "series");
    assert_eq!(engine.plural("Chinese"), "Chinese");
}

#[test]
fn plural_matches_input_case() {
    let engine = Engine::new();
    assert_eq!(engine.plural("Child"), "Children");
    assert_eq!(engine.plural("CHILD"), "CHILDREN");
    assert_eq!(engine.plural("Box"), "Boxes");
    assert_eq!(engine.plural("CITY"), "CITIES");
}

#[test]
fn plural_keeps_surrounding_whitespace() {
    let engine = Engine::new();
    assert_eq!(engine.plural("  cat "), "  cats ");
    assert_eq!(engine.plural(""), "");
    assert_eq!(engine.plural("   "), "   ");
}

#[test]
fn compound_nouns_inflect_their_head() {
    let engine = Engine::new();
    assert_eq!(engine.plural("mother-in-law"), "mothers-in-law");
    assert_eq!(engine.plural("son of a gun"), "sons of a gun");
    assert_eq!(engine.plural("post office"), "post offices");
    assert_eq!(engine.singular("mothers-in-law"), "mother-in-law");
    assert_eq!(engine.singular("post offices"), "post office");
}

#[test]
fn plural_handles_determiners_and_auxiliaries() {
    let engine = Engine::new();
    assert_eq!(engine.plural("this"), "these");
    assert_eq!(engine.plural("is"), "are");
    assert_eq!(engine.plural("I"), "we");
    assert_eq!(engine.plural("me"), "us");
    assert_eq!(engine.plural_noun("it"), "they");
}

// =============================================================================
// Singulars
// =============================================================================

#[test]
fn singulars() {
    let engine = Engine::new();
    let cases = [
        ("cats", "cat"),
        ("boxes", "box"),
        ("cities", "city"),
        ("movies", "movie"),
        ("knives", "knife"),
        ("wolves", "wolf"),
        ("heroes", "hero"),
        ("churches", "church"),
        ("glasses", "glass"),
        ("children", "child"),
        ("people", "person"),
        ("indices", "index"),
        ("sheep", "sheep"),
        ("news", "news"),
        ("bus", "bus"),
    ];
    for (plural, singular) in cases {
        assert_eq!(engine.singular_noun(plural), singular, "singular of {plural}");
    }
}

#[test]
fn singular_is_singular_noun() {
    let engine = Engine::new();
    for word in ["cats", "women", "analyses", "Oxen", ""] {
        assert_eq!(engine.singular(word), engine.singular_noun(word));
    }
}

#[test]
fn irregular_plurals_round_trip() {
    let engine = Engine::new();
    for singular in ["child", "person", "goose", "tooth", "ox", "analysis", "datum", "matrix"] {
        let plural = engine.plural_noun(singular);
        assert_ne!(plural, singular);
        assert_eq!(engine.singular_noun(&plural), singular);
    }
}

#[test]
fn doubled_z_plurals_round_trip() {
    let engine = Engine::new();
    for singular in ["fez", "whiz", "buzz", "waltz", "box"] {
        let plural = engine.plural_noun(singular);
        assert_eq!(engine.singular_noun(&plural), singular, "{singular} -> {plural}");
    }
    assert_eq!(engine.plural_noun("fez"), "fezzes");
    assert_eq!(engine.plural_noun("whiz"), "whizzes");
}

#[test]
fn pronouns_resolve_through_gender() {
    let engine = Engine::new();
    assert_eq!(engine.singular_noun("they"), "it");
    assert_eq!(engine.singular_noun("we"), "I");
    assert_eq!(engine.singular_noun("They"), "It");

    engine.set_gender(Gender::Masculine);
    assert_eq!(engine.singular_noun("they"), "he");
    assert_eq!(engine.singular_noun("them"), "him");

    engine.set_gender(Gender::They);
    assert_eq!(engine.singular_noun("themselves"), "themself");
}

// =============================================================================
// Classical modes
// =============================================================================

#[test]
fn ancient_mode_uses_classical_plurals() {
    let engine = Engine::new();
    assert_eq!(engine.plural("formula"), "formulas");
    assert_eq!(engine.plural("cactus"), "cactuses");

    engine.set_classical(ClassicalMode::Ancient, true);
    assert_eq!(engine.plural("formula"), "formulae");
    assert_eq!(engine.plural("cactus"), "cacti");
}

#[test]
fn herd_names_and_persons_modes() {
    let engine = Engine::new();
    assert_eq!(engine.plural("bison"), "bisons");
    assert_eq!(engine.plural("Jones"), "Joneses");
    assert_eq!(engine.plural("person"), "people");

    engine.set_classical(ClassicalMode::Herd, true);
    engine.set_classical(ClassicalMode::Names, true);
    engine.set_classical(ClassicalMode::Persons, true);
    assert_eq!(engine.plural("bison"), "bison");
    assert_eq!(engine.plural("Jones"), "Jones");
    assert_eq!(engine.plural("person"), "persons");
}

#[test]
fn general_mode_enables_every_behavior() {
    let engine = Engine::new();
    engine.set_classical(ClassicalMode::General, true);
    assert!(engine.is_classical(ClassicalMode::Herd));
    assert!(!engine.is_classical_all());
    assert_eq!(engine.plural("bison"), "bison");
    assert_eq!(engine.plural("formula"), "formulae");

    engine.set_classical_all(true);
    assert!(engine.is_classical_all());
    engine.set_classical_all(false);
    assert!(!engine.is_classical(ClassicalMode::Herd));
}

// =============================================================================
// Counts
// =============================================================================

#[test]
fn counts_select_number() {
    let engine = Engine::new();
    assert_eq!(engine.plural_with_count("cat", 1), "cat");
    assert_eq!(engine.plural_with_count("cat", -1), "cat");
    assert_eq!(engine.plural_with_count("cat", 0), "cats");
    assert_eq!(engine.plural_with_count("cat", 2), "cats");
    assert_eq!(engine.singular_noun_with_count("cats", 1), "cat");
    assert_eq!(engine.singular_noun_with_count("cats", 5), "cats");
}

#[test]
fn zero_mode_treats_zero_as_singular() {
    let engine = Engine::new();
    engine.set_classical(ClassicalMode::Zero, true);
    assert_eq!(engine.plural_with_count("cat", 0), "cat");
    assert_eq!(engine.plural_with_count("cat", 2), "cats");
}

#[test]
fn default_count_applies_without_explicit_count() {
    let engine = Engine::new();
    assert_eq!(engine.num(Some(1)), "1");
    assert_eq!(engine.plural("cat"), "cat");
    assert_eq!(engine.singular_noun("cats"), "cat");
    assert_eq!(engine.num(None), "");
    assert_eq!(engine.plural("cat"), "cats");
}

// =============================================================================
// Custom nouns
// =============================================================================

#[test]
fn custom_nouns_override_rules() {
    let engine = Engine::new();
    engine.def_noun("VAX", "VAXen");
    assert_eq!(engine.plural("vax"), "vaxen");
    assert_eq!(engine.plural("VAX"), "VAXEN");
    assert_eq!(engine.singular("vaxen"), "vax");

    assert!(engine.undef_noun("vax"));
    assert!(!engine.undef_noun("vax"));
    assert_eq!(engine.plural("vax"), "vaxes");
}

#[test]
fn builtin_irregulars_can_be_removed_and_restored() {
    let engine = Engine::new();
    assert!(engine.undef_noun("child"));
    assert_eq!(engine.plural("child"), "childs");
    engine.reset_nouns();
    assert_eq!(engine.plural("child"), "children");
}
