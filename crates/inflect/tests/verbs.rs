//! Integration tests for verb agreement, tenses and participles.

use inflect::Engine;

// =============================================================================
// Tenses
// =============================================================================

#[test]
fn past_tense_forms() {
    let engine = Engine::new();
    let cases = [
        ("walk", "walked"),
        ("bake", "baked"),
        ("try", "tried"),
        ("play", "played"),
        ("stop", "stopped"),
        ("prefer", "preferred"),
        ("visit", "visited"),
        ("panic", "panicked"),
        ("go", "went"),
        ("write", "wrote"),
        ("understand", "understood"),
        ("rebuild", "rebuilt"),
    ];
    for (verb, past) in cases {
        assert_eq!(engine.past_tense(verb), past, "past tense of {verb}");
    }
}

#[test]
fn past_participles() {
    let engine = Engine::new();
    assert_eq!(engine.past_participle("write"), "written");
    assert_eq!(engine.past_participle("go"), "gone");
    assert_eq!(engine.past_participle("bring"), "brought");
    assert_eq!(engine.past_participle("walk"), "walked");
    assert_eq!(engine.past_participle("undertake"), "undertaken");
}

#[test]
fn present_participles() {
    let engine = Engine::new();
    let cases = [
        ("run", "running"),
        ("make", "making"),
        ("die", "dying"),
        ("see", "seeing"),
        ("hoe", "hoeing"),
        ("panic", "panicking"),
        ("be", "being"),
        ("sing", "singing"),
        ("visit", "visiting"),
        ("prefer", "preferring"),
        ("running", "running"),
    ];
    for (verb, participle) in cases {
        assert_eq!(engine.present_participle(verb), participle, "participle of {verb}");
    }
}

#[test]
fn future_tense_prefixes_will() {
    let engine = Engine::new();
    assert_eq!(engine.future_tense("go"), "will go");
    assert_eq!(engine.future_tense("Go"), "Will go");
    assert_eq!(engine.future_tense("GO"), "WILL GO");
    assert_eq!(engine.future_tense(""), "");
}

#[test]
fn tenses_match_case_and_keep_the_rest_of_the_phrase() {
    let engine = Engine::new();
    assert_eq!(engine.past_tense("Go"), "Went");
    assert_eq!(engine.past_tense("WALK"), "WALKED");
    assert_eq!(engine.past_tense("give up"), "gave up");
    assert_eq!(engine.present_participle("run away"), "running away");
}

#[test]
fn participle_detection() {
    let engine = Engine::new();
    for word in ["running", "walked", "written", "gone", "Baked"] {
        assert!(engine.is_participle(word), "{word} is a participle");
    }
    for word in ["walk", "sing", "need", "bed", "", "hundred"] {
        assert!(!engine.is_participle(word), "{word} is not a participle");
    }
}

// =============================================================================
// Agreement
// =============================================================================

#[test]
fn plural_verbs() {
    let engine = Engine::new();
    let cases = [
        ("is", "are"),
        ("was", "were"),
        ("has", "have"),
        ("doesn't", "don't"),
        ("watches", "watch"),
        ("tries", "try"),
        ("runs", "run"),
        ("can", "can"),
        ("run", "run"),
        ("Is", "Are"),
        ("is not", "are not"),
    ];
    for (singular, plural) in cases {
        assert_eq!(engine.plural_verb(singular), plural, "plural of {singular}");
    }
}

#[test]
fn singular_verbs() {
    let engine = Engine::new();
    let cases = [
        ("are", "is"),
        ("were", "was"),
        ("have", "has"),
        ("do", "does"),
        ("watch", "watches"),
        ("try", "tries"),
        ("run", "runs"),
        ("go", "goes"),
        ("walked", "walked"),
    ];
    for (plural, singular) in cases {
        assert_eq!(engine.singular_verb(plural), singular, "singular of {plural}");
    }
}

#[test]
fn plural_verb_with_count() {
    let engine = Engine::new();
    assert_eq!(engine.plural_verb_with_count("is", 1), "is");
    assert_eq!(engine.plural_verb_with_count("is", 2), "are");
    assert_eq!(engine.plural_verb_with_count("is", 0), "are");
}

#[test]
fn custom_verbs() {
    let engine = Engine::new();
    engine.def_verb("quacks", "quack-quack");
    assert_eq!(engine.plural_verb("quacks"), "quack-quack");
    assert_eq!(engine.singular_verb("quack-quack"), "quacks");
    assert!(engine.undef_verb("quacks"));
    assert_eq!(engine.plural_verb("quacks"), "quack");

    engine.def_verb("is", "be");
    engine.reset_verbs();
    assert_eq!(engine.plural_verb("is"), "are");
}
