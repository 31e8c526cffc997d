//! Integration tests for adjectives: agreement, comparison and adverbs.

use inflect::{Engine, Gender};

// =============================================================================
// Comparison
// =============================================================================

#[test]
fn comparatives() {
    let engine = Engine::new();
    let cases = [
        ("big", "bigger"),
        ("large", "larger"),
        ("happy", "happier"),
        ("small", "smaller"),
        ("clever", "cleverer"),
        ("beautiful", "more beautiful"),
        ("famous", "more famous"),
        ("good", "better"),
        ("bad", "worse"),
    ];
    for (positive, comparative) in cases {
        assert_eq!(engine.comparative(positive), comparative, "comparative of {positive}");
    }
}

#[test]
fn superlatives() {
    let engine = Engine::new();
    assert_eq!(engine.superlative("big"), "biggest");
    assert_eq!(engine.superlative("happy"), "happiest");
    assert_eq!(engine.superlative("good"), "best");
    assert_eq!(engine.superlative("far"), "farthest");
    assert_eq!(engine.superlative("famous"), "most famous");
}

#[test]
fn comparison_matches_case() {
    let engine = Engine::new();
    assert_eq!(engine.comparative("Big"), "Bigger");
    assert_eq!(engine.comparative("BIG"), "BIGGER");
    assert_eq!(engine.comparative("Beautiful"), "More beautiful");
    assert_eq!(engine.superlative("BEAUTIFUL"), "MOST BEAUTIFUL");
    assert_eq!(engine.comparative(""), "");
}

// =============================================================================
// Adverbs
// =============================================================================

#[test]
fn adverbs() {
    let engine = Engine::new();
    let cases = [
        ("quick", "quickly"),
        ("happy", "happily"),
        ("basic", "basically"),
        ("public", "publicly"),
        ("full", "fully"),
        ("true", "truly"),
        ("simple", "simply"),
        ("sole", "solely"),
        ("shy", "shyly"),
        ("good", "well"),
        ("fast", "fast"),
        ("Quick", "Quickly"),
    ];
    for (adjective, adverb) in cases {
        assert_eq!(engine.adverb(adjective), adverb, "adverb of {adjective}");
    }
}

// =============================================================================
// Agreement
// =============================================================================

#[test]
fn plural_adjectives() {
    let engine = Engine::new();
    assert_eq!(engine.plural_adj("this"), "these");
    assert_eq!(engine.plural_adj("that"), "those");
    assert_eq!(engine.plural_adj("a"), "some");
    assert_eq!(engine.plural_adj("my"), "our");
    assert_eq!(engine.plural_adj("her"), "their");
    assert_eq!(engine.plural_adj("cat's"), "cats'");
    assert_eq!(engine.plural_adj("child's"), "children's");
    assert_eq!(engine.plural_adj("red"), "red");
    assert_eq!(engine.plural_adj("This"), "These");
}

#[test]
fn singular_adjectives() {
    let engine = Engine::new();
    assert_eq!(engine.singular_adj("these"), "this");
    assert_eq!(engine.singular_adj("some"), "a");
    assert_eq!(engine.singular_adj("cats'"), "cat's");
    assert_eq!(engine.singular_adj("children's"), "child's");
    assert_eq!(engine.singular_adj("their"), "its");

    engine.set_gender(Gender::Feminine);
    assert_eq!(engine.singular_adj("their"), "her");
}

#[test]
fn plural_adj_with_count() {
    let engine = Engine::new();
    assert_eq!(engine.plural_adj_with_count("this", 1), "this");
    assert_eq!(engine.plural_adj_with_count("this", 3), "these");
}

#[test]
fn custom_adjectives() {
    let engine = Engine::new();
    engine.def_adj("hir", "their");
    assert_eq!(engine.plural_adj("hir"), "their");
    assert!(engine.undef_adj("hir"));
    assert!(!engine.undef_adj("hir"));
    assert_eq!(engine.plural_adj("hir"), "hir");
}
