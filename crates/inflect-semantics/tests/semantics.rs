use std::collections::HashSet;

use inflect_semantics::{
    FunctionId, ParamKind, accepted_function_names, aliases_for, resolve_function,
};

#[test]
fn alias_resolution_matrix() {
    assert_eq!(resolve_function("a"), Some(FunctionId::An));
    assert_eq!(resolve_function("pluralize"), Some(FunctionId::Plural));
    assert_eq!(resolve_function("singularize"), Some(FunctionId::Singular));
    assert_eq!(resolve_function("past"), Some(FunctionId::PastTense));
    assert_eq!(
        resolve_function("gerund"),
        Some(FunctionId::PresentParticiple)
    );
    assert_eq!(resolve_function("future"), Some(FunctionId::FutureTense));
    assert_eq!(resolve_function("ordinalize"), Some(FunctionId::Ordinal));
    assert_eq!(resolve_function("roman"), Some(FunctionId::IntToRoman));
    assert_eq!(resolve_function("titlecase"), Some(FunctionId::Titleize));
}

#[test]
fn canonical_resolution_covers_all_function_ids() {
    for id in FunctionId::ALL {
        assert_eq!(resolve_function(id.name()), Some(*id), "{}", id.name());
    }
}

#[test]
fn unknown_names_do_not_resolve() {
    assert_eq!(resolve_function("unknown"), None);
    assert_eq!(resolve_function("Plural"), None);
    assert_eq!(resolve_function(""), None);
}

#[test]
fn accepted_names_resolve_and_are_unique() {
    let names = accepted_function_names();
    let unique: HashSet<&str> = names.iter().copied().collect();
    assert_eq!(unique.len(), names.len());
    for name in names {
        assert!(resolve_function(name).is_some(), "{name} should resolve");
    }
    for id in FunctionId::ALL {
        assert!(names.contains(&id.name()), "{} missing", id.name());
    }
}

#[test]
fn aliases_are_listed_per_function() {
    assert_eq!(aliases_for(FunctionId::An), vec!["a"]);
    assert!(aliases_for(FunctionId::PluralNoun).is_empty());
}

// =============================================================================
// Signatures
// =============================================================================

#[test]
fn count_functions_accept_optional_integer() {
    let signature = FunctionId::Plural.signature();
    assert!(!signature.accepts(0));
    assert!(signature.accepts(1));
    assert!(signature.accepts(2));
    assert!(!signature.accepts(3));
    assert_eq!(signature.param(0), Some(ParamKind::Word));
    assert_eq!(signature.param(1), Some(ParamKind::Integer));
    assert_eq!(signature.param(2), None);
}

#[test]
fn signatures_render_with_optional_marker() {
    assert_eq!(FunctionId::Plural.signature().render(), "(string, integer?)");
    assert_eq!(
        FunctionId::CurrencyToWords.signature().render(),
        "(number, string)"
    );
    assert_eq!(FunctionId::Num.signature().render(), "(integer?)");
    assert_eq!(FunctionId::Compare.signature().render(), "(string, string)");
}
