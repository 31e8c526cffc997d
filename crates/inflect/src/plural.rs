//! CLDR plural category resolution for counts.
//!
//! English has two cardinal categories: "one" for 1 and -1, "other" for
//! everything else. The rules are built once per thread and reused.

use std::cell::RefCell;

use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

thread_local! {
    /// Per-thread English cardinal rules; `None` until first use or if the
    /// rules could not be built.
    static ENGLISH_RULES: RefCell<Option<PluralRules>> = const { RefCell::new(None) };
}

fn build_rules() -> Option<PluralRules> {
    PluralRules::try_new(locale!("en").into(), PluralRuleType::Cardinal.into()).ok()
}

/// CLDR cardinal category of `n` in English.
pub(crate) fn plural_category(n: i64) -> PluralCategory {
    ENGLISH_RULES.with_borrow_mut(|rules| {
        if rules.is_none() {
            *rules = build_rules();
        }
        match rules {
            Some(rules) => rules.category_for(n),
            None if n.unsigned_abs() == 1 => PluralCategory::One,
            None => PluralCategory::Other,
        }
    })
}

/// Whether a count of `n` takes the singular form.
///
/// ```
/// use inflect::is_singular_count;
///
/// assert!(is_singular_count(1));
/// assert!(is_singular_count(-1));
/// assert!(!is_singular_count(0));
/// assert!(!is_singular_count(2));
/// ```
pub fn is_singular_count(n: i64) -> bool {
    plural_category(n) == PluralCategory::One
}
