//! Adjective and adverb exception tables.

/// Irregular comparison (positive, comparative, superlative).
pub static IRREGULAR_COMPARISON: &[(&str, &str, &str)] = &[
    ("good", "better", "best"),
    ("well", "better", "best"),
    ("bad", "worse", "worst"),
    ("ill", "worse", "worst"),
    ("far", "farther", "farthest"),
    ("little", "less", "least"),
    ("much", "more", "most"),
    ("many", "more", "most"),
];

/// Two-syllable adjectives that take `-er`/`-est` even though they do not end
/// in `-y`.
pub static TWO_SYLLABLE_AFFIX: &[&str] = &[
    "able", "clever", "common", "cruel", "gentle", "handsome", "humble", "mellow", "narrow",
    "noble", "pleasant", "polite", "quiet", "shallow", "simple", "stupid", "subtle", "tender",
    "yellow",
];

/// Adverbs that do not follow the `-ly` rules.
pub static IRREGULAR_ADVERBS: &[(&str, &str)] = &[
    ("good", "well"),
    ("whole", "wholly"),
    ("true", "truly"),
    ("due", "duly"),
];

/// Flat adverbs, identical to their adjective.
pub static FLAT_ADVERBS: &[&str] = &[
    "fast", "hard", "late", "early", "straight", "high", "low", "near", "far", "well", "daily",
    "weekly", "monthly", "yearly", "hourly", "much", "little", "less", "more", "enough",
    "often", "alone", "long",
];

/// Adjectives in `-le` that keep the `e` before `-ly`.
pub static LE_KEEPS_E: &[&str] = &["sole", "pale", "stale", "male", "female", "vile", "agile"];

/// Short adjectives in consonant + `y` that add `-ly` without changing `y`.
pub static Y_KEEPS_Y: &[&str] = &["shy", "sly", "dry", "coy", "wry", "spry"];

/// Singular to plural determiners and demonstratives.
pub static PLURAL_ADJECTIVES: &[(&str, &str)] = &[
    ("a", "some"),
    ("an", "some"),
    ("this", "these"),
    ("that", "those"),
    ("my", "our"),
    ("your", "your"),
    ("his", "their"),
    ("her", "their"),
    ("its", "their"),
    ("their", "their"),
];
