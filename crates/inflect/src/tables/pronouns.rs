//! Personal pronoun tables.

/// Singular to plural personal pronouns (nominative, accusative, possessive,
/// reflexive).
pub static PLURAL_PRONOUNS: &[(&str, &str)] = &[
    ("i", "we"),
    ("me", "us"),
    ("mine", "ours"),
    ("myself", "ourselves"),
    ("you", "you"),
    ("yours", "yours"),
    ("yourself", "yourselves"),
    ("thou", "you"),
    ("thee", "you"),
    ("thine", "yours"),
    ("thyself", "yourselves"),
    ("he", "they"),
    ("she", "they"),
    ("it", "they"),
    ("him", "them"),
    ("her", "them"),
    ("his", "theirs"),
    ("hers", "theirs"),
    ("its", "theirs"),
    ("himself", "themselves"),
    ("herself", "themselves"),
    ("itself", "themselves"),
    ("themself", "themselves"),
    ("oneself", "oneselves"),
];

/// Plural to singular personal pronouns that do not depend on gender.
pub static SINGULAR_PRONOUNS: &[(&str, &str)] = &[
    ("we", "i"),
    ("us", "me"),
    ("ours", "mine"),
    ("ourselves", "myself"),
    ("you", "you"),
    ("yours", "yours"),
    ("yourselves", "yourself"),
    ("oneselves", "oneself"),
];

/// Third-person plural pronouns resolved through the engine's gender, as
/// (plural, masculine, feminine, neuter, singular they).
pub static GENDERED_PRONOUNS: &[(&str, [&str; 4])] = &[
    ("they", ["he", "she", "it", "they"]),
    ("them", ["him", "her", "it", "them"]),
    ("theirs", ["his", "hers", "its", "theirs"]),
    ("themselves", ["himself", "herself", "itself", "themself"]),
    ("their", ["his", "her", "its", "their"]),
];
