//! Indefinite-article tables.

/// Word prefixes that begin with a silent `h`.
pub static SILENT_H_PREFIXES: &[&str] = &["heir", "honest", "honor", "honour", "hour"];

/// Letters whose spoken name begins with a vowel sound.
pub static VOWEL_SOUND_LETTERS: &[char] = &[
    'a', 'e', 'f', 'h', 'i', 'l', 'm', 'n', 'o', 'r', 's', 'x',
];

/// Lowercase abbreviations that are read letter by letter.
pub static LETTER_ABBREVIATIONS: &[&str] = &[
    "mpeg", "jpeg", "gif", "sql", "html", "xml", "fbi", "cia", "nsa",
];

/// Regex fragments for vowel-initial words that start with a consonant sound
/// ("eulogy", "one", "unicorn", "ewe").
pub static CONSONANT_SOUND_PREFIXES: &[&str] = &[
    r"eu",
    r"ew",
    r"one(?:[^r]|$)",
    r"once",
    r"ouija",
    r"uni(?:[^nmd]|mo)",
];

/// Regex fragment for `u` + consonant + vowel words read as "you-" ("usual",
/// "utopia", "ukulele").
pub static YOU_SOUND_PATTERN: &str = r"u[bcfghjkqrst][aeiou]";
