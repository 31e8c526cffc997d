//! Shared inflect function table used by both the macro interpreter and the CLI.
//!
//! This crate centralizes function name/alias resolution and argument
//! signatures so that `Inflect(text)` macros and `inflect call` agree on what
//! every name means.

/// Canonical function identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FunctionId {
    Plural,
    PluralNoun,
    PluralVerb,
    PluralAdj,
    Singular,
    SingularNoun,
    An,
    PastTense,
    PresentParticiple,
    PastParticiple,
    FutureTense,
    IsParticiple,
    Comparative,
    Superlative,
    Adverb,
    Ordinal,
    OrdinalWord,
    NumberToWords,
    IntToRoman,
    RomanToInt,
    CurrencyToWords,
    Compare,
    CompareNouns,
    CompareVerbs,
    CompareAdjs,
    No,
    Num,
    Possessive,
    Humanize,
    Titleize,
    Tableize,
    Classify,
    ForeignKey,
    CamelCase,
    PascalCase,
    SnakeCase,
    KebabCase,
}

/// The kind of value a function parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A quoted string argument.
    Word,
    /// An integer argument.
    Integer,
    /// An integer or floating-point argument.
    Number,
}

impl ParamKind {
    /// Human-readable name used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            ParamKind::Word => "string",
            ParamKind::Integer => "integer",
            ParamKind::Number => "number",
        }
    }
}

/// Argument signature of a function: required parameters followed by
/// optional trailing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub required: &'static [ParamKind],
    pub optional: &'static [ParamKind],
}

impl Signature {
    /// Smallest accepted argument count.
    pub fn min_args(&self) -> usize {
        self.required.len()
    }

    /// Largest accepted argument count.
    pub fn max_args(&self) -> usize {
        self.required.len() + self.optional.len()
    }

    /// Whether `count` arguments satisfy this signature.
    pub fn accepts(&self, count: usize) -> bool {
        (self.min_args()..=self.max_args()).contains(&count)
    }

    /// Kind of the parameter at `position`, if any.
    pub fn param(&self, position: usize) -> Option<ParamKind> {
        self.required
            .iter()
            .chain(self.optional)
            .nth(position)
            .copied()
    }

    /// Renders the signature as `(string, integer?)`.
    pub fn render(&self) -> String {
        let params: Vec<String> = self
            .required
            .iter()
            .map(|kind| kind.describe().to_string())
            .chain(self.optional.iter().map(|kind| format!("{}?", kind.describe())))
            .collect();
        format!("({})", params.join(", "))
    }
}

const WORD: Signature = Signature {
    required: &[ParamKind::Word],
    optional: &[],
};
const WORD_COUNT: Signature = Signature {
    required: &[ParamKind::Word],
    optional: &[ParamKind::Integer],
};
const TWO_WORDS: Signature = Signature {
    required: &[ParamKind::Word, ParamKind::Word],
    optional: &[],
};
const INTEGER: Signature = Signature {
    required: &[ParamKind::Integer],
    optional: &[],
};
const OPTIONAL_INTEGER: Signature = Signature {
    required: &[],
    optional: &[ParamKind::Integer],
};
const AMOUNT_CODE: Signature = Signature {
    required: &[ParamKind::Number, ParamKind::Word],
    optional: &[],
};

impl FunctionId {
    /// Every function, in dispatch-table order.
    pub const ALL: &'static [FunctionId] = &[
        FunctionId::Plural,
        FunctionId::PluralNoun,
        FunctionId::PluralVerb,
        FunctionId::PluralAdj,
        FunctionId::Singular,
        FunctionId::SingularNoun,
        FunctionId::An,
        FunctionId::PastTense,
        FunctionId::PresentParticiple,
        FunctionId::PastParticiple,
        FunctionId::FutureTense,
        FunctionId::IsParticiple,
        FunctionId::Comparative,
        FunctionId::Superlative,
        FunctionId::Adverb,
        FunctionId::Ordinal,
        FunctionId::OrdinalWord,
        FunctionId::NumberToWords,
        FunctionId::IntToRoman,
        FunctionId::RomanToInt,
        FunctionId::CurrencyToWords,
        FunctionId::Compare,
        FunctionId::CompareNouns,
        FunctionId::CompareVerbs,
        FunctionId::CompareAdjs,
        FunctionId::No,
        FunctionId::Num,
        FunctionId::Possessive,
        FunctionId::Humanize,
        FunctionId::Titleize,
        FunctionId::Tableize,
        FunctionId::Classify,
        FunctionId::ForeignKey,
        FunctionId::CamelCase,
        FunctionId::PascalCase,
        FunctionId::SnakeCase,
        FunctionId::KebabCase,
    ];

    /// Canonical macro name.
    pub fn name(self) -> &'static str {
        match self {
            FunctionId::Plural => "plural",
            FunctionId::PluralNoun => "plural_noun",
            FunctionId::PluralVerb => "plural_verb",
            FunctionId::PluralAdj => "plural_adj",
            FunctionId::Singular => "singular",
            FunctionId::SingularNoun => "singular_noun",
            FunctionId::An => "an",
            FunctionId::PastTense => "past_tense",
            FunctionId::PresentParticiple => "present_participle",
            FunctionId::PastParticiple => "past_participle",
            FunctionId::FutureTense => "future_tense",
            FunctionId::IsParticiple => "is_participle",
            FunctionId::Comparative => "comparative",
            FunctionId::Superlative => "superlative",
            FunctionId::Adverb => "adverb",
            FunctionId::Ordinal => "ordinal",
            FunctionId::OrdinalWord => "ordinal_word",
            FunctionId::NumberToWords => "number_to_words",
            FunctionId::IntToRoman => "int_to_roman",
            FunctionId::RomanToInt => "roman_to_int",
            FunctionId::CurrencyToWords => "currency_to_words",
            FunctionId::Compare => "compare",
            FunctionId::CompareNouns => "compare_nouns",
            FunctionId::CompareVerbs => "compare_verbs",
            FunctionId::CompareAdjs => "compare_adjs",
            FunctionId::No => "no",
            FunctionId::Num => "num",
            FunctionId::Possessive => "possessive",
            FunctionId::Humanize => "humanize",
            FunctionId::Titleize => "titleize",
            FunctionId::Tableize => "tableize",
            FunctionId::Classify => "classify",
            FunctionId::ForeignKey => "foreign_key",
            FunctionId::CamelCase => "camel_case",
            FunctionId::PascalCase => "pascal_case",
            FunctionId::SnakeCase => "snake_case",
            FunctionId::KebabCase => "kebab_case",
        }
    }

    /// Argument signature.
    pub fn signature(self) -> Signature {
        match self {
            FunctionId::Plural
            | FunctionId::PluralNoun
            | FunctionId::PluralVerb
            | FunctionId::PluralAdj
            | FunctionId::Singular
            | FunctionId::SingularNoun
            | FunctionId::No => WORD_COUNT,
            FunctionId::Ordinal
            | FunctionId::OrdinalWord
            | FunctionId::NumberToWords
            | FunctionId::IntToRoman => INTEGER,
            FunctionId::Num => OPTIONAL_INTEGER,
            FunctionId::CurrencyToWords => AMOUNT_CODE,
            FunctionId::Compare
            | FunctionId::CompareNouns
            | FunctionId::CompareVerbs
            | FunctionId::CompareAdjs => TWO_WORDS,
            FunctionId::An
            | FunctionId::PastTense
            | FunctionId::PresentParticiple
            | FunctionId::PastParticiple
            | FunctionId::FutureTense
            | FunctionId::IsParticiple
            | FunctionId::Comparative
            | FunctionId::Superlative
            | FunctionId::Adverb
            | FunctionId::RomanToInt
            | FunctionId::Possessive
            | FunctionId::Humanize
            | FunctionId::Titleize
            | FunctionId::Tableize
            | FunctionId::Classify
            | FunctionId::ForeignKey
            | FunctionId::CamelCase
            | FunctionId::PascalCase
            | FunctionId::SnakeCase
            | FunctionId::KebabCase => WORD,
        }
    }
}

/// Resolve a macro name to a canonical function id.
///
/// Resolution order:
/// 1. Alias canonicalization
/// 2. Canonical name lookup
pub fn resolve_function(name: &str) -> Option<FunctionId> {
    let canonical = canonicalize_alias(name);
    FunctionId::ALL
        .iter()
        .find(|id| id.name() == canonical)
        .copied()
}

/// Accepted function names, including aliases.
///
/// Used for diagnostics and typo suggestions.
pub fn accepted_function_names() -> &'static [&'static str] {
    ACCEPTED_NAMES
}

/// Aliases that resolve to `id`.
pub fn aliases_for(id: FunctionId) -> Vec<&'static str> {
    ALIASES
        .iter()
        .filter(|(_, canonical)| *canonical == id.name())
        .map(|(alias, _)| *alias)
        .collect()
}

fn canonicalize_alias(name: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(name)
}

const ALIASES: &[(&str, &str)] = &[
    ("a", "an"),
    ("pluralize", "plural"),
    ("singularize", "singular"),
    ("past", "past_tense"),
    ("gerund", "present_participle"),
    ("future", "future_tense"),
    ("ordinalize", "ordinal"),
    ("roman", "int_to_roman"),
    ("titlecase", "titleize"),
];

const ACCEPTED_NAMES: &[&str] = &[
    "plural",
    "plural_noun",
    "plural_verb",
    "plural_adj",
    "singular",
    "singular_noun",
    "an",
    "past_tense",
    "present_participle",
    "past_participle",
    "future_tense",
    "is_participle",
    "comparative",
    "superlative",
    "adverb",
    "ordinal",
    "ordinal_word",
    "number_to_words",
    "int_to_roman",
    "roman_to_int",
    "currency_to_words",
    "compare",
    "compare_nouns",
    "compare_verbs",
    "compare_adjs",
    "no",
    "num",
    "possessive",
    "humanize",
    "titleize",
    "tableize",
    "classify",
    "foreign_key",
    "camel_case",
    "pascal_case",
    "snake_case",
    "kebab_case",
    "a",
    "pluralize",
    "singularize",
    "past",
    "gerund",
    "future",
    "ordinalize",
    "roman",
    "titlecase",
];
