//! Noun exception tables.
//!
//! All keys are lowercase. The forward tables are the source of truth; any
//! reverse direction is derived once at first use.

/// Built-in irregular plurals (singular, plural).
///
/// Every plural appears once so the derived reverse map is a bijection.
pub static IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("child", "children"),
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("ox", "oxen"),
    ("die", "dice"),
    ("quiz", "quizzes"),
    ("analysis", "analyses"),
    ("axis", "axes"),
    ("basis", "bases"),
    ("crisis", "crises"),
    ("diagnosis", "diagnoses"),
    ("ellipsis", "ellipses"),
    ("hypothesis", "hypotheses"),
    ("oasis", "oases"),
    ("paralysis", "paralyses"),
    ("parenthesis", "parentheses"),
    ("synopsis", "synopses"),
    ("synthesis", "syntheses"),
    ("thesis", "theses"),
    ("emphasis", "emphases"),
    ("prognosis", "prognoses"),
    ("phenomenon", "phenomena"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("bacterium", "bacteria"),
    ("curriculum", "curricula"),
    ("medium", "media"),
    ("memorandum", "memoranda"),
    ("stratum", "strata"),
    ("erratum", "errata"),
    ("alumnus", "alumni"),
    ("alumna", "alumnae"),
    ("stimulus", "stimuli"),
    ("fungus", "fungi"),
    ("nucleus", "nuclei"),
    ("radius", "radii"),
    ("syllabus", "syllabi"),
    ("larva", "larvae"),
    ("alga", "algae"),
    ("vertebra", "vertebrae"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
    ("genus", "genera"),
    ("corpus", "corpora"),
    ("passerby", "passersby"),
];

/// Classical (Latin/Greek/French) plurals, used only in ancient mode.
///
/// None of these plurals collide with the irregular table.
pub static CLASSICAL_PLURALS: &[(&str, &str)] = &[
    ("formula", "formulae"),
    ("antenna", "antennae"),
    ("nebula", "nebulae"),
    ("supernova", "supernovae"),
    ("persona", "personae"),
    ("cactus", "cacti"),
    ("focus", "foci"),
    ("octopus", "octopodes"),
    ("hippopotamus", "hippopotami"),
    ("terminus", "termini"),
    ("genius", "genii"),
    ("index", "indices"),
    ("appendix", "appendices"),
    ("vortex", "vortices"),
    ("apex", "apices"),
    ("cortex", "cortices"),
    ("codex", "codices"),
    ("aquarium", "aquaria"),
    ("millennium", "millennia"),
    ("symposium", "symposia"),
    ("forum", "fora"),
    ("stadium", "stadia"),
    ("consortium", "consortia"),
    ("referendum", "referenda"),
    ("ultimatum", "ultimata"),
    ("automaton", "automata"),
    ("schema", "schemata"),
    ("stigma", "stigmata"),
    ("dogma", "dogmata"),
    ("lemma", "lemmata"),
    ("soprano", "soprani"),
    ("virtuoso", "virtuosi"),
    ("libretto", "libretti"),
    ("tempo", "tempi"),
    ("cherub", "cherubim"),
    ("seraph", "seraphim"),
    ("beau", "beaux"),
    ("bureau", "bureaux"),
    ("chateau", "chateaux"),
    ("plateau", "plateaux"),
    ("tableau", "tableaux"),
];

/// Nouns whose plural equals the singular.
pub static UNCHANGED: &[&str] = &[
    "sheep",
    "fish",
    "deer",
    "moose",
    "series",
    "species",
    "aircraft",
    "spacecraft",
    "hovercraft",
    "offspring",
    "swine",
    "salmon",
    "trout",
    "cod",
    "shrimp",
    "news",
    "equipment",
    "information",
    "rice",
    "money",
    "furniture",
    "luggage",
    "baggage",
    "advice",
    "homework",
    "knowledge",
    "software",
    "hardware",
    "traffic",
    "scissors",
    "trousers",
    "pants",
    "shorts",
    "jeans",
    "headquarters",
    "means",
    "corps",
    "chassis",
    "police",
    "cattle",
    "mathematics",
    "physics",
    "economics",
    "athletics",
    "measles",
    "mumps",
    "innings",
    "barracks",
    "gallows",
];

/// Endings of compound nouns that stay unchanged ("goldfish", "reindeer").
pub static UNCHANGED_SUFFIXES: &[&str] = &["fish", "sheep", "deer", "craft", "ware"];

/// Herd animals, unchanged in classical herd mode.
pub static HERD: &[&str] = &[
    "antelope",
    "bison",
    "buffalo",
    "caribou",
    "eland",
    "elk",
    "grouse",
    "haddock",
    "hake",
    "halibut",
    "herring",
    "mackerel",
    "pike",
    "rhinoceros",
    "wildebeest",
    "zebra",
];

/// Words ending in `-man` that take a plain `-s`.
pub static MAN_EXCEPTIONS: &[&str] = &[
    "german",
    "roman",
    "norman",
    "talisman",
    "shaman",
    "caiman",
    "cayman",
    "ottoman",
    "walkman",
    "desman",
    "doberman",
    "oman",
];

/// Singular words that end in `-men` and must not be read as `-man` plurals.
pub static MEN_SINGULARS: &[&str] = &[
    "abdomen", "amen", "hymen", "omen", "regimen", "semen", "specimen", "stamen", "acumen",
    "albumen", "bitumen", "cerumen", "lumen", "foramen", "rumen", "yemen",
];

/// Words ending in `-ch` pronounced `k`, which take a plain `-s`.
pub static HARD_CH: &[&str] = &[
    "stomach",
    "monarch",
    "epoch",
    "patriarch",
    "matriarch",
    "oligarch",
    "eunuch",
    "czech",
    "loch",
    "tech",
];

/// Nouns ending in `-f`/`-fe` that take `-ves`. Entries of four letters or
/// more also match as compound endings (`bookshelf`).
pub static F_TO_VES: &[&str] = &[
    "calf", "elf", "half", "hoof", "knife", "leaf", "life", "loaf", "scarf", "self", "sheaf",
    "shelf", "thief", "wife", "wolf", "wharf",
];

/// Nouns ending in a single `z` whose plural doubles it (`fezzes`).
pub static SINGLE_Z: &[&str] = &["fez", "whiz", "biz", "coz"];

/// Nouns ending in consonant + `o` that take a plain `-s`.
pub static O_TAKES_S: &[&str] = &[
    "alto",
    "auto",
    "avocado",
    "basso",
    "burrito",
    "canto",
    "casino",
    "cello",
    "combo",
    "disco",
    "dynamo",
    "ego",
    "espresso",
    "euro",
    "gecko",
    "ghetto",
    "halo",
    "inferno",
    "kilo",
    "kimono",
    "lasso",
    "libido",
    "lingo",
    "logo",
    "macro",
    "memo",
    "metro",
    "photo",
    "piano",
    "poncho",
    "pro",
    "silo",
    "solo",
    "soprano",
    "tempo",
    "typo",
    "zero",
];

/// Singular nouns ending in `-oe` (their plural is `-oes` but not `-o` + `es`).
pub static OE_WORDS: &[&str] = &[
    "shoe",
    "toe",
    "canoe",
    "foe",
    "oboe",
    "hoe",
    "floe",
    "roe",
    "sloe",
    "woe",
    "throe",
    "mistletoe",
    "felloe",
];

/// Singular nouns ending in `-ie` (their plural is `-ies` but not `-y` + `ies`).
pub static IE_WORDS: &[&str] = &[
    "movie",
    "cookie",
    "pie",
    "tie",
    "lie",
    "zombie",
    "calorie",
    "prairie",
    "rookie",
    "hippie",
    "brownie",
    "goalie",
    "genie",
    "aussie",
    "selfie",
    "smoothie",
    "hoodie",
    "budgie",
    "eerie",
    "auntie",
    "sortie",
    "specie",
    "necktie",
    "pixie",
    "collie",
    "birdie",
];

/// Singular nouns ending in `-che` (their plural `-ches` strips only `s`).
pub static CHE_WORDS: &[&str] = &[
    "ache",
    "cache",
    "niche",
    "avalanche",
    "moustache",
    "mustache",
    "panache",
    "cliche",
    "creche",
    "microfiche",
    "quiche",
    "attache",
    "psyche",
    "douche",
    "gouache",
    "tranche",
];

/// Singular nouns ending in `-use` (their plural `-uses` strips only `s`).
pub static USE_WORDS: &[&str] = &[
    "abuse", "accuse", "amuse", "blouse", "cause", "clause", "douse", "excuse", "fuse", "house",
    "muse", "pause", "peruse", "recluse", "refuse", "ruse", "spouse", "use", "carouse",
];

/// Singular nouns ending in `-s` that are not caught by the `-ss`, `-us`,
/// `-is` endings.
pub static S_SINGULARS: &[&str] = &[
    "gas", "alias", "atlas", "bias", "canvas", "lens", "pancreas", "plus", "yes", "dais", "bus",
];

/// Nationality words ending in `-ese` that still pluralize regularly.
pub static ESE_EXCEPTIONS: &[&str] = &["cheese", "these", "obese", "diocese", "manganese"];

/// Prepositions that mark the head of a compound noun.
pub static COMPOUND_PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "among", "around", "at", "athwart", "before", "behind",
    "below", "beneath", "beside", "besides", "between", "betwixt", "beyond", "but", "by", "de",
    "du", "during", "except", "for", "from", "in", "into", "near", "of", "off", "on", "onto",
    "out", "over", "since", "till", "to", "under", "until", "unto", "upon", "with",
];
