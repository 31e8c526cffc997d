//! Verb exception tables.

/// Irregular verbs whose past tense and past participle coincide
/// (base, past).
pub static SAME_PAST_PARTICIPLE: &[(&str, &str)] = &[
    ("bend", "bent"),
    ("bet", "bet"),
    ("bid", "bid"),
    ("bind", "bound"),
    ("bleed", "bled"),
    ("breed", "bred"),
    ("bring", "brought"),
    ("broadcast", "broadcast"),
    ("build", "built"),
    ("burst", "burst"),
    ("buy", "bought"),
    ("cast", "cast"),
    ("catch", "caught"),
    ("cling", "clung"),
    ("cost", "cost"),
    ("creep", "crept"),
    ("cut", "cut"),
    ("deal", "dealt"),
    ("dig", "dug"),
    ("feed", "fed"),
    ("feel", "felt"),
    ("fight", "fought"),
    ("find", "found"),
    ("flee", "fled"),
    ("fling", "flung"),
    ("forecast", "forecast"),
    ("get", "got"),
    ("grind", "ground"),
    ("hang", "hung"),
    ("has", "had"),
    ("have", "had"),
    ("hear", "heard"),
    ("hit", "hit"),
    ("hold", "held"),
    ("hurt", "hurt"),
    ("keep", "kept"),
    ("kneel", "knelt"),
    ("lay", "laid"),
    ("relay", "relayed"),
    ("lead", "led"),
    ("leave", "left"),
    ("lend", "lent"),
    ("let", "let"),
    ("light", "lit"),
    ("lose", "lost"),
    ("make", "made"),
    ("mean", "meant"),
    ("meet", "met"),
    ("pay", "paid"),
    ("put", "put"),
    ("quit", "quit"),
    ("read", "read"),
    ("rid", "rid"),
    ("say", "said"),
    ("seek", "sought"),
    ("sell", "sold"),
    ("send", "sent"),
    ("set", "set"),
    ("shine", "shone"),
    ("shoot", "shot"),
    ("shut", "shut"),
    ("sit", "sat"),
    ("sleep", "slept"),
    ("slide", "slid"),
    ("slit", "slit"),
    ("spend", "spent"),
    ("spin", "spun"),
    ("split", "split"),
    ("spread", "spread"),
    ("stand", "stood"),
    ("stick", "stuck"),
    ("sting", "stung"),
    ("strike", "struck"),
    ("sweep", "swept"),
    ("swing", "swung"),
    ("teach", "taught"),
    ("tell", "told"),
    ("think", "thought"),
    ("thrust", "thrust"),
    ("understand", "understood"),
    ("upset", "upset"),
    ("weep", "wept"),
    ("win", "won"),
    ("wind", "wound"),
];

/// Irregular verbs whose past tense and past participle differ
/// (base, past, participle).
pub static DIFFERENT_PAST_PARTICIPLE: &[(&str, &str, &str)] = &[
    ("am", "was", "been"),
    ("are", "were", "been"),
    ("arise", "arose", "arisen"),
    ("awake", "awoke", "awoken"),
    ("be", "was", "been"),
    ("bear", "bore", "borne"),
    ("beat", "beat", "beaten"),
    ("become", "became", "become"),
    ("begin", "began", "begun"),
    ("bite", "bit", "bitten"),
    ("blow", "blew", "blown"),
    ("break", "broke", "broken"),
    ("choose", "chose", "chosen"),
    ("come", "came", "come"),
    ("do", "did", "done"),
    ("does", "did", "done"),
    ("draw", "drew", "drawn"),
    ("drink", "drank", "drunk"),
    ("drive", "drove", "driven"),
    ("eat", "ate", "eaten"),
    ("fall", "fell", "fallen"),
    ("fly", "flew", "flown"),
    ("forbid", "forbade", "forbidden"),
    ("forget", "forgot", "forgotten"),
    ("forgive", "forgave", "forgiven"),
    ("freeze", "froze", "frozen"),
    ("give", "gave", "given"),
    ("go", "went", "gone"),
    ("goes", "went", "gone"),
    ("grow", "grew", "grown"),
    ("hide", "hid", "hidden"),
    ("is", "was", "been"),
    ("know", "knew", "known"),
    ("lie", "lay", "lain"),
    ("mistake", "mistook", "mistaken"),
    ("mow", "mowed", "mown"),
    ("overcome", "overcame", "overcome"),
    ("prove", "proved", "proven"),
    ("ride", "rode", "ridden"),
    ("ring", "rang", "rung"),
    ("rise", "rose", "risen"),
    ("run", "ran", "run"),
    ("see", "saw", "seen"),
    ("sew", "sewed", "sewn"),
    ("shake", "shook", "shaken"),
    ("show", "showed", "shown"),
    ("shrink", "shrank", "shrunk"),
    ("sing", "sang", "sung"),
    ("sink", "sank", "sunk"),
    ("sow", "sowed", "sown"),
    ("speak", "spoke", "spoken"),
    ("spring", "sprang", "sprung"),
    ("steal", "stole", "stolen"),
    ("stink", "stank", "stunk"),
    ("stride", "strode", "stridden"),
    ("strive", "strove", "striven"),
    ("swear", "swore", "sworn"),
    ("swim", "swam", "swum"),
    ("take", "took", "taken"),
    ("tear", "tore", "torn"),
    ("throw", "threw", "thrown"),
    ("tread", "trod", "trodden"),
    ("undertake", "undertook", "undertaken"),
    ("wake", "woke", "woken"),
    ("wear", "wore", "worn"),
    ("weave", "wove", "woven"),
    ("withdraw", "withdrew", "withdrawn"),
    ("write", "wrote", "written"),
];

/// Prefixes under which an irregular verb keeps its forms ("understand",
/// "overcome", "rebuild").
pub static IRREGULAR_PREFIXES: &[&str] = &["under", "over", "with", "out", "mis", "un", "up", "re"];

/// Present participles that the suffix rules would get wrong.
pub static IRREGULAR_PRESENT_PARTICIPLES: &[(&str, &str)] = &[
    ("be", "being"),
    ("singe", "singeing"),
    ("swinge", "swingeing"),
    ("tinge", "tingeing"),
    ("age", "ageing"),
];

/// Two-syllable verbs stressed on the final syllable, which double their
/// final consonant like monosyllables do.
pub static STRESSED_FINAL_SYLLABLE: &[&str] = &[
    "abhor", "acquit", "admit", "annul", "befit", "commit", "compel", "confer", "control",
    "defer", "deter", "dispel", "emit", "equip", "excel", "expel", "incur", "infer", "occur",
    "omit", "outwit", "patrol", "permit", "prefer", "propel", "rebel", "recur", "refer",
    "regret", "repel", "submit", "transfer", "transmit", "unpin",
];

/// Verbs ending in `-c` that take a plain suffix (no inserted `k`).
pub static C_PLAIN: &[&str] = &["arc", "sync", "disc", "spec", "zinc"];

/// Words ending in `-ed` that are not past participles.
pub static NON_PARTICIPLE_ED: &[&str] = &[
    "bed", "bleed", "breed", "creed", "deed", "exceed", "feed", "fled", "greed", "heed",
    "hundred", "kindred", "naked", "need", "proceed", "red", "reed", "sacred", "seed", "shed",
    "sled", "speed", "steed", "succeed", "weed", "wicked", "wretched",
];

/// Singular to plural auxiliary and irregular verb forms.
pub static PLURAL_VERBS: &[(&str, &str)] = &[
    ("is", "are"),
    ("am", "are"),
    ("was", "were"),
    ("has", "have"),
    ("does", "do"),
    ("goes", "go"),
    ("isn't", "aren't"),
    ("wasn't", "weren't"),
    ("hasn't", "haven't"),
    ("doesn't", "don't"),
];

/// Verbs whose form never changes with number (modals and past tenses that
/// end in `-s`).
pub static INVARIANT_VERBS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would", "ought",
    "can't", "couldn't", "mustn't", "shan't", "shouldn't", "won't", "wouldn't", "had", "did",
    "were", "are", "have", "do", "go",
];
