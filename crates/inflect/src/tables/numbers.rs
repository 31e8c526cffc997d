//! Number-word, ordinal and currency tables.

pub static ONES: &[&str] = &[
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

pub static TENS: &[&str] = &[
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Scale words for successive groups of three digits.
pub static SCALES: &[&str] = &[
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Cardinal words whose ordinal is irregular.
pub static IRREGULAR_ORDINALS: &[(&str, &str)] = &[
    ("one", "first"),
    ("two", "second"),
    ("three", "third"),
    ("five", "fifth"),
    ("eight", "eighth"),
    ("nine", "ninth"),
    ("twelve", "twelfth"),
];

/// Unit names for a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyUnits {
    pub major: &'static str,
    pub major_plural: &'static str,
    /// `None` for currencies without a minor unit in everyday use.
    pub minor: Option<(&'static str, &'static str)>,
}

/// ISO 4217 code to unit names.
pub static CURRENCIES: &[(&str, CurrencyUnits)] = &[
    (
        "USD",
        CurrencyUnits {
            major: "dollar",
            major_plural: "dollars",
            minor: Some(("cent", "cents")),
        },
    ),
    (
        "EUR",
        CurrencyUnits {
            major: "euro",
            major_plural: "euros",
            minor: Some(("cent", "cents")),
        },
    ),
    (
        "GBP",
        CurrencyUnits {
            major: "pound",
            major_plural: "pounds",
            minor: Some(("penny", "pence")),
        },
    ),
    (
        "JPY",
        CurrencyUnits {
            major: "yen",
            major_plural: "yen",
            minor: None,
        },
    ),
    (
        "CAD",
        CurrencyUnits {
            major: "Canadian dollar",
            major_plural: "Canadian dollars",
            minor: Some(("cent", "cents")),
        },
    ),
    (
        "AUD",
        CurrencyUnits {
            major: "Australian dollar",
            major_plural: "Australian dollars",
            minor: Some(("cent", "cents")),
        },
    ),
    (
        "CHF",
        CurrencyUnits {
            major: "franc",
            major_plural: "francs",
            minor: Some(("centime", "centimes")),
        },
    ),
    (
        "CNY",
        CurrencyUnits {
            major: "yuan",
            major_plural: "yuan",
            minor: Some(("fen", "fen")),
        },
    ),
    (
        "INR",
        CurrencyUnits {
            major: "rupee",
            major_plural: "rupees",
            minor: Some(("paisa", "paise")),
        },
    ),
    (
        "MXN",
        CurrencyUnits {
            major: "peso",
            major_plural: "pesos",
            minor: Some(("centavo", "centavos")),
        },
    ),
];
