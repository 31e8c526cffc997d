//! Currency amounts in words.

use crate::numbers::words::number_to_words;
use crate::tables::CURRENCY;
use crate::tables::numbers::CurrencyUnits;

/// Spells out a monetary amount.
///
/// The amount is rounded to the currency's smallest unit. Unknown codes
/// spell the rounded whole amount followed by the code.
///
/// ```
/// assert_eq!(
///     inflect::currency_to_words(123.45, "USD"),
///     "one hundred twenty-three dollars and forty-five cents"
/// );
/// assert_eq!(inflect::currency_to_words(1.0, "gbp"), "one pound");
/// assert_eq!(inflect::currency_to_words(5.0, "XYZ"), "five XYZ");
/// ```
pub fn currency_to_words(amount: f64, code: &str) -> String {
    let code = code.trim().to_uppercase();
    let negative = amount < 0.0;
    let words = match CURRENCY.get(code.as_str()) {
        Some(units) => unit_words(amount.abs(), units),
        None => format!("{} {code}", whole_words(amount.abs().round() as u64)),
    };
    if negative && !words.starts_with("zero") {
        format!("negative {words}")
    } else {
        words
    }
}

fn unit_words(amount: f64, units: &CurrencyUnits) -> String {
    let Some((minor_singular, minor_plural)) = units.minor else {
        let major = amount.round() as u64;
        return counted(major, units.major, units.major_plural);
    };
    let cents = (amount * 100.0).round() as u64;
    let (major, minor) = (cents.div_euclid(100), cents.rem_euclid(100));
    let major_words = counted(major, units.major, units.major_plural);
    match (major, minor) {
        (_, 0) => major_words,
        (0, _) => counted(minor, minor_singular, minor_plural),
        _ => format!(
            "{major_words} and {}",
            counted(minor, minor_singular, minor_plural)
        ),
    }
}

fn counted(count: u64, singular: &str, plural: &str) -> String {
    let unit = if count == 1 { singular } else { plural };
    format!("{} {unit}", whole_words(count))
}

fn whole_words(count: u64) -> String {
    number_to_words(i64::try_from(count).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn major_and_minor_units() {
        assert_eq!(currency_to_words(0.0, "USD"), "zero dollars");
        assert_eq!(currency_to_words(1.0, "USD"), "one dollar");
        assert_eq!(currency_to_words(0.01, "USD"), "one cent");
        assert_eq!(currency_to_words(0.5, "EUR"), "fifty cents");
        assert_eq!(currency_to_words(2.01, "GBP"), "two pounds and one penny");
        assert_eq!(currency_to_words(3.5, "GBP"), "three pounds and fifty pence");
    }

    #[test]
    fn rounding_and_sign() {
        assert_eq!(currency_to_words(1.999, "USD"), "two dollars");
        assert_eq!(
            currency_to_words(1234.6, "JPY"),
            "one thousand two hundred thirty-five yen"
        );
        assert_eq!(
            currency_to_words(-2.5, "usd"),
            "negative two dollars and fifty cents"
        );
    }
}
