//! Roman numerals.

use thiserror::Error;

/// Error parsing a Roman numeral.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RomanError {
    #[error("empty roman numeral")]
    Empty,

    #[error("invalid roman numeral character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("malformed roman numeral '{numeral}'")]
    Malformed { numeral: String },
}

static NUMERALS: &[(i64, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Canonical Roman numeral for `1..=3999`; an empty string otherwise.
///
/// ```
/// assert_eq!(inflect::int_to_roman(1994), "MCMXCIV");
/// assert_eq!(inflect::int_to_roman(0), "");
/// ```
pub fn int_to_roman(number: i64) -> String {
    if !(1..=3999).contains(&number) {
        return String::new();
    }
    let mut remaining = number;
    let mut numeral = String::new();
    for &(value, symbol) in NUMERALS {
        while remaining >= value {
            numeral.push_str(symbol);
            remaining -= value;
        }
    }
    numeral
}

/// Parses a canonical Roman numeral, ignoring case and surrounding
/// whitespace.
///
/// Non-canonical spellings such as `IIII`, `VX` or `IC` are rejected.
///
/// ```
/// use inflect::{RomanError, roman_to_int};
///
/// assert_eq!(roman_to_int("xlii"), Ok(42));
/// assert_eq!(roman_to_int(""), Err(RomanError::Empty));
/// ```
pub fn roman_to_int(text: &str) -> Result<i64, RomanError> {
    let numeral = text.trim().to_uppercase();
    if numeral.is_empty() {
        return Err(RomanError::Empty);
    }
    let mut values = Vec::with_capacity(numeral.len());
    for (position, character) in numeral.chars().enumerate() {
        let value = symbol_value(character)
            .ok_or(RomanError::InvalidCharacter { character, position })?;
        values.push(value);
    }

    let mut total = 0;
    for (index, &value) in values.iter().enumerate() {
        match values.get(index + 1) {
            Some(&next) if next > value => total -= value,
            _ => total += value,
        }
    }

    if int_to_roman(total) == numeral {
        Ok(total)
    } else {
        Err(RomanError::Malformed { numeral })
    }
}

fn symbol_value(symbol: char) -> Option<i64> {
    Some(match symbol {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_boundaries() {
        assert_eq!(int_to_roman(1), "I");
        assert_eq!(int_to_roman(4), "IV");
        assert_eq!(int_to_roman(3999), "MMMCMXCIX");
        assert_eq!(int_to_roman(4000), "");
        assert_eq!(int_to_roman(-5), "");
    }

    #[test]
    fn rejects_non_canonical() {
        for text in ["IIII", "VX", "IC", "MMMM", "XM", "VV"] {
            assert!(
                matches!(roman_to_int(text), Err(RomanError::Malformed { .. })),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn reports_invalid_character() {
        assert_eq!(
            roman_to_int("XIZ"),
            Err(RomanError::InvalidCharacter { character: 'Z', position: 2 })
        );
        assert_eq!(roman_to_int("   "), Err(RomanError::Empty));
        assert_eq!(roman_to_int(" mcmxciv "), Ok(1994));
    }
}
