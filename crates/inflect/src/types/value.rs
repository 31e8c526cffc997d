use std::fmt::{self, Display, Formatter};

/// A runtime argument passed to an inflection function.
///
/// Macro text produces these from quoted strings and bare numbers; the CLI
/// produces them from command-line arguments.
///
/// # Example
///
/// ```
/// use inflect::Value;
///
/// // Integers become Value::Number
/// let count: Value = 3.into();
///
/// // Strings become Value::String
/// let word: Value = "cat".into();
///
/// assert_eq!(count.as_number(), Some(3));
/// assert_eq!(word.as_word(), Some("cat"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer (counts, numbers to spell out).
    Number(i64),

    /// A floating-point number (currency amounts).
    Float(f64),

    /// A word or phrase.
    String(String),
}

impl Value {
    /// Get this value as an integer, if it is one.
    ///
    /// Floats with no fractional part count as integers.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Float(f) if f.fract() == 0.0 && f.abs() < 9.0e18 => Some(*f as i64),
            _ => None,
        }
    }

    /// Get this value as a float, if it is numeric.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            Value::String(_) => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Parses a command-line argument: integers and floats become numbers,
    /// anything else a string.
    pub fn parse_loose(text: &str) -> Self {
        if let Ok(number) = text.parse::<i64>() {
            return Value::Number(number);
        }
        match text.parse::<f64>() {
            Ok(float) if float.is_finite() => Value::Float(float),
            _ => Value::String(text.to_string()),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_parsing() {
        assert_eq!(Value::parse_loose("3"), Value::Number(3));
        assert_eq!(Value::parse_loose("-12"), Value::Number(-12));
        assert_eq!(Value::parse_loose("1.5"), Value::Float(1.5));
        assert_eq!(Value::parse_loose("cat"), Value::String("cat".to_string()));
        assert_eq!(Value::parse_loose("inf"), Value::String("inf".to_string()));
    }

    #[test]
    fn numeric_views() {
        assert_eq!(Value::Float(2.0).as_number(), Some(2));
        assert_eq!(Value::Float(2.5).as_number(), None);
        assert_eq!(Value::Number(2).as_float(), Some(2.0));
        assert_eq!(Value::from("2").as_number(), None);
    }
}
