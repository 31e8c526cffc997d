//! Error types for the inflection function call surface.

use inflect_semantics::ParamKind;
use strsim::levenshtein;
use thiserror::Error;

use crate::numbers::RomanError;

/// An error from [`Engine::call`](crate::Engine::call).
///
/// The macro interpreter never surfaces these: a token whose call fails is
/// left verbatim in the output. [`Engine::inflect_with_report`] lists them.
///
/// [`Engine::inflect_with_report`]: crate::Engine::inflect_with_report
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    /// No function with this name or alias.
    #[error("unknown function '{name}'{}", did_you_mean(suggestions))]
    UnknownFunction {
        name: String,
        suggestions: Vec<String>,
    },

    /// Wrong number of arguments.
    #[error("function '{function}' expects {expected}, got {got} arguments")]
    ArgumentCount {
        function: String,
        expected: String,
        got: usize,
    },

    /// An argument of the wrong kind.
    #[error(
        "argument {} of '{function}' must be of type {}",
        position + 1,
        expected.describe()
    )]
    ArgumentType {
        function: String,
        position: usize,
        expected: ParamKind,
    },

    /// `roman_to_int` was given a malformed numeral.
    #[error(transparent)]
    Roman(#[from] RomanError),
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Returns up to three candidates close to `name`, closest first.
///
/// Names of three characters or fewer allow one edit, longer names two.
///
/// ```
/// use inflect::compute_suggestions;
///
/// let names = ["plural", "plural_noun", "singular"];
/// assert_eq!(compute_suggestions("plurl", &names), vec!["plural"]);
/// assert!(compute_suggestions("xyz", &names).is_empty());
/// ```
pub fn compute_suggestions(name: &str, candidates: &[&str]) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &str)> = candidates
        .iter()
        .map(|candidate| (levenshtein(name, candidate), *candidate))
        .filter(|(distance, candidate)| *distance <= max_distance && *candidate != name)
        .collect();
    scored.sort_unstable();
    scored.dedup_by(|a, b| a.1 == b.1);
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_are_ranked_and_capped() {
        let names = ["an", "a", "no", "num", "plural", "plural_adj", "plural_noun"];
        assert_eq!(compute_suggestions("am", &names), vec!["a", "an"]);
        assert_eq!(compute_suggestions("plurals", &names), vec!["plural"]);
        assert_eq!(compute_suggestions("nom", &names), vec!["no", "num"]);
        assert_eq!(compute_suggestions("plural", &names), Vec::<String>::new());
    }

    #[test]
    fn messages() {
        let error = CallError::UnknownFunction {
            name: "plurl".to_string(),
            suggestions: vec!["plural".to_string()],
        };
        assert_eq!(error.to_string(), "unknown function 'plurl', did you mean: plural?");
        let error = CallError::ArgumentType {
            function: "ordinal".to_string(),
            position: 0,
            expected: ParamKind::Integer,
        };
        assert_eq!(
            error.to_string(),
            "argument 1 of 'ordinal' must be of type integer"
        );
    }
}
