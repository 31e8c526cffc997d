//! Rails-style naming helpers built on case conversion and the noun rules.

use crate::case::{pascal_case, snake_case, title_case};
use crate::engine::Engine;
use crate::morphology::casing::capitalize;

fn strip_id(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed.strip_suffix("_id").unwrap_or(trimmed)
}

/// Human-readable label: `employee_salary` -> `Employee salary`,
/// `author_id` -> `Author`.
pub fn humanize(text: &str) -> String {
    let words: Vec<&str> = strip_id(text)
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .collect();
    capitalize(&words.join(" ").to_lowercase())
}

/// Every word capitalized: `man_from_the_boondocks` ->
/// `Man From The Boondocks`.
pub fn titleize(text: &str) -> String {
    title_case(strip_id(text))
}

/// Foreign-key column for a model name: `Admin::Message` -> `message_id`.
pub fn foreign_key(text: &str) -> String {
    let model = text.rsplit("::").next().unwrap_or(text);
    format!("{}_id", snake_case(model))
}

impl Engine {
    /// Table name for a model: `RawScaledScorer` -> `raw_scaled_scorers`.
    pub fn tableize(&self, text: &str) -> String {
        let snake = snake_case(text.rsplit("::").next().unwrap_or(text));
        match snake.rsplit_once('_') {
            Some((head, last)) => format!("{head}_{}", self.plural_noun_any(last)),
            None => self.plural_noun_any(&snake),
        }
    }

    /// Model name for a table: `raw_scaled_scorers` -> `RawScaledScorer`,
    /// `schema.posts` -> `Post`.
    pub fn classify(&self, text: &str) -> String {
        let table = text.rsplit('.').next().unwrap_or(text);
        let snake = snake_case(table);
        let singular = match snake.rsplit_once('_') {
            Some((head, last)) => format!("{head}_{}", self.singular_noun_any(last)),
            None => self.singular_noun_any(&snake),
        };
        pascal_case(&singular)
    }
}
