use thiserror::Error;

/// A custom article pattern that could not be registered.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid article pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
