//! Miette diagnostics for unexpanded macro tokens and config errors.

use std::path::Path;

use inflect::{CallError, SkippedToken};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A macro token that `--strict` refused to leave verbatim.
///
/// Fields are read by the miette derive, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(inflect::unexpanded))]
pub struct MacroDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("left unexpanded")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl MacroDiagnostic {
    pub fn from_skipped(name: &str, content: &str, token: &SkippedToken) -> Self {
        let help = match &token.error {
            CallError::UnknownFunction { suggestions, .. } if suggestions.is_empty() => {
                Some("run `inflect functions` to list the available functions".to_string())
            }
            CallError::ArgumentCount { .. } | CallError::ArgumentType { .. } => {
                Some("run `inflect functions` to see every signature".to_string())
            }
            CallError::UnknownFunction { .. } | CallError::Roman(_) => None,
        };
        MacroDiagnostic {
            src: NamedSource::new(name, content.to_string()),
            span: token.span.clone().into(),
            message: token.error.to_string(),
            help,
        }
    }
}

/// A `--config` file that is not valid engine options JSON.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid config: {message}")]
#[diagnostic(code(inflect::config))]
pub struct ConfigDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,
}

impl ConfigDiagnostic {
    pub fn from_json_error(path: &Path, content: &str, err: &serde_json::Error) -> Self {
        // Sum of (line_length + 1) for lines before the error line, plus column.
        let offset = content
            .lines()
            .take(err.line().saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + err.column().saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        ConfigDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: err.to_string(),
        }
    }
}
