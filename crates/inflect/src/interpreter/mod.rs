//! Macro interpreter: expands `name(arg, ...)` tokens embedded in text.
//!
//! Tokens are scanned by [`crate::parser`], dispatched through
//! [`Engine::call`], and replaced by the call's result. A token whose call
//! fails stays in the output exactly as written.

mod dispatch;
mod error;

use std::ops::Range;

use inflect_semantics::FunctionId;
use log::{debug, trace};

pub use error::{CallError, compute_suggestions};

use crate::engine::Engine;
use crate::parser::{CallToken, Segment, scan};

/// A call-shaped token that was left in the output verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedToken {
    /// Byte range of the token in the input text.
    pub span: Range<usize>,
    /// The token as written.
    pub source: String,
    /// Why the call did not run.
    pub error: CallError,
}

/// Result of [`Engine::inflect_with_report`].
#[derive(Debug, Clone, PartialEq)]
pub struct InflectReport {
    /// The expanded text, identical to [`Engine::inflect`].
    pub output: String,
    /// Tokens left untouched, in text order.
    pub skipped: Vec<SkippedToken>,
}

impl Engine {
    /// Expands every recognized macro call in `text`.
    ///
    /// Unknown names and calls with the wrong arguments are left as
    /// written. Calls run left to right, so `num(n)` sets the default
    /// count for the calls after it in the same text; it expands to
    /// nothing and leaves the engine's own default count untouched.
    ///
    /// ```
    /// use inflect::Engine;
    ///
    /// let engine = Engine::new();
    /// assert_eq!(
    ///     engine.inflect("There were plural('error', 3) in plural_noun('file')."),
    ///     "There were errors in files."
    /// );
    /// assert_eq!(engine.inflect("frobnicate('x') stays"), "frobnicate('x') stays");
    /// ```
    pub fn inflect(&self, text: &str) -> String {
        self.inflect_with_report(text).output
    }

    /// [`Engine::inflect`], also listing the tokens that were left verbatim.
    pub fn inflect_with_report(&self, text: &str) -> InflectReport {
        let mut output = String::with_capacity(text.len());
        let mut skipped = Vec::new();
        let mut count = self.default_count();
        for segment in scan(text) {
            match segment {
                Segment::Literal(literal) => output.push_str(&literal),
                Segment::Call(call) => match self.expand(&call, &mut count) {
                    Ok(expansion) => {
                        trace!("Expanded {} to {expansion:?}", call.source);
                        output.push_str(&expansion);
                    }
                    Err(error) => {
                        debug!("Leaving {} untouched: {error}", call.source);
                        output.push_str(&call.source);
                        skipped.push(SkippedToken {
                            span: call.span,
                            source: call.source,
                            error,
                        });
                    }
                },
            }
        }
        InflectReport { output, skipped }
    }

    fn expand(&self, call: &CallToken, count: &mut Option<i64>) -> Result<String, CallError> {
        let (function, result) = self.call_counted(&call.name, &call.args, count)?;
        if function == FunctionId::Num {
            Ok(String::new())
        } else {
            Ok(result)
        }
    }
}
