//! Implementation of the `inflect call` command.

use inflect::{CallError, Engine, Value};
use inflect_semantics::{ParamKind, Signature, resolve_function};
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Arguments for the call command.
#[derive(Debug, clap::Args)]
pub struct CallArgs {
    /// Function name or alias (see `inflect functions`)
    pub function: String,

    /// Function arguments; numeric arguments to numeric parameters are
    /// passed as numbers
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for call results.
#[derive(Serialize)]
struct CallResult {
    result: String,
}

#[derive(Serialize)]
struct CallFailure {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    suggestions: Vec<String>,
}

/// Run the call command.
pub fn run_call(args: CallArgs, engine: &Engine) -> Result<i32> {
    let signature = resolve_function(&args.function).map(|function| function.signature());
    let values: Vec<Value> = args
        .args
        .iter()
        .enumerate()
        .map(|(position, arg)| coerce(signature.as_ref(), position, arg))
        .collect();

    match engine.call(&args.function, &values) {
        Ok(result) => {
            if args.json {
                let output = CallResult { result };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{result}");
            }
            Ok(exitcode::OK)
        }
        Err(error) => {
            if args.json {
                let suggestions = match &error {
                    CallError::UnknownFunction { suggestions, .. } => suggestions.clone(),
                    _ => Vec::new(),
                };
                let output = CallFailure {
                    error: error.to_string(),
                    suggestions,
                };
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("{} {error}", "error:".red().bold());
            }
            Ok(exitcode::DATAERR)
        }
    }
}

/// String parameters keep the argument as text; anything else is parsed
/// as a number when it looks like one.
fn coerce(signature: Option<&Signature>, position: usize, arg: &str) -> Value {
    match signature.and_then(|signature| signature.param(position)) {
        Some(ParamKind::Word) => Value::from(arg),
        _ => Value::parse_loose(arg),
    }
}
