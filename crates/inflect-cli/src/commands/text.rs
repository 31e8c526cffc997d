//! Implementation of the `inflect text` command.

use std::fs::read_to_string;
use std::io::{Read, stdin};
use std::path::PathBuf;

use inflect::{Engine, InflectReport};
use miette::{IntoDiagnostic, Report, Result, WrapErr};
use serde::Serialize;

use crate::output::MacroDiagnostic;

/// Arguments for the text command.
#[derive(Debug, clap::Args)]
pub struct TextArgs {
    /// Text to expand (reads stdin when neither --text nor --file is given)
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// File whose contents to expand
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Report macro tokens left unexpanded and exit with an error
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for text results.
#[derive(Serialize)]
struct TextResult<'a> {
    result: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<SkippedJson<'a>>,
}

#[derive(Serialize)]
struct SkippedJson<'a> {
    start: usize,
    end: usize,
    source: &'a str,
    error: String,
}

/// Run the text command.
pub fn run_text(args: TextArgs, engine: &Engine) -> Result<i32> {
    let (name, content) = read_input(&args)?;
    let report = engine.inflect_with_report(&content);

    if args.json {
        println!("{}", to_json(&report)?);
    } else if report.output.ends_with('\n') {
        print!("{}", report.output);
    } else {
        println!("{}", report.output);
    }

    if args.strict && !report.skipped.is_empty() {
        for token in &report.skipped {
            let diagnostic = MacroDiagnostic::from_skipped(&name, &content, token);
            eprintln!("{:?}", Report::new(diagnostic));
        }
        return Ok(exitcode::DATAERR);
    }
    Ok(exitcode::OK)
}

/// The text to expand and the name it is reported under.
fn read_input(args: &TextArgs) -> Result<(String, String)> {
    if let Some(text) = &args.text {
        return Ok(("<text>".to_string(), text.clone()));
    }
    if let Some(path) = &args.file {
        let content = read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Cannot read input file {}", path.display()))?;
        return Ok((path.display().to_string(), content));
    }
    let mut content = String::new();
    stdin()
        .read_to_string(&mut content)
        .into_diagnostic()
        .wrap_err("Cannot read standard input")?;
    Ok(("<stdin>".to_string(), content))
}

fn to_json(report: &InflectReport) -> Result<String> {
    let output = TextResult {
        result: &report.output,
        skipped: report
            .skipped
            .iter()
            .map(|token| SkippedJson {
                start: token.span.start,
                end: token.span.end,
                source: &token.source,
                error: token.error.to_string(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&output).into_diagnostic()
}
