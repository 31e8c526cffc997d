//! Inflect CLI entry point.
//!
//! Provides command-line tools around the inflection engine:
//! - `inflect text` - Expand inflection macros in text
//! - `inflect call` - Run a single inflection function
//! - `inflect forms` - Show every form of a word
//! - `inflect functions` - List the callable functions

mod commands;
mod config;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{CallArgs, FormsArgs, TextArgs, run_call, run_forms, run_functions, run_text};
use config::EngineArgs;
use env_logger::{Builder, Env};
use miette::MietteHandlerOpts;

/// English inflection tools.
#[derive(Debug, Parser)]
#[command(name = "inflect")]
#[command(about = "English inflection tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub engine: EngineArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Expand inflection macros in text
    Text(TextArgs),
    /// Run a single inflection function
    Call(CallArgs),
    /// Show every form of a word
    Forms(FormsArgs),
    /// List the callable functions and their signatures
    Functions,
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// `RUST_LOG` wins; otherwise warnings, or debug output with `--verbose`.
fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_filter)).init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = cli.engine.build().and_then(|engine| match cli.command {
        Commands::Text(args) => run_text(args, &engine),
        Commands::Call(args) => run_call(args, &engine),
        Commands::Forms(args) => run_forms(args, &engine),
        Commands::Functions => run_functions(),
    });

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(exitcode::SOFTWARE);
        }
    }
}
