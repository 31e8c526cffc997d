//! Implementation of the `inflect forms` command.

use inflect::Engine;
use miette::{IntoDiagnostic, Result};
use serde_json::{Map, Value};

use crate::output::table::format_forms_table;

/// Arguments for the forms command.
#[derive(Debug, clap::Args)]
pub struct FormsArgs {
    /// Word to inflect
    pub word: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Every form the engine derives for `word`, read as noun, verb and
/// adjective alike.
fn word_forms(engine: &Engine, word: &str) -> Vec<(&'static str, String)> {
    vec![
        ("plural", engine.plural(word)),
        ("plural noun", engine.plural_noun(word)),
        ("singular noun", engine.singular_noun(word)),
        ("article", engine.an(word)),
        ("possessive", engine.possessive(word)),
        ("plural verb", engine.plural_verb(word)),
        ("singular verb", engine.singular_verb(word)),
        ("past tense", engine.past_tense(word)),
        ("past participle", engine.past_participle(word)),
        ("present participle", engine.present_participle(word)),
        ("future tense", engine.future_tense(word)),
        ("plural adjective", engine.plural_adj(word)),
        ("comparative", engine.comparative(word)),
        ("superlative", engine.superlative(word)),
        ("adverb", engine.adverb(word)),
    ]
}

/// Run the forms command.
pub fn run_forms(args: FormsArgs, engine: &Engine) -> Result<i32> {
    let forms = word_forms(engine, &args.word);
    if args.json {
        let object: Map<String, Value> = forms
            .into_iter()
            .map(|(form, value)| (form.replace(' ', "_"), Value::String(value)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&object).into_diagnostic()?);
    } else {
        println!("{}", format_forms_table(&args.word, &forms));
    }
    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms_of_run() {
        let rendered = word_forms(&Engine::new(), "run")
            .iter()
            .map(|(form, value)| format!("{form}: {value}"))
            .collect::<Vec<_>>()
            .join("\n");
        insta::assert_snapshot!(rendered, @r"
        plural: runs
        plural noun: runs
        singular noun: run
        article: a run
        possessive: run's
        plural verb: run
        singular verb: runs
        past tense: ran
        past participle: run
        present participle: running
        future tense: will run
        plural adjective: run
        comparative: runner
        superlative: runnest
        adverb: runly
        ");
    }
}
