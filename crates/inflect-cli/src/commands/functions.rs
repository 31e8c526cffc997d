//! Implementation of the `inflect functions` command.

use inflect_semantics::{FunctionId, aliases_for};
use miette::Result;

use crate::output::table::{FunctionRow, format_functions_table};

/// Run the functions command.
pub fn run_functions() -> Result<i32> {
    let rows: Vec<FunctionRow> = FunctionId::ALL
        .iter()
        .map(|function| FunctionRow {
            name: function.name(),
            signature: function.signature().render(),
            aliases: aliases_for(*function),
        })
        .collect();
    println!("{}", format_functions_table(&rows));
    Ok(exitcode::OK)
}
