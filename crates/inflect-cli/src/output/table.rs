//! Table formatting utilities for CLI output.

use comfy_table::{ContentArrangement, Table, presets};

/// Two-column table of form names and values.
pub fn format_forms_table(word: &str, forms: &[(&str, String)]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Form", word]);
    for (form, value) in forms {
        table.add_row(vec![(*form).to_string(), value.clone()]);
    }
    table
}

/// One row per callable function.
pub struct FunctionRow {
    pub name: &'static str,
    pub signature: String,
    pub aliases: Vec<&'static str>,
}

pub fn format_functions_table(rows: &[FunctionRow]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Function", "Arguments", "Aliases"]);
    for row in rows {
        table.add_row(vec![
            row.name.to_string(),
            row.signature.clone(),
            row.aliases.join(", "),
        ]);
    }
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}
