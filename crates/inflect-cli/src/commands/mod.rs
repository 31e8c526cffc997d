//! CLI command implementations.

mod call;
mod forms;
mod functions;
mod text;

pub use call::{CallArgs, run_call};
pub use forms::{FormsArgs, run_forms};
pub use functions::run_functions;
pub use text::{TextArgs, run_text};
