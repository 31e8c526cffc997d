//! Rendering helpers shared by the commands.

mod diagnostic;
pub mod table;

pub use diagnostic::{ConfigDiagnostic, MacroDiagnostic};
