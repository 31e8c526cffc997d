//! Scanner for call-shaped macro tokens embedded in free text.

pub mod ast;
mod template;

pub use ast::{CallToken, Segment};
pub use template::scan;
