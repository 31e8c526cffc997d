//! Parsed form of text scanned for inflection macros.

use std::ops::Range;

use crate::types::Value;

/// A segment of scanned text.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Text copied to the output unchanged.
    Literal(String),
    /// A call-shaped token: `name(arg, ...)`.
    Call(CallToken),
}

/// A call-shaped token found in text.
#[derive(Debug, Clone, PartialEq)]
pub struct CallToken {
    /// Function name as written.
    pub name: String,
    /// Parsed arguments, in order.
    pub args: Vec<Value>,
    /// The token exactly as it appears in the text.
    pub source: String,
    /// Byte range of the token in the scanned text.
    pub span: Range<usize>,
}
