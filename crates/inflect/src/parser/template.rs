//! Macro scanner using winnow.
//!
//! Splits free text into literal runs and call-shaped tokens:
//! - Identifiers (`[A-Za-z_][A-Za-z0-9_]*`) starting at a word boundary
//! - Immediately followed by a parenthesized argument list
//! - Arguments: single- or double-quoted strings with backslash escapes,
//!   integers with an optional sign, and floats
//!
//! Anything that does not form a complete token is literal text.

use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, opt, preceded, repeat, separated, terminated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{any, none_of, one_of, take_while};

use super::ast::{CallToken, Segment};
use crate::types::Value;

/// Scans `input` into segments. Concatenating the literal text and call
/// sources of the result reproduces `input` exactly.
pub fn scan(input: &str) -> Vec<Segment> {
    let mut remaining = input;
    let mut segments = match text(&mut remaining) {
        Ok(segments) if remaining.is_empty() => segments,
        _ => return vec![Segment::Literal(input.to_string())],
    };
    assign_spans(&mut segments);
    segments
}

/// Fills in the byte span of every call from the lengths of the segments
/// before it.
fn assign_spans(segments: &mut [Segment]) {
    let mut offset = 0;
    for segment in segments {
        match segment {
            Segment::Literal(text) => offset += text.len(),
            Segment::Call(call) => {
                call.span = offset..offset + call.source.len();
                offset = call.span.end;
            }
        }
    }
}

fn text(input: &mut &str) -> ModalResult<Vec<Segment>> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(merge_literals(segments))
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// A call, a whole word, or a single other character.
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((call, word_literal, char_literal)).parse_next(input)
}

/// Consumes a whole identifier-like run so that a call never starts in the
/// middle of a word.
fn word_literal(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., is_ident_cont)
        .map(|word: &str| Segment::Literal(word.to_string()))
        .parse_next(input)
}

fn char_literal(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Parse a call: identifier(args)
fn call(input: &mut &str) -> ModalResult<Segment> {
    let ((name, args), source) = (identifier, call_args).with_taken().parse_next(input)?;
    Ok(Segment::Call(CallToken {
        name: name.to_string(),
        args,
        source: source.to_string(),
        span: 0..0,
    }))
}

/// Parse call arguments: (arg1, arg2, ...)
fn call_args(input: &mut &str) -> ModalResult<Vec<Value>> {
    delimited(
        ('(', ws),
        separated(0.., terminated(argument, ws), (',', ws)),
        ')',
    )
    .parse_next(input)
}

fn argument(input: &mut &str) -> ModalResult<Value> {
    alt((
        (|input: &mut &str| quoted(input, '"')).map(Value::String),
        (|input: &mut &str| quoted(input, '\'')).map(Value::String),
        number,
    ))
    .parse_next(input)
}

/// Parse a quoted string, resolving backslash escapes.
fn quoted(input: &mut &str, quote: char) -> ModalResult<String> {
    delimited(
        quote,
        repeat(0.., alt((escaped_char, none_of([quote, '\\'])))),
        quote,
    )
    .parse_next(input)
}

fn escaped_char(input: &mut &str) -> ModalResult<char> {
    preceded('\\', any)
        .map(|c: char| match c {
            'n' => '\n',
            't' => '\t',
            other => other,
        })
        .parse_next(input)
}

/// Parse an integer or a float: `3`, `-2`, `+7`, `1.25`.
fn number(input: &mut &str) -> ModalResult<Value> {
    let text = (opt(one_of(['+', '-'])), digit1, opt(('.', digit1)))
        .take()
        .parse_next(input)?;
    let value = if text.contains('.') {
        text.parse::<f64>().ok().map(Value::Float)
    } else {
        text.parse::<i64>().ok().map(Value::Number)
    };
    value.ok_or_else(|| ErrMode::Backtrack(ContextError::new()))
}

/// Parse an identifier.
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (one_of(is_ident_start), take_while(0.., is_ident_cont))
        .take()
        .parse_next(input)
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., char::is_whitespace).void().parse_next(input)
}

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_cont(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calls(input: &str) -> Vec<CallToken> {
        scan(input)
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Call(call) => Some(call),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    #[test]
    fn finds_calls_with_spans() {
        let input = "I saw plural('cat', 2) and an(\"owl\").";
        let found = calls(input);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "plural");
        assert_eq!(found[0].args, vec![Value::from("cat"), Value::Number(2)]);
        assert_eq!(&input[found[0].span.clone()], "plural('cat', 2)");
        assert_eq!(found[1].name, "an");
        assert_eq!(&input[found[1].span.clone()], "an(\"owl\")");
    }

    #[test]
    fn arguments() {
        let found = calls(r"f('it\'s', -3, +4, 1.50, ' a b ') g() h( )");
        assert_eq!(
            found[0].args,
            vec![
                Value::from("it's"),
                Value::Number(-3),
                Value::Number(4),
                Value::Float(1.5),
                Value::from(" a b "),
            ]
        );
        assert!(found[1].args.is_empty());
        assert!(found[2].args.is_empty());
    }

    #[test]
    fn incomplete_tokens_are_literal() {
        for input in [
            "plural(cat)",
            "plural('cat'",
            "plural ('cat')",
            "plural('cat',)",
            "f(99999999999999999999)",
            "(plural)",
        ] {
            assert_eq!(scan(input), vec![Segment::Literal(input.to_string())], "{input}");
        }
    }

    #[test]
    fn calls_start_at_word_boundaries() {
        let found = calls("xplural('cat') 3an('x')");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "xplural");
    }

    #[test]
    fn nested_call_text_is_an_argument() {
        let found = calls("an('plural(\"ox\")')");
        assert_eq!(found[0].args, vec![Value::from("plural(\"ox\")")]);
    }

    #[test]
    fn literal_text_round_trips() {
        let input = "Ünïcödé — plural('x') ✓";
        let rebuilt: String = scan(input)
            .into_iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text,
                Segment::Call(call) => call.source,
            })
            .collect();
        assert_eq!(rebuilt, input);
    }
}
