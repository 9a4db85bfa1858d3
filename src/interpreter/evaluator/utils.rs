use std::{iter::Peekable, num::IntErrorKind};

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, value::Value},
};

/// Converts a line read by `pasok` into a value.
///
/// The line is an integer if, after optional leading ASCII whitespace, the
/// rest of it is an optionally signed run of decimal digits. Integers beyond
/// the `i64` range saturate. An empty line is the integer `0`. Anything else
/// is kept whole as text.
///
/// # Example
/// ```
/// use languageko::interpreter::{evaluator::utils::parse_input_line, value::Value};
///
/// assert_eq!(parse_input_line("42"), Value::Integer(42));
/// assert_eq!(parse_input_line("  -7"), Value::Integer(-7));
/// assert_eq!(parse_input_line(""), Value::Integer(0));
/// assert_eq!(parse_input_line("42 "), Value::Text("42 ".into()));
/// assert_eq!(parse_input_line("abc"), Value::Text("abc".into()));
/// ```
#[must_use]
pub fn parse_input_line(line: &str) -> Value {
    if line.is_empty() {
        return Value::Integer(0);
    }

    match line.trim_start_matches(|c: char| c.is_ascii_whitespace()).parse::<i64>() {
        Ok(n) => Value::Integer(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Value::Integer(i64::MAX),
            IntErrorKind::NegOverflow => Value::Integer(i64::MIN),
            _ => Value::Text(line.to_string()),
        },
    }
}

/// Consumes the next token if it equals `expected`.
///
/// # Errors
/// Returns the error built by `error` from the offending token's line (or the
/// last line, at the end of the input) if the next token is anything else.
pub(crate) fn expect<'a, I>(tokens: &mut Peekable<I>,
                            expected: &Token,
                            end_line: usize,
                            error: impl FnOnce(usize) -> ParseError)
                            -> Result<usize, ParseError>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((tok, line)) if tok == expected => {
            let line = *line;
            tokens.next();
            Ok(line)
        },
        Some((_, line)) => Err(error(*line)),
        None => Err(error(end_line)),
    }
}

/// Consumes any run of `;` tokens.
pub(crate) fn skip_terminators<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((Token::Terminator, _)) = tokens.peek() {
        tokens.next();
    }
}
