//! # languageko
//!
//! languageko is an interpreter for a small scripting language with Filipino
//! keywords. A program is a single `simula() { ... }` block of assignments,
//! `ipakita` (print) and `pasok` (input) statements over integers and strings.
//!
//! ```text
//! simula() {
//!     pangalan = pasok("Pangalan: ");
//!     edad = 20 + 5 * 2;
//!     ipakita("Kumusta, ", pangalan, "! Edad: ", edad);
//! }
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use crate::{
    error::{Error, ParseError},
    interpreter::{evaluator::core::Context, lexer::tokenize, symbols::SymbolTable},
};

/// Provides unified error types for parsing and execution.
///
/// This module defines all errors that can abort a run. Every error is fatal:
/// the first one stops the program and is reported with the line it occurred
/// on.
///
/// # Responsibilities
/// - Defines error enums for structural, statement and expression syntax
///   errors, and for runtime failures.
/// - Attaches line numbers and a message naming the violated expectation.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, execution, values and the symbol table
/// to provide a complete runtime for languageko programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, evaluator, values and symbols.
/// - Provides entry points for running programs and evaluating expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a program and returns its final variable bindings.
///
/// The source is tokenized, then executed statement by statement. `pasok`
/// reads lines from `input` and every prompt and `ipakita` writes to
/// `output`. Each call starts from an empty symbol table.
///
/// # Errors
/// Returns the first parse or runtime error. Output written before the error
/// is kept.
///
/// # Examples
/// ```
/// use languageko::{interpreter::value::Value, run};
///
/// let source = r#"simula() { n = pasok("Numero: "); ipakita("doble: ", d); d = n * 2; ipakita(d); }"#;
/// let mut output = Vec::new();
///
/// let symbols = run(source, "21\n".as_bytes(), &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "Numero: doble: 0\n42\n");
/// assert_eq!(symbols.get("d"), Some(&Value::Integer(42)));
///
/// // A broken skeleton is reported, not executed.
/// assert!(run("ipakita(x);", std::io::empty(), std::io::sink()).is_err());
/// ```
pub fn run<R: BufRead, W: Write>(source: &str, input: R, output: W) -> Result<SymbolTable, Error> {
    let tokens = tokenize(source);
    let mut context = Context::new(input, output);

    context.run_program(&tokens)?;

    Ok(context.into_symbols())
}

/// Evaluates a lone arithmetic expression.
///
/// Variables may appear and read as `0`, since nothing has been assigned.
///
/// # Errors
/// Returns an error if the expression is malformed, divides by zero, or is
/// followed by anything else.
///
/// # Examples
/// ```
/// use languageko::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14);
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20);
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<i64, Error> {
    let tokens = tokenize(expression);
    let mut context = Context::new(std::io::empty(), std::io::sink());
    context.end_line = tokens.end_line;

    let mut iter = tokens.iter().peekable();
    let value = context.eval_expression(&mut iter)?;

    if let Some((tok, line)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: tok.to_string(),
                                                          line:  *line, }.into());
    }

    Ok(value)
}
