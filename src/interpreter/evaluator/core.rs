use std::{
    fmt::Display,
    io::{BufRead, Write},
    iter::Peekable,
};

use crate::{
    error::{Error, RuntimeError},
    interpreter::{lexer::Token, symbols::SymbolTable},
};

/// Result type used while executing a program.
///
/// Parsing and evaluation happen in the same pass, so every step returns
/// either a value of type `T` or an [`Error`] of either kind.
pub type ExecResult<T> = Result<T, Error>;

/// Stores the state of one program run.
///
/// This struct holds the symbol table together with the streams that
/// `pasok` reads from and `ipakita` writes to. Nothing is shared between runs:
/// each `Context` is a fresh global frame.
///
/// ## Usage
///
/// A `Context` is created once per program and handed the token stream
/// through [`Context::run_program`]. Statements and expressions are executed
/// as they are recognised, directly from the tokens.
pub struct Context<R, W> {
    /// Every variable the program has mentioned so far.
    pub symbols: SymbolTable,
    input:       R,
    output:      W,
    /// Line reported for errors found at the end of the token stream.
    pub(crate) end_line: usize,
}

impl<R, W> Context<R, W> {
    /// Creates a context with an empty symbol table around the given streams.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { symbols: SymbolTable::new(),
               input,
               output,
               end_line: 1 }
    }

    /// Consumes the context, keeping only the final variable bindings.
    #[must_use]
    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }

    /// Returns the line of the next token, or the last line of the source if
    /// the tokens have run out.
    pub(crate) fn line_at<'a, I>(&self, tokens: &mut Peekable<I>) -> usize
        where I: Iterator<Item = &'a (Token, usize)>
    {
        tokens.peek().map_or(self.end_line, |(_, line)| *line)
    }
}

impl<R: BufRead, W: Write> Context<R, W> {
    /// Writes `text` to the output stream without a line break.
    pub(crate) fn write_output(&mut self, text: impl Display, line: usize) -> ExecResult<()> {
        write!(self.output, "{text}").map_err(|source| RuntimeError::Output { source, line })?;
        Ok(())
    }

    /// Blocks until one line is available on the input stream.
    ///
    /// Pending output is flushed first so a prompt is visible before the read.
    /// The line terminator is not part of the result. Bytes that are not valid
    /// UTF-8 are replaced with `U+FFFD`.
    pub(crate) fn read_line(&mut self, line: usize) -> ExecResult<String> {
        self.output
            .flush()
            .map_err(|source| RuntimeError::Output { source, line })?;

        let mut bytes = Vec::new();
        match self.input.read_until(b'\n', &mut bytes) {
            Ok(0) | Err(_) => return Err(RuntimeError::InvalidInput { line }.into()),
            Ok(_) => {},
        }

        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }
        let buf = String::from_utf8_lossy(&bytes).into_owned();

        Ok(buf)
    }

    /// Flushes the output stream at the end of a run.
    pub(crate) fn finish(&mut self) -> ExecResult<()> {
        let line = self.end_line;
        self.output
            .flush()
            .map_err(|source| RuntimeError::Output { source, line })?;
        Ok(())
    }
}
