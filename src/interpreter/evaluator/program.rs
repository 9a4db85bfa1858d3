use std::io::{BufRead, Write};

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::{
            core::{Context, ExecResult},
            utils::expect,
        },
        lexer::{Token, Tokens},
    },
};

impl<R: BufRead, W: Write> Context<R, W> {
    /// Runs a whole program.
    ///
    /// A program is a single block:
    /// ```text
    ///     simula() {
    ///         <statement>*
    ///     }
    /// ```
    /// The skeleton is checked in order, then statements are executed one at a
    /// time until the closing `}`. Each statement is chosen by looking at its
    /// first token (and, for assignments, the `=` after it). Tokens after the
    /// closing `}` are ignored.
    ///
    /// # Errors
    /// - `MissingEntryMarker`, `MissingParameterList`, `MissingBodyOpen` for a
    ///   broken skeleton.
    /// - `UnexpectedTokenInBody` for a token that starts no statement.
    /// - `MissingBodyClose` if the tokens run out inside the body.
    /// - Propagates the first error of any statement.
    ///
    /// # Example
    /// ```
    /// use languageko::interpreter::{evaluator::core::Context, lexer::tokenize};
    ///
    /// let tokens = tokenize("simula() { x = 6 * 7; ipakita(\"x = \", x); }");
    /// let mut out = Vec::new();
    /// let mut ctx = Context::new(std::io::empty(), &mut out);
    ///
    /// ctx.run_program(&tokens).unwrap();
    /// drop(ctx);
    /// assert_eq!(String::from_utf8(out).unwrap(), "x = 42\n");
    /// ```
    pub fn run_program(&mut self, tokens: &Tokens) -> ExecResult<()> {
        self.end_line = tokens.end_line;
        let end_line = self.end_line;
        let mut tokens = tokens.iter().peekable();

        expect(&mut tokens, &Token::EntryMarker, end_line, |line| {
            ParseError::MissingEntryMarker { line }
        })?;
        expect(&mut tokens, &Token::LParen, end_line, |line| {
            ParseError::MissingParameterList { line }
        })?;
        expect(&mut tokens, &Token::RParen, end_line, |line| {
            ParseError::MissingParameterList { line }
        })?;
        expect(&mut tokens, &Token::LBrace, end_line, |line| {
            ParseError::MissingBodyOpen { line }
        })?;

        loop {
            let mut lookahead = tokens.clone();
            let Some((tok, line)) = lookahead.next() else {
                return Err(ParseError::MissingBodyClose { line: end_line }.into());
            };

            match tok {
                Token::RBrace => {
                    tokens.next();
                    break;
                },
                Token::Identifier(_) if matches!(lookahead.peek(), Some((Token::Equals, _))) => {
                    self.exec_assignment(&mut tokens)?;
                },
                Token::Print => self.exec_print(&mut tokens)?,
                Token::Input => {
                    self.exec_input(&mut tokens)?;
                },
                _ => {
                    return Err(ParseError::UnexpectedTokenInBody { token: tok.to_string(),
                                                                   line:  *line, }.into());
                },
            }
        }

        self.finish()
    }
}
