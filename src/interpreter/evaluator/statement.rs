use std::{
    io::{BufRead, Write},
    iter::Peekable,
};

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::{
            core::{Context, ExecResult},
            utils::{expect, parse_input_line, skip_terminators},
        },
        lexer::Token,
        value::Value,
    },
};

impl<R: BufRead, W: Write> Context<R, W> {
    /// Executes an assignment statement.
    ///
    /// Syntax:
    /// ```text
    ///     <identifier> = pasok("<prompt>");
    ///     <identifier> = "<text>";
    ///     <identifier> = <expression>;
    /// ```
    /// The right-hand side decides the kind of the stored value: input
    /// produces whichever kind the line converts to, a string literal produces
    /// text, and an expression produces an integer. The previous value is
    /// replaced entirely.
    ///
    /// Any number of `;` may follow, including none.
    ///
    /// # Errors
    /// - `ExpectedVariableName` if the statement does not start with an
    ///   identifier.
    /// - `ExpectedEquals` if the identifier is not followed by `=`.
    /// - Propagates errors from the right-hand side.
    pub fn exec_assignment<'a, I>(&mut self, tokens: &mut Peekable<I>) -> ExecResult<()>
        where I: Iterator<Item = &'a (Token, usize)>
    {
        let name = match tokens.next() {
            Some((Token::Identifier(name), _)) => name,
            Some((_, line)) => return Err(ParseError::ExpectedVariableName { line: *line }.into()),
            None => {
                return Err(ParseError::ExpectedVariableName { line: self.end_line }.into());
            },
        };
        self.symbols.get_or_insert(name);

        expect(tokens, &Token::Equals, self.end_line, |line| ParseError::ExpectedEquals { line })?;

        let value = match tokens.peek() {
            Some((Token::Input, _)) => self.exec_input(tokens)?,
            Some((Token::Text(text), _)) => {
                let value = Value::Text(text.clone());
                tokens.next();
                value
            },
            _ => Value::Integer(self.eval_expression(tokens)?),
        };
        self.symbols.assign(name, value);

        skip_terminators(tokens);

        Ok(())
    }

    /// Executes a print statement.
    ///
    /// Syntax:
    /// ```text
    ///     ipakita(<argument>, <argument>, ...);
    /// ```
    /// Each argument is either a string literal, written verbatim, or a
    /// variable, written as its current value. Arguments are written back to
    /// back with nothing in between; commas only separate them. After the
    /// statement's `;`, a single line break is written.
    ///
    /// # Errors
    /// - `ExpectedKeyword` / `ExpectedOpenParen` for a malformed head.
    /// - `UnexpectedPrintArgument` for any other token between the
    ///   parentheses.
    /// - `ExpectedClosingParen` if the input ends inside the argument list.
    /// - `ExpectedTerminator` if `)` is not followed by `;`.
    pub fn exec_print<'a, I>(&mut self, tokens: &mut Peekable<I>) -> ExecResult<()>
        where I: Iterator<Item = &'a (Token, usize)>
    {
        expect(tokens, &Token::Print, self.end_line, |line| {
            ParseError::ExpectedKeyword { keyword: "ipakita",
                                          line }
        })?;
        expect(tokens, &Token::LParen, self.end_line, |line| {
            ParseError::ExpectedOpenParen { keyword: "ipakita",
                                            line }
        })?;

        loop {
            match tokens.peek() {
                Some((Token::RParen, _)) => break,
                Some((Token::Text(text), line)) => {
                    self.write_output(text, *line)?;
                    tokens.next();
                },
                Some((Token::Identifier(name), line)) => {
                    let value = self.symbols.get_or_insert(name).clone();
                    self.write_output(value, *line)?;
                    tokens.next();
                },
                Some((Token::Comma, _)) => {
                    tokens.next();
                },
                Some((tok, line)) => {
                    return Err(ParseError::UnexpectedPrintArgument { token: tok.to_string(),
                                                                     line:  *line, }.into());
                },
                None => {
                    return Err(ParseError::ExpectedClosingParen { after: "ipakita arguments",
                                                                  line:  self.end_line, }.into());
                },
            }
        }

        expect(tokens, &Token::RParen, self.end_line, |line| {
            ParseError::ExpectedClosingParen { after: "ipakita arguments",
                                               line }
        })?;
        let line = expect(tokens, &Token::Terminator, self.end_line, |line| {
                       ParseError::ExpectedTerminator { keyword: "ipakita",
                                                        line }
                   })?;

        self.write_output('\n', line)
    }

    /// Executes an input statement and returns the value that was read.
    ///
    /// Syntax:
    /// ```text
    ///     pasok("<prompt>");
    /// ```
    /// The prompt is written without a line break as soon as it is seen, then,
    /// once the statement is complete, one line is read from the input stream and converted with [`parse_input_line`]. Used on its
    /// own, the value is discarded; on the right of `=`, it is assigned.
    ///
    /// # Errors
    /// - `ExpectedKeyword`, `ExpectedOpenParen`, `ExpectedPrompt`,
    ///   `ExpectedClosingParen`, `ExpectedTerminator` for a malformed
    ///   statement. A missing `)` or `;` is reported after the prompt has been
    ///   written.
    /// - `InvalidInput` if no line can be read.
    pub fn exec_input<'a, I>(&mut self, tokens: &mut Peekable<I>) -> ExecResult<Value>
        where I: Iterator<Item = &'a (Token, usize)>
    {
        expect(tokens, &Token::Input, self.end_line, |line| {
            ParseError::ExpectedKeyword { keyword: "pasok",
                                          line }
        })?;
        expect(tokens, &Token::LParen, self.end_line, |line| {
            ParseError::ExpectedOpenParen { keyword: "pasok",
                                            line }
        })?;

        let (prompt, line) = match tokens.next() {
            Some((Token::Text(prompt), line)) => (prompt, *line),
            Some((_, line)) => return Err(ParseError::ExpectedPrompt { line: *line }.into()),
            None => return Err(ParseError::ExpectedPrompt { line: self.end_line }.into()),
        };
        self.write_output(prompt, line)?;

        expect(tokens, &Token::RParen, self.end_line, |line| {
            ParseError::ExpectedClosingParen { after: "prompt",
                                               line }
        })?;
        expect(tokens, &Token::Terminator, self.end_line, |line| {
            ParseError::ExpectedTerminator { keyword: "pasok",
                                             line }
        })?;

        let text = self.read_line(line)?;

        Ok(parse_input_line(&text))
    }
}
