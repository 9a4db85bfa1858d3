use std::iter::Peekable;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::{Context, ExecResult},
        lexer::{Operator, Token},
    },
};

impl<R, W> Context<R, W> {
    /// Evaluates an arithmetic expression directly from the token stream.
    ///
    /// This is the entry point for expression evaluation and the lowest
    /// precedence level. Each `+` or `-` is applied as soon as its right-hand
    /// term has been evaluated, so the operators associate to the left.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    ///
    /// # Parameters
    /// - `tokens`: Token stream positioned at the first token of the
    ///   expression. On success it is left just past the last consumed token.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Example
    /// ```
    /// use languageko::interpreter::{evaluator::core::Context, lexer::tokenize};
    ///
    /// let tokens = tokenize("10 - 4 - 3");
    /// let mut ctx = Context::new(std::io::empty(), std::io::sink());
    ///
    /// let value = ctx.eval_expression(&mut tokens.iter().peekable()).unwrap();
    /// assert_eq!(value, 3);
    /// ```
    pub fn eval_expression<'a, I>(&mut self, tokens: &mut Peekable<I>) -> ExecResult<i64>
        where I: Iterator<Item = &'a (Token, usize)>
    {
        let mut result = self.eval_term(tokens)?;

        while let Some((Token::Operator(op @ (Operator::Add | Operator::Sub)), _)) = tokens.peek() {
            let op = *op;
            tokens.next();

            let rhs = self.eval_term(tokens)?;
            result = match op {
                Operator::Add => result.wrapping_add(rhs),
                _ => result.wrapping_sub(rhs),
            };
        }

        Ok(result)
    }

    /// Evaluates a chain of factors joined by `*` and `/`.
    ///
    /// Grammar: `term := factor (("*" | "/") factor)*`
    ///
    /// Division truncates toward zero.
    ///
    /// # Errors
    /// - `DivisionByZero` if a right-hand factor evaluates to `0`.
    /// - Propagates any errors from factor evaluation.
    fn eval_term<'a, I>(&mut self, tokens: &mut Peekable<I>) -> ExecResult<i64>
        where I: Iterator<Item = &'a (Token, usize)>
    {
        let mut result = self.eval_factor(tokens)?;

        while let Some((Token::Operator(op @ (Operator::Mul | Operator::Div)), line)) =
            tokens.peek()
        {
            let (op, line) = (*op, *line);
            tokens.next();

            let rhs = self.eval_factor(tokens)?;
            result = match op {
                Operator::Mul => result.wrapping_mul(rhs),
                _ => {
                    if rhs == 0 {
                        return Err(RuntimeError::DivisionByZero { line }.into());
                    }
                    result.wrapping_div(rhs)
                },
            };
        }

        Ok(result)
    }

    /// Evaluates a single factor.
    ///
    /// A factor is one of:
    /// - a parenthesized expression,
    /// - an integer literal,
    /// - a variable, declared with `0` if it has not been seen before.
    ///
    /// A variable holding text contributes `0`.
    ///
    /// # Errors
    /// - `ExpectedClosingParen` if a parenthesized expression is not closed.
    /// - `ExpectedFactor` for any other token, or at the end of the input.
    fn eval_factor<'a, I>(&mut self, tokens: &mut Peekable<I>) -> ExecResult<i64>
        where I: Iterator<Item = &'a (Token, usize)>
    {
        match tokens.next() {
            Some((Token::LParen, _)) => {
                let value = self.eval_expression(tokens)?;

                match tokens.peek() {
                    Some((Token::RParen, _)) => {
                        tokens.next();
                        Ok(value)
                    },
                    _ => Err(ParseError::ExpectedClosingParen { after: "expression",
                                                                line:  self.line_at(tokens), }.into()),
                }
            },
            Some((Token::Integer(n), _)) => Ok(*n),
            Some((Token::Identifier(name), _)) => Ok(self.symbols.get_or_insert(name).as_integer()),
            Some((_, line)) => Err(ParseError::ExpectedFactor { line: *line }.into()),
            None => Err(ParseError::ExpectedFactor { line: self.end_line }.into()),
        }
    }
}
