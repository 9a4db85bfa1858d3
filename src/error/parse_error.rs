#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading the program's structure.
pub enum ParseError {
    /// The program does not start with `simula`.
    MissingEntryMarker {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `simula` is not followed by `()`.
    MissingParameterList {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The body does not open with `{`.
    MissingBodyOpen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The input ended before the body's closing `}`.
    MissingBodyClose {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A token that cannot start a statement was found in the body.
    UnexpectedTokenInBody {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An assignment did not start with a variable name.
    ExpectedVariableName {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A variable name was not followed by `=`.
    ExpectedEquals {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A statement keyword was expected but something else was found.
    ExpectedKeyword {
        /// The keyword that was expected.
        keyword: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An opening parenthesis `(` was expected after a keyword.
    ExpectedOpenParen {
        /// The keyword the parenthesis belongs to.
        keyword: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// What the parenthesis should have followed.
        after: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A statement was not terminated by `;`.
    ExpectedTerminator {
        /// The keyword of the unterminated statement.
        keyword: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Something other than a string, a variable, or a comma appeared in a
    /// print statement's argument list.
    UnexpectedPrintArgument {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An input statement had no string prompt.
    ExpectedPrompt {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A number, variable, or parenthesized expression was expected.
    ExpectedFactor {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Returns the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::MissingEntryMarker { line }
            | Self::MissingParameterList { line }
            | Self::MissingBodyOpen { line }
            | Self::MissingBodyClose { line }
            | Self::UnexpectedTokenInBody { line, .. }
            | Self::ExpectedVariableName { line }
            | Self::ExpectedEquals { line }
            | Self::ExpectedKeyword { line, .. }
            | Self::ExpectedOpenParen { line, .. }
            | Self::ExpectedClosingParen { line, .. }
            | Self::ExpectedTerminator { line, .. }
            | Self::UnexpectedPrintArgument { line, .. }
            | Self::ExpectedPrompt { line }
            | Self::ExpectedFactor { line }
            | Self::UnexpectedTrailingTokens { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEntryMarker { line } => {
                write!(f, "Error on line {line}: Missing 'simula'.")
            },
            Self::MissingParameterList { line } => {
                write!(f, "Error on line {line}: Missing '()'.")
            },
            Self::MissingBodyOpen { line } => {
                write!(f, "Error on line {line}: Missing '{{' for body.")
            },
            Self::MissingBodyClose { line } => {
                write!(f, "Error on line {line}: Missing '}}' to close body.")
            },
            Self::UnexpectedTokenInBody { token, line } => {
                write!(f, "Error on line {line}: Unexpected token in body: {token}.")
            },
            Self::ExpectedVariableName { line } => {
                write!(f, "Error on line {line}: Expected a variable name before '='.")
            },
            Self::ExpectedEquals { line } => {
                write!(f, "Error on line {line}: Expected '=' after variable name.")
            },
            Self::ExpectedKeyword { keyword, line } => {
                write!(f, "Error on line {line}: Expected '{keyword}'.")
            },
            Self::ExpectedOpenParen { keyword, line } => {
                write!(f, "Error on line {line}: Expected '(' after '{keyword}'.")
            },
            Self::ExpectedClosingParen { after, line } => {
                write!(f, "Error on line {line}: Expected ')' after {after}.")
            },
            Self::ExpectedTerminator { keyword, line } => write!(f,
                                                                 "Error on line {line}: Expected ';' after '{keyword}' statement."),
            Self::UnexpectedPrintArgument { token, line } => write!(f,
                                                                    "Error on line {line}: Unexpected token in 'ipakita' statement: {token}."),
            Self::ExpectedPrompt { line } => write!(f,
                                                    "Error on line {line}: Expected a string prompt inside 'pasok'."),
            Self::ExpectedFactor { line } => {
                write!(f, "Error on line {line}: Expected a number, variable, or '('.")
            },
            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression: {token}."),
        }
    }
}

impl std::error::Error for ParseError {}
