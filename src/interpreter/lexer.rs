use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// One of the four arithmetic operators.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// `simula`, the header of the program body.
    #[token("simula")]
    EntryMarker,
    /// `=`
    #[token("=")]
    Equals,
    /// `ipakita`
    #[token("ipakita")]
    Print,
    /// `pasok`
    #[token("pasok")]
    Input,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Terminator,
    /// `,`
    #[token(",")]
    Comma,
    /// String literal tokens. The payload is the raw text between the quotes.
    #[token("\"", lex_string)]
    Text(String),
    /// Identifier tokens; variable names such as `x` or `pangalan_1`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Binary arithmetic operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        };
        write!(f, "{symbol}")
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "number {n}"),
            Self::Operator(op) => write!(f, "'{op}'"),
            Self::EntryMarker => write!(f, "'simula'"),
            Self::Equals => write!(f, "'='"),
            Self::Print => write!(f, "'ipakita'"),
            Self::Input => write!(f, "'pasok'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::Terminator => write!(f, "';'"),
            Self::Comma => write!(f, "','"),
            Self::Text(s) => write!(f, "string \"{s}\""),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::NewLine | Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// The output of [`tokenize`]: every token paired with its source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    /// `(token, line)` pairs in source order.
    pub tokens:   Vec<(Token, usize)>,
    /// The line the lexer was on when the input ran out.
    pub end_line: usize,
}

impl Tokens {
    /// Returns an iterator over the `(token, line)` pairs.
    pub fn iter(&self) -> std::slice::Iter<'_, (Token, usize)> {
        self.tokens.iter()
    }

    /// Returns `true` if the source produced no tokens at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the number of tokens.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type IntoIter = std::slice::Iter<'a, (Token, usize)>;
    type Item = &'a (Token, usize);

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Converts source text into a flat sequence of tokens.
///
/// Scanning never fails. Characters that start no token (punctuation the
/// language does not use, a leading `_`, non-ASCII letters) are dropped
/// silently, and malformed constructs surface later as parse errors.
///
/// # Example
/// ```
/// use languageko::interpreter::lexer::{Operator, Token, tokenize};
///
/// let tokens = tokenize("x = 2 + y;");
/// let kinds: Vec<Token> = tokens.iter().map(|(tok, _)| tok.clone()).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".into()),
///                 Token::Equals,
///                 Token::Integer(2),
///                 Token::Operator(Operator::Add),
///                 Token::Identifier("y".into()),
///                 Token::Terminator]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Tokens {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        // Unmatched input is skipped one character at a time.
        let Ok(tok) = token else { continue };

        // A string literal is reported on the line it starts on.
        let newlines = match &tok {
            Token::Text(s) => s.matches('\n').count(),
            _ => 0,
        };
        tokens.push((tok, lexer.extras.line));
        lexer.extras.line += newlines;
    }

    Tokens { tokens,
             end_line: lexer.extras.line }
}

/// Parses an integer literal from the current token slice.
///
/// Literals too large for an `i64` saturate to `i64::MAX`.
fn parse_integer(lex: &logos::Lexer<Token>) -> i64 {
    lex.slice().parse().unwrap_or(i64::MAX)
}

/// Consumes a string literal after its opening quote.
///
/// The literal ends at the next `"` or, if there is none, at the end of the
/// input. There are no escape sequences.
fn lex_string(lex: &mut logos::Lexer<Token>) -> String {
    let rest = lex.remainder();
    let (contents, consumed) = match rest.find('"') {
        Some(end) => (rest[..end].to_string(), end + 1),
        None => (rest.to_string(), rest.len()),
    };

    lex.bump(consumed);

    contents
}
