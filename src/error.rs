/// Parsing errors.
///
/// Defines all error types that can occur while the program's tokens are read:
/// a broken `simula() { ... }` skeleton, malformed statements, and malformed
/// expressions.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while statements execute:
/// division by zero and failures of the input or output streams.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that aborts a program run.
///
/// Parsing and execution are interleaved, so a single step may fail either
/// way. The first error stops the run.
#[derive(Debug)]
pub enum Error {
    /// The token stream did not have the expected shape.
    Parse(ParseError),
    /// A statement failed while executing.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
