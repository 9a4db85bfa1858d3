/// The evaluator module executes programs directly from their tokens.
///
/// There is no syntax tree: statements and expressions are recognised and
/// executed in the same pass, so side effects happen in source order and the
/// first error stops the run.
///
/// # Responsibilities
/// - Checks the program skeleton and dispatches statements.
/// - Evaluates arithmetic expressions with standard precedence.
/// - Performs the console reads and writes of `pasok` and `ipakita`.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a keyword, an identifier, a literal, an
/// operator, or a delimiter. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens tagged with their line.
/// - Handles integer and string literals, identifiers, and keywords.
/// - Drops anything it does not recognise.
pub mod lexer;
/// The symbol table holding every variable of a run.
pub mod symbols;
/// The value module defines what a variable can hold.
///
/// # Responsibilities
/// - Defines the `Value` enum: an integer or a string.
/// - Provides the numeric reading of a value used inside expressions.
pub mod value;
