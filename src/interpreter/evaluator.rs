/// Execution context and shared result types.
///
/// Contains the per-run state (symbol table, input and output streams) and
/// the stream helpers used by statements.
pub mod core;

/// Arithmetic expression evaluation.
///
/// Evaluates `+ - * /` expressions over integer literals and variables straight
/// from the token stream, with the usual precedence.
pub mod expression;

/// Statement execution.
///
/// Implements assignment, `ipakita` and `pasok`.
pub mod statement;

/// The program driver.
///
/// Checks the `simula() { ... }` skeleton and dispatches body statements.
pub mod program;

/// Utility functions for the evaluator.
///
/// Token expectations and the conversion of input lines into values.
pub mod utils;
