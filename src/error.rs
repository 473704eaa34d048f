/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// source text. Parse errors include malformed syntax, unexpected tokens,
/// and grammar constructs that the restricted expression language refuses
/// to evaluate.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while applying a named
/// operation or evaluating an expression tree: unknown operation aliases,
/// division by zero, non-integer bitwise operands, undefined variables, and
/// unparseable numeric input.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
