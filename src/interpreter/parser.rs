/// Core parsing entry points.
///
/// Contains the shared `ParseResult` alias and the expression entry point
/// that starts the precedence descent.
pub mod core;

/// Unary and primary parsing.
///
/// Handles prefix sign operators, numeric literals, identifiers, grouping,
/// and the postfix check that rejects function-call syntax.
pub mod unary;

/// Binary operator parsing.
///
/// Implements one function per precedence level, from bitwise OR at the
/// bottom up to right-associative exponentiation.
pub mod binary;

/// Statement parsing.
///
/// Distinguishes single-target assignments from bare expression statements
/// and rejects unsupported statement forms by name.
pub mod statement;
