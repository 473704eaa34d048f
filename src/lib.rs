//! # tally
//!
//! tally is an interactive command-line calculator. It accepts named or
//! symbolic binary operations (`add`, `pow`, `xor`, `sigma`, ...) applied
//! to two numbers, and small arithmetic expressions with variable
//! assignment evaluated through a dedicated restricted-grammar parser —
//! never a general-purpose language evaluator, so user input can never
//! execute arbitrary code.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Environment,
        lexer::{LexerExtras, Token},
        parser::statement::parse_statement,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` and `Statement` enums that represent
/// the syntactic structure of input as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for the restricted grammar.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// evaluating expressions, or dispatching named operations. It standardizes
/// error reporting and carries detailed information about failures,
/// including the offending text where available.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the expression evaluation pipeline.
///
/// This module ties together lexing, parsing, evaluation, and error
/// handling to provide a complete runtime for expression input.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The operation dispatcher.
///
/// Maps named/symbolic operation aliases plus two numeric operands to a
/// result, with strict integer validation for bitwise and summation
/// operations. A leaf component with no dependencies on the interpreter.
///
/// # Responsibilities
/// - Resolves case-sensitive aliases to the closed operation set.
/// - Applies the operation, reporting division-by-zero and non-integer
///   operands.
pub mod ops;
/// General utilities shared by the dispatcher and the front end.
///
/// # Responsibilities
/// - Integrality checks on `f64` operands.
/// - Result formatting for display.
pub mod util;

/// Evaluates expression source text against a variable environment.
///
/// The source may contain several statements separated by line breaks; each
/// is either a single-target assignment (`x = 2 + 3`) or a bare expression.
/// Statements run in textual order, assignments become visible to later
/// statements immediately, and the result of the last statement is
/// returned. Empty input produces `Ok(None)` and leaves the environment
/// untouched.
///
/// The environment accumulates assignments across calls: pass the same
/// `Environment` to keep variables alive for a whole session.
///
/// # Errors
/// Returns an error if lexing or parsing fails, or if evaluation hits an
/// undefined variable.
///
/// # Examples
/// ```
/// use tally::{evaluate, interpreter::evaluator::core::Environment};
///
/// let mut env = Environment::new();
/// let result = evaluate("x = 10\nx * 2", &mut env).unwrap();
/// assert_eq!(result, Some(20.0));
/// assert_eq!(env.get("x"), Some(10.0));
///
/// // 'y' was never assigned.
/// assert!(evaluate("y + 1", &mut env).is_err());
/// ```
pub fn evaluate(source: &str,
                env: &mut Environment)
                -> Result<Option<f64>, Box<dyn std::error::Error>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(Box::new(ParseError::UnexpectedToken { token: slice.to_string(),
                                                              line:  lexer.extras.line, }));
        }
    }

    let mut iter = tokens.iter().peekable();

    let mut result = None;

    while iter.peek().is_some() {
        while let Some((Token::NewLine, _)) = iter.peek() {
            iter.next();
        }
        if iter.peek().is_none() {
            break;
        }

        let statement = parse_statement(&mut iter)?;

        // A statement ends at a line break or at the end of input.
        match iter.peek() {
            None | Some((Token::NewLine, _)) => {},
            Some((tok, line)) => {
                return Err(Box::new(ParseError::UnexpectedTrailingTokens { token:
                                                                               format!("{tok:?}"),
                                                                           line:  *line, }));
            },
        }

        result = Some(env.eval_statement(&statement)?);
    }

    Ok(result)
}
