use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (identity sign)
///
/// Unary operators are right-associative, so an input like `-+x` is parsed
/// as `-(+x)`. A leading sign binds looser than exponentiation, so `-2 **
/// 2` parses as `-(2 ** 2)`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_power`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           line })
    } else if let Some((Token::Plus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Plus,
                           expr: Box::new(expr),
                           line })
    } else {
        parse_power(tokens)
    }
}

/// Parses an exponentiation expression.
///
/// Exponentiation is right-associative: `2 ** 3 ** 2` parses as
/// `2 ** (3 ** 2)`. The exponent is parsed at the unary level so a signed
/// exponent (`2 ** -1`) needs no parentheses.
///
/// Grammar: `power := primary ("**" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An exponentiation expression tree, or the bare primary.
pub(crate) fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens)?;
    if let Some((Token::DoubleStar, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let exponent = parse_unary(tokens)?;
        return Ok(Expr::BinaryOp { left: Box::new(base),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   line });
    }
    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - identifiers
/// - parenthesized expressions
///
/// An identifier followed by `(` is function-call syntax, which the
/// restricted grammar rejects by name rather than supporting.
///
/// Grammar:
/// ```text
///     primary := literal
///              | identifier
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Number(value), line) => {
            let (value, line) = (*value, *line);
            tokens.next();
            Ok(Expr::Literal { value, line })
        },
        (Token::Identifier(_), _) => parse_identifier(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses a variable reference.
///
/// Rejects function-call syntax: if the identifier is immediately followed
/// by `(`, the construct is refused by name instead of being parsed.
fn parse_identifier<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(name), line)) => (name.clone(), *line),
        _ => unreachable!(),
    };

    if let Some((Token::LParen, line)) = tokens.peek() {
        return Err(ParseError::UnsupportedConstruct { construct: format!("function call '{name}(...)'"),
                                                      line:      *line, });
    }

    Ok(Expr::Variable { name, line })
}

/// Parses a parenthesized grouping.
///
/// Grouping produces no AST node of its own; the inner expression is
/// returned directly.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::LParen, line)) => *line,
        _ => unreachable!(),
    };

    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),
        None => Err(ParseError::ExpectedClosingParen { line }),
    }
}
