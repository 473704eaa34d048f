use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_bit_or},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, bitwise OR, and recursively
/// descends through the precedence hierarchy:
///
/// ```text
///     expression := bit_or
///     bit_or     := bit_xor ("|" bit_xor)*
///     bit_xor    := bit_and ("^" bit_and)*
///     bit_and    := additive ("&" additive)*
///     additive   := multiplicative (("+" | "-") multiplicative)*
///     multiplicative := unary (("*" | "/") unary)*
///     unary      := ("+" | "-") unary | power
///     power      := primary ("**" unary)?
/// ```
///
/// The precedence order matches standard arithmetic grammar: bitwise
/// operators bind loosest, exponentiation binds tightest and is
/// right-associative, and a leading sign binds looser than `**` so that
/// `-2 ** 2` is `-(2 ** 2)`.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_bit_or(tokens)?;

    if let Some((token, line)) = tokens.peek()
       && let Some(construct) = rejected_construct(token)
    {
        return Err(ParseError::UnsupportedConstruct { construct: construct.to_string(),
                                                      line:      *line, });
    }

    Ok(expr)
}

/// Names tokens the lexer recognizes but the grammar refuses to evaluate.
///
/// Comparisons and comma-separated forms are valid syntax in richer
/// languages; rejecting them by name gives a clearer error than treating
/// them as stray trailing tokens.
const fn rejected_construct(token: &Token) -> Option<&'static str> {
    match token {
        Token::EqualEqual
        | Token::BangEqual
        | Token::Less
        | Token::Greater
        | Token::LessEqual
        | Token::GreaterEqual => Some("comparison"),
        Token::Comma => Some("comma-separated expressions"),
        _ => None,
    }
}
