use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Span, Token},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses equality and relational expressions.
///
/// Handles all six comparison operators in one left-associative level:
/// `==`, `!=`, `<`, `<=`, `>`, `>=`. Comparisons bind *looser* than the
/// logical operators in this grammar, so `a == b and c` parses as
/// `a == (b and c)`; comparisons of logical results need parentheses.
///
/// Grammar: `relational := logical_or (("==" | "!=" | "<" | "<=" | ">" | ">=") logical_or)*`
///
/// # Parameters
/// - `tokens`: Token stream with span information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut left = parse_logical_or(tokens)?;
    loop {
        if let Some((token, span)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Equal
                       | BinaryOperator::NotEqual
                       | BinaryOperator::Less
                       | BinaryOperator::LessEqual
                       | BinaryOperator::Greater
                       | BinaryOperator::GreaterEqual)
        {
            let line = span.line;
            tokens.next();
            let right = parse_logical_or(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `or`. Precedence is lower than `and`.
///
/// Grammar: `logical_or := logical_and ("or" logical_and)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::Or`.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut left = parse_logical_and(tokens)?;

    loop {
        if let Some((Token::Or, span)) = tokens.peek() {
            let line = span.line;
            tokens.next();

            let right = parse_logical_and(tokens)?;

            left = Expr::BinaryOp { left: Box::new(left),
                                    op: BinaryOperator::Or,
                                    right: Box::new(right),
                                    line };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `and`. Precedence is higher than `or`
/// and lower than the additive operators.
///
/// Grammar: `logical_and := additive ("and" additive)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::And`.
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut left = parse_additive(tokens)?;

    loop {
        if let Some((Token::And, span)) = tokens.peek() {
            let line = span.line;
            tokens.next();

            let right = parse_additive(tokens)?;

            left = Expr::BinaryOp { left: Box::new(left),
                                    op: BinaryOperator::And,
                                    right: Box::new(right),
                                    line };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with span information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some((token, span)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = span.line;
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/`, `//`, and `%`.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "//" | "%") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with span information.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some((token, span)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul
                       | BinaryOperator::Div
                       | BinaryOperator::FloorDiv
                       | BinaryOperator::Mod)
        {
            let line = span.line;
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (arithmetic, comparison, or logical). Returns `None` for all other tokens.
///
/// # Example
/// ```
/// use quill::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::DoubleSlash => Some(BinaryOperator::FloorDiv),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Maps a token to an assignment operator.
///
/// The outer `Option` says whether the token is an assignment at all; the
/// inner `Option` is the combining operator, with `None` for plain `=`.
///
/// # Example
/// ```
/// use quill::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_assign_operator},
/// };
///
/// assert_eq!(token_to_assign_operator(&Token::Equals), Some(None));
/// assert_eq!(token_to_assign_operator(&Token::PlusAssign),
///            Some(Some(BinaryOperator::Add)));
/// assert_eq!(token_to_assign_operator(&Token::Plus), None);
/// ```
#[must_use]
pub const fn token_to_assign_operator(token: &Token) -> Option<Option<BinaryOperator>> {
    match token {
        Token::Equals => Some(None),
        Token::PlusAssign => Some(Some(BinaryOperator::Add)),
        Token::MinusAssign => Some(Some(BinaryOperator::Sub)),
        Token::MulAssign => Some(Some(BinaryOperator::Mul)),
        Token::DivAssign => Some(Some(BinaryOperator::Div)),
        Token::DoubleSlashAssign => Some(Some(BinaryOperator::FloorDiv)),
        Token::CaretAssign => Some(Some(BinaryOperator::Pow)),
        Token::PercentAssign => Some(Some(BinaryOperator::Mod)),
        _ => None,
    }
}
