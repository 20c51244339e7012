use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Span, Token},
        parser::{core::ParseResult, statement::parse_statement, utils::unexpected_end},
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements; parsing continues until the
/// closing `}` token is encountered. The resulting compound statement
/// introduces one new lexical scope when executed.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the opening brace.
///
/// # Returns
/// A [`Statement::Compound`] containing all parsed statements.
///
/// # Errors
/// Returns a `ParseError` if a statement fails to parse or the input ends
/// before the closing brace.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(unexpected_end()),
        }
    }

    Ok(Statement::Compound { statements, line })
}
