use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Span, Token},
        parser::core::ParseResult,
    },
};

/// Builds the error for a token stream that ended before the grammar allowed
/// it to.
///
/// The token iterator cannot report a position once it is exhausted, so the
/// error points at the zero position; callers that know a better position
/// construct [`ParseError::UnexpectedEndOfInput`] directly.
pub(in crate::interpreter::parser) const fn unexpected_end() -> ParseError {
    ParseError::UnexpectedEndOfInput { line: 0, column: 0 }
}

/// Builds an [`ParseError::UnexpectedToken`] describing what was expected and
/// what was found.
pub(in crate::interpreter::parser) fn unexpected_token(what: &str,
                                                       token: &Token,
                                                       span: Span)
                                                       -> ParseError {
    ParseError::UnexpectedToken { token:  format!("Expected {what}, found {token:?}"),
                                  line:   span.line,
                                  column: span.column, }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected`: The token that must come next.
/// - `what`: Human-readable description used in the error message.
///
/// # Returns
/// The span of the consumed token.
///
/// # Errors
/// Returns a `ParseError` if the next token differs or the input ends.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          what: &str)
                                                          -> ParseResult<Span>
    where I: Iterator<Item = &'a (Token, Span)>
{
    match tokens.next() {
        Some((token, span)) if token == expected => Ok(*span),
        Some((token, span)) => Err(unexpected_token(what, token, *span)),
        None => Err(unexpected_end()),
    }
}

/// Parses a plain identifier and returns its name with its span.
///
/// This function does not check for collisions with intrinsic names; callers
/// that bind the identifier must handle that.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// The identifier text and the span it starts at.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the input
/// ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, Span)>
    where I: Iterator<Item = &'a (Token, Span)>
{
    match tokens.next() {
        Some((Token::Identifier(name), span)) => Ok((name.clone(), *span)),
        Some((token, span)) => Err(unexpected_token("identifier", token, *span)),
        None => Err(unexpected_end()),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by list literals, call argument lists, and
/// parameter lists. It repeatedly calls `parse_item` to parse one element,
/// expecting either a comma to continue the list or the closing token to end
/// it. An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g. `]` or `)`).
///
/// # Returns
/// A vector of parsed items; the closing token has been consumed.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut items = Vec::new();
    if let Some((token, _)) = tokens.peek()
       && *token == *closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((token, _)) if *token == *closing => {
                tokens.next();
                break;
            },
            Some((token, span)) => {
                return Err(unexpected_token(&format!("',' or {closing:?}"), token, *span));
            },
            None => return Err(unexpected_end()),
        }
    }
    Ok(items)
}
