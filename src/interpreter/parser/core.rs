use std::{collections::HashSet, iter::Peekable};

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Span, Token},
        parser::{
            binary::{parse_relational, token_to_assign_operator},
            statement::{parse_function_definition, parse_global_declaration},
            utils::expect_token,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program from the token stream.
///
/// Grammar: `program := global_declaration* function_definition+`
///
/// Global declarations must all come before the first function definition.
/// After parsing, the program is validated: function names must be unique,
/// global names must be unique, and a `main` function with zero parameters
/// must exist.
///
/// # Parameters
/// - `tokens`: The full token stream produced by the tokenizer.
///
/// # Returns
/// The parsed [`Program`].
///
/// # Errors
/// Returns a `ParseError` for any grammar violation, duplicate definition, or
/// a missing/invalid `main`.
pub fn parse_program(tokens: &[(Token, Span)]) -> ParseResult<Program> {
    let last_span = tokens.last().map_or(Span { line: 1, column: 1 }, |(_, span)| *span);
    let mut iter = tokens.iter().peekable();

    let mut globals = Vec::new();
    let mut global_names = HashSet::new();
    while let Some((Token::Global, _)) = iter.peek() {
        let declaration = parse_global_declaration(&mut iter)?;
        if !global_names.insert(declaration.name.clone()) {
            return Err(ParseError::DuplicateGlobal { name:   declaration.name,
                                                     line:   declaration.line,
                                                     column: 1, });
        }
        globals.push(declaration);
    }

    let mut functions = Vec::new();
    let mut function_names = HashSet::new();
    while iter.peek().is_some() {
        let definition = parse_function_definition(&mut iter)?;
        if !function_names.insert(definition.name.clone()) {
            return Err(ParseError::DuplicateFunction { name:   definition.name,
                                                       line:   definition.line,
                                                       column: 1, });
        }
        if definition.name == "main" && !definition.func.params.is_empty() {
            return Err(ParseError::MainWithParameters { line:   definition.line,
                                                        column: 1, });
        }
        functions.push(definition);
    }

    if !function_names.contains("main") {
        return Err(ParseError::MissingMain { line:   last_span.line,
                                             column: last_span.column, });
    }

    Ok(Program { globals, functions })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. Assignment lives here, at
/// the lowest precedence level, and is right-associative: `a = b = c` parses
/// as `a = (b = c)`. It is only recognized at this entry point, never inside
/// a higher-precedence sub-parse, so `x + (y = 1)` requires the parentheses.
///
/// Grammar: `expression := ternary (assign_op expression)?`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns [`ParseError::InvalidAssignmentTarget`] when the left side of an
/// assignment operator is neither a variable nor an index expression.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let target = parse_ternary(tokens)?;

    if let Some((token, span)) = tokens.peek()
       && let Some(op) = token_to_assign_operator(token)
    {
        let span = *span;
        if !matches!(target, Expr::Variable { .. } | Expr::Index { .. }) {
            return Err(ParseError::InvalidAssignmentTarget { line:   span.line,
                                                             column: span.column, });
        }
        tokens.next();

        let value = parse_expression(tokens)?;

        return Ok(Expr::Assignment { target: Box::new(target),
                                     op,
                                     value: Box::new(value),
                                     line: span.line });
    }

    Ok(target)
}

/// Parses a ternary conditional expression.
///
/// Right-associative: `a ? b : c ? d : e` groups as `a ? b : (c ? d : e)`.
///
/// Grammar: `ternary := relational ("?" ternary ":" ternary)?`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
///
/// # Returns
/// A [`Expr::Ternary`] node, or the underlying comparison when no `?`
/// follows.
pub fn parse_ternary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let condition = parse_relational(tokens)?;

    if let Some((Token::Question, span)) = tokens.peek() {
        let span = *span;
        tokens.next();

        let then_branch = parse_ternary(tokens)?;
        expect_token(tokens, &Token::Colon, "':'")?;
        let else_branch = parse_ternary(tokens)?;

        return Ok(Expr::Ternary { condition:   Box::new(condition),
                                  then_branch: Box::new(then_branch),
                                  else_branch: Box::new(else_branch),
                                  line:        span.line, });
    }

    Ok(condition)
}
