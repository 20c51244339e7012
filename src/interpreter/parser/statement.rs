use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{FuncBody, FunctionDef, GlobalDecl, Statement},
    interpreter::{
        lexer::{Span, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier, unexpected_end},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a brace-delimited block,
/// - an `if` statement with optional `elif` chain and `else` branch,
/// - one of the four loop forms (`for`, `foreach`, `while`, `do...while`),
/// - `break;`, `continue;`, `return;`, or `return expr;`,
/// - the empty statement `;`,
/// - an expression statement terminated by `;`.
///
/// Loop bodies and conditional branches accept either a block or a single
/// statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Span)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let Some((token, span)) = tokens.peek() else {
        return Err(unexpected_end());
    };
    let line = span.line;

    match token {
        Token::LBrace => {
            tokens.next();
            parse_block(tokens, line)
        },
        Token::If => parse_if_statement(tokens, line),
        Token::For => parse_for_statement(tokens, line),
        Token::Foreach => parse_foreach_statement(tokens, line),
        Token::While => parse_while_statement(tokens, line),
        Token::Do => parse_do_while_statement(tokens, line),

        Token::Break => {
            tokens.next();
            expect_token(tokens, &Token::Semicolon, "';' after 'break'")?;
            Ok(Statement::Break { line })
        },
        Token::Continue => {
            tokens.next();
            expect_token(tokens, &Token::Semicolon, "';' after 'continue'")?;
            Ok(Statement::Continue { line })
        },
        Token::Return => {
            tokens.next();
            let value = if let Some((Token::Semicolon, _)) = tokens.peek() {
                None
            } else {
                Some(parse_expression(tokens)?)
            };
            expect_token(tokens, &Token::Semicolon, "';' after 'return'")?;
            Ok(Statement::Return { value, line })
        },

        Token::Semicolon => {
            tokens.next();
            Ok(Statement::Empty { line })
        },

        _ => {
            let expr = parse_expression(tokens)?;
            expect_token(tokens, &Token::Semicolon, "';' after expression")?;
            Ok(Statement::Expression { expr, line })
        },
    }
}

/// Parses an `if` statement with its optional `elif` chain and `else`
/// branch.
///
/// Grammar:
/// ```text
///     if := "if" "(" expression ")" statement
///           ("elif" "(" expression ")" statement)*
///           ("else" statement)?
/// ```
fn parse_if_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    expect_token(tokens, &Token::If, "'if'")?;
    expect_token(tokens, &Token::LParen, "'(' after 'if'")?;
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')' after condition")?;
    let then_branch = parse_statement(tokens)?;

    let mut elif_branches = Vec::new();
    while let Some((Token::Elif, _)) = tokens.peek() {
        tokens.next();
        expect_token(tokens, &Token::LParen, "'(' after 'elif'")?;
        let elif_condition = parse_expression(tokens)?;
        expect_token(tokens, &Token::RParen, "')' after condition")?;
        elif_branches.push((elif_condition, parse_statement(tokens)?));
    }

    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        Some(Box::new(parse_statement(tokens)?))
    } else {
        None
    };

    Ok(Statement::If { condition: Box::new(condition),
                       then_branch: Box::new(then_branch),
                       elif_branches,
                       else_branch,
                       line })
}

/// Parses a C-style `for` loop.
///
/// All three header clauses are optional; a missing condition means the loop
/// runs until a `break` or `return`.
///
/// Grammar: `for := "for" "(" expression? ";" expression? ";" expression? ")" statement`
fn parse_for_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    expect_token(tokens, &Token::For, "'for'")?;
    expect_token(tokens, &Token::LParen, "'(' after 'for'")?;

    let init = if let Some((Token::Semicolon, _)) = tokens.peek() {
        None
    } else {
        Some(parse_expression(tokens)?)
    };
    expect_token(tokens, &Token::Semicolon, "';' after loop initializer")?;

    let condition = if let Some((Token::Semicolon, _)) = tokens.peek() {
        None
    } else {
        Some(parse_expression(tokens)?)
    };
    expect_token(tokens, &Token::Semicolon, "';' after loop condition")?;

    let step = if let Some((Token::RParen, _)) = tokens.peek() {
        None
    } else {
        Some(parse_expression(tokens)?)
    };
    expect_token(tokens, &Token::RParen, "')' after loop header")?;

    let body = parse_statement(tokens)?;

    Ok(Statement::For { init,
                        condition,
                        step,
                        body: Box::new(body),
                        line })
}

/// Parses a `foreach` loop over a list, string, or range.
///
/// Grammar: `foreach := "foreach" "(" identifier "in" expression ")" statement`
fn parse_foreach_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    expect_token(tokens, &Token::Foreach, "'foreach'")?;
    expect_token(tokens, &Token::LParen, "'(' after 'foreach'")?;
    let (variable, _) = parse_identifier(tokens)?;
    expect_token(tokens, &Token::In, "'in' after loop variable")?;
    let iterable = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')' after iterable")?;

    let body = parse_statement(tokens)?;

    Ok(Statement::ForEach { variable,
                            iterable,
                            body: Box::new(body),
                            line })
}

/// Parses a `while` loop.
///
/// Grammar: `while := "while" "(" expression ")" statement`
fn parse_while_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    expect_token(tokens, &Token::While, "'while'")?;
    expect_token(tokens, &Token::LParen, "'(' after 'while'")?;
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')' after condition")?;

    let body = parse_statement(tokens)?;

    Ok(Statement::While { condition: Box::new(condition),
                          body: Box::new(body),
                          line })
}

/// Parses a `do ... while` loop, whose body runs at least once.
///
/// Grammar: `do_while := "do" statement "while" "(" expression ")" ";"`
fn parse_do_while_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    expect_token(tokens, &Token::Do, "'do'")?;
    let body = parse_statement(tokens)?;
    expect_token(tokens, &Token::While, "'while' after do-loop body")?;
    expect_token(tokens, &Token::LParen, "'(' after 'while'")?;
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')' after condition")?;
    expect_token(tokens, &Token::Semicolon, "';' after do-while")?;

    Ok(Statement::DoWhile { body: Box::new(body),
                            condition: Box::new(condition),
                            line })
}

/// Parses a top-level global variable declaration.
///
/// Globals are declared by name only and hold `none` until assigned.
///
/// Grammar: `global_declaration := "global" identifier ";"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `global` keyword.
///
/// # Returns
/// The parsed [`GlobalDecl`]. Duplicate names are rejected by the caller,
/// which sees all declarations.
pub fn parse_global_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<GlobalDecl>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let span = expect_token(tokens, &Token::Global, "'global'")?;
    let (name, _) = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Semicolon, "';' after global declaration")?;

    Ok(GlobalDecl { name,
                    line: span.line })
}

/// Parses a top-level function definition.
///
/// Grammar: `function_definition := "func" identifier "(" parameters ")" block`
///
/// The parameter list and body are shared behind `Rc` with the function
/// values the definition produces, so a function value's identity is the
/// identity of this node.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `func` keyword.
///
/// # Returns
/// The parsed [`FunctionDef`]. Name uniqueness and the `main` checks are
/// performed by the caller; collisions with intrinsic names are rejected at
/// registration time by the evaluator.
pub fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<FunctionDef>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let span = expect_token(tokens, &Token::Func, "'func'")?;
    let (name, _) = parse_identifier(tokens)?;

    expect_token(tokens, &Token::LParen, "'(' after function name")?;
    let params = parse_comma_separated(tokens,
                                       |tokens| parse_identifier(tokens).map(|(name, _)| name),
                                       &Token::RParen)?;

    let brace = expect_token(tokens, &Token::LBrace, "'{' to start function body")?;
    let body = parse_block(tokens, brace.line)?;

    Ok(FunctionDef { name,
                     func: Rc::new(FuncBody { params, body }),
                     line: span.line })
}
