use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Callee, Expr, Fixity, FuncBody, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Span, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier, unexpected_end,
                    unexpected_token},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+`, `-`, `not`, `++`, and `--`. Prefix
/// operators are right-associative, so `not not x` parses as `not (not x)`.
///
/// The operand of a prefix operator is another unary expression, which puts
/// prefix operators *below* exponentiation: `-2 ^ 3` parses as `-(2 ^ 3)`.
/// Prefix `++` and `--` additionally require their operand to be a variable
/// or an index expression, since they write back to it.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "not" | "++" | "--") unary
///            | exponent
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or an exponent-level expression.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let Some((token, span)) = tokens.peek() else {
        return Err(unexpected_end());
    };
    let span = *span;

    let op = match token {
        Token::Plus => Some(UnaryOperator::Plus),
        Token::Minus => Some(UnaryOperator::Negate),
        Token::Not => Some(UnaryOperator::Not),
        Token::PlusPlus => Some(UnaryOperator::Increment),
        Token::MinusMinus => Some(UnaryOperator::Decrement),
        _ => None,
    };

    if let Some(op) = op {
        tokens.next();
        let expr = parse_unary(tokens)?;

        if matches!(op, UnaryOperator::Increment | UnaryOperator::Decrement)
           && !matches!(expr, Expr::Variable { .. } | Expr::Index { .. })
        {
            return Err(ParseError::InvalidAssignmentTarget { line:   span.line,
                                                             column: span.column, });
        }

        return Ok(Expr::UnaryOp { op,
                                  fixity: Fixity::Prefix,
                                  expr: Box::new(expr),
                                  line: span.line });
    }

    parse_exponent(tokens)
}

/// Parses an exponentiation expression.
///
/// Right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`. The right-hand
/// side is parsed at the unary level so a prefix sign may appear in the
/// exponent (`2 ^ -3`), while the base is a postfix-level expression.
///
/// Grammar: `exponent := postfix ("^" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An exponentiation expression tree or the underlying postfix expression.
fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let primary = parse_primary(tokens)?;
    let base = parse_postfix(tokens, primary)?;

    if let Some((Token::Caret, span)) = tokens.peek() {
        let line = span.line;
        tokens.next();

        let right = parse_unary(tokens)?;

        return Ok(Expr::BinaryOp { left: Box::new(base),
                                   op: crate::ast::BinaryOperator::Pow,
                                   right: Box::new(right),
                                   line });
    }

    Ok(base)
}

/// Parses postfix operators applied to an expression.
///
/// Handles three kinds of postfix constructs, chained in any order:
///
/// 1. Indexing: `expr[index]`, possibly chained (`a[0][1]`).
/// 2. Calls: `expr(args)`. The callee here is an arbitrary expression, such
///    as an element of a list of closures or an immediately invoked function
///    literal. A bare-name call is recognized earlier, in [`parse_primary`].
/// 3. Postfix `++` and `--`, which require the expression so far to be a
///    variable or an index expression.
///
/// Grammar:
/// ```text
///     postfix := primary
///              | postfix "[" expression "]"
///              | postfix "(" arguments ")"
///              | postfix ("++" | "--")
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator after a primary expression.
/// - `node`: The expression to which postfix operators will be applied.
///
/// # Returns
/// An updated [`Expr`] with all postfix operators folded in.
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut node: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    loop {
        match tokens.peek() {
            Some((Token::LBracket, span)) => {
                let line = span.line;
                tokens.next();
                let index = parse_expression(tokens)?;
                expect_token(tokens, &Token::RBracket, "']' after index")?;
                node = Expr::Index { collection: Box::new(node),
                                     index: Box::new(index),
                                     line };
            },

            Some((Token::LParen, span)) => {
                let line = span.line;
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                node = Expr::FunctionCall { callee: Callee::Expression(Box::new(node)),
                                            arguments,
                                            line };
            },

            Some((token @ (Token::PlusPlus | Token::MinusMinus), span)) => {
                let span = *span;
                let op = if matches!(token, Token::PlusPlus) {
                    UnaryOperator::Increment
                } else {
                    UnaryOperator::Decrement
                };
                if !matches!(node, Expr::Variable { .. } | Expr::Index { .. }) {
                    return Err(ParseError::InvalidAssignmentTarget { line:   span.line,
                                                                     column: span.column, });
                }
                tokens.next();
                node = Expr::UnaryOp { op,
                                       fixity: Fixity::Postfix,
                                       expr: Box::new(node),
                                       line: span.line };
            },

            _ => break,
        }
    }
    Ok(node)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - number, string, char, and boolean literals
/// - variables and named function calls
/// - parenthesized expressions
/// - list literals and `[a..b]` ranges
/// - function literals (`func (x) { ... }`)
/// - if-expressions
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let Some((token, span)) = tokens.peek() else {
        return Err(unexpected_end());
    };
    let span = *span;
    let line = span.line;

    match token {
        Token::Number(value) => {
            let value = *value;
            tokens.next();
            Ok(Expr::Number { value, line })
        },
        Token::Str(value) => {
            let value = value.clone();
            tokens.next();
            Ok(Expr::Str { value, line })
        },
        Token::Char(value) => {
            let value = *value;
            tokens.next();
            Ok(Expr::Char { value, line })
        },
        Token::Bool(value) => {
            let value = *value;
            tokens.next();
            Ok(Expr::Bool { value, line })
        },

        Token::Identifier(_) => parse_variable_or_call(tokens),

        Token::LParen => {
            tokens.next();
            let inner = parse_expression(tokens)?;
            expect_token(tokens, &Token::RParen, "')'")?;
            Ok(inner)
        },

        Token::LBracket => parse_list_or_range(tokens),

        Token::Func => parse_function_literal(tokens),

        Token::If => parse_if_expression(tokens),

        token => Err(unexpected_token("expression", token, span)),
    }
}

/// Parses an identifier, deciding between a variable reference and a named
/// function call by peeking for `(`.
///
/// A named call keeps the name rather than wrapping it in a variable
/// expression, because the evaluator resolves call names specially: the
/// intrinsic table is consulted first, then user-defined functions, and only
/// then function-valued variables.
fn parse_variable_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let (name, span) = parse_identifier(tokens)?;
    let line = span.line;

    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
        return Ok(Expr::FunctionCall { callee: Callee::Name(name),
                                       arguments,
                                       line });
    }

    Ok(Expr::Variable { name, line })
}

/// Parses a list literal or a range after the opening `[`.
///
/// The two forms share the opening bracket; the parser commits only after
/// parsing the first element and peeking one token:
///
/// - `[a .. b]` is a range, desugared to a call of the `range` intrinsic.
/// - anything else is a list literal, possibly empty.
///
/// Grammar:
/// ```text
///     list  := "[" (expression ("," expression)*)? "]"
///     range := "[" expression ".." expression "]"
/// ```
fn parse_list_or_range<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let span = expect_token(tokens, &Token::LBracket, "'['")?;
    let line = span.line;

    if let Some((Token::RBracket, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::ListLiteral { elements: Vec::new(),
                                      line });
    }

    let first = parse_expression(tokens)?;

    if let Some((Token::DotDot, _)) = tokens.peek() {
        tokens.next();
        let end = parse_expression(tokens)?;
        expect_token(tokens, &Token::RBracket, "']' after range")?;
        return Ok(Expr::FunctionCall { callee:    Callee::Name("range".to_string()),
                                       arguments: vec![first, end],
                                       line });
    }

    let mut elements = vec![first];
    loop {
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
                elements.push(parse_expression(tokens)?);
            },
            Some((Token::RBracket, _)) => {
                tokens.next();
                break;
            },
            Some((token, span)) => return Err(unexpected_token("',' or ']'", token, *span)),
            None => return Err(unexpected_end()),
        }
    }

    Ok(Expr::ListLiteral { elements, line })
}

/// Parses an anonymous function literal after peeking `func`.
///
/// Grammar: `function_literal := "func" "(" parameters ")" block`
///
/// The body is wrapped in a single shared [`FuncBody`] allocation; every
/// evaluation of this literal yields a function value with the same identity.
fn parse_function_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let span = expect_token(tokens, &Token::Func, "'func'")?;
    let line = span.line;

    expect_token(tokens, &Token::LParen, "'(' after 'func'")?;
    let params = parse_comma_separated(tokens,
                                       |tokens| parse_identifier(tokens).map(|(name, _)| name),
                                       &Token::RParen)?;

    let brace = expect_token(tokens, &Token::LBrace, "'{' to start function body")?;
    let body = parse_block(tokens, brace.line)?;

    Ok(Expr::FunctionLiteral { func: Rc::new(FuncBody { params, body }),
                               line })
}

/// Parses an `if` expression with optional `elif` chain and `else` branch.
///
/// Unlike the `if` statement, every branch is an expression, and the whole
/// construct evaluates to the chosen branch's value (`none` when no branch
/// matches). Statement context wins when both parses are possible: a
/// statement starting with `if` is always parsed as an `if` statement.
///
/// Grammar:
/// ```text
///     if_expr := "if" "(" expression ")" expression
///                ("elif" "(" expression ")" expression)*
///                ("else" expression)?
/// ```
fn parse_if_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let span = expect_token(tokens, &Token::If, "'if'")?;
    let line = span.line;

    expect_token(tokens, &Token::LParen, "'(' after 'if'")?;
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')' after condition")?;
    let then_branch = parse_expression(tokens)?;

    let mut elif_branches = Vec::new();
    while let Some((Token::Elif, _)) = tokens.peek() {
        tokens.next();
        expect_token(tokens, &Token::LParen, "'(' after 'elif'")?;
        let elif_condition = parse_expression(tokens)?;
        expect_token(tokens, &Token::RParen, "')' after condition")?;
        let elif_branch = parse_expression(tokens)?;
        elif_branches.push((elif_condition, elif_branch));
    }

    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        Some(Box::new(parse_expression(tokens)?))
    } else {
        None
    };

    Ok(Expr::IfExpr { condition: Box::new(condition),
                      then_branch: Box::new(then_branch),
                      elif_branches,
                      else_branch,
                      line })
}
