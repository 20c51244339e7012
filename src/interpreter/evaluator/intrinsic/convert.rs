use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::f64_to_char_checked,
};

/// Renders any value to its text form and returns it as a string.
pub fn tostr(ctx: &mut Context, args: &[Expr], _line: usize) -> EvalResult<Value> {
    let value = ctx.eval(&args[0])?;
    let text = ctx.render(&value);
    Ok(Value::Str(ctx.intern(&text)))
}

/// Converts a value to a boolean.
///
/// Booleans pass through, numbers map to `value != 0`, and the strings
/// `"true"` and `"false"` map to their boolean. Everything else is a type
/// error.
pub fn tobool(ctx: &mut Context, args: &[Expr], line: usize) -> EvalResult<Value> {
    let value = ctx.eval(&args[0])?;

    let result = match &value {
        Value::Bool(b) => *b,
        Value::Number(n) => *n != 0.0,
        Value::Str(id) => match ctx.strings().resolve(*id) {
            "true" => true,
            "false" => false,
            _ => {
                return Err(type_error("boolean string", &value, line));
            },
        },
        _ => return Err(type_error("boolean, number, or string", &value, line)),
    };
    Ok(Value::Bool(result))
}

/// Converts a value to a number.
///
/// Numbers pass through, chars map to their code point, booleans to 0 or 1,
/// and strings are parsed as floating-point after trimming whitespace.
pub fn tonum(ctx: &mut Context, args: &[Expr], line: usize) -> EvalResult<Value> {
    let value = ctx.eval(&args[0])?;

    let result = match &value {
        Value::Number(n) => *n,
        Value::Char(c) => f64::from(u32::from(*c)),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Str(id) => {
            let text = ctx.strings().resolve(*id);
            match text.trim().parse::<f64>() {
                Ok(n) => n,
                Err(_) => return Err(type_error("numeric string", &value, line)),
            }
        },
        _ => return Err(type_error("number, char, boolean, or string", &value, line)),
    };
    Ok(Value::Number(result))
}

/// Converts a value to a char.
///
/// Chars pass through, integral numbers map to the code point they name, and
/// one-character strings yield their character.
pub fn tochar(ctx: &mut Context, args: &[Expr], line: usize) -> EvalResult<Value> {
    let value = ctx.eval(&args[0])?;

    let result = match &value {
        Value::Char(c) => *c,
        Value::Number(n) => f64_to_char_checked(*n, line)?,
        Value::Str(id) => {
            let mut chars = ctx.strings().resolve(*id).chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(type_error("single-character string", &value, line)),
            }
        },
        _ => return Err(type_error("char, number, or string", &value, line)),
    };
    Ok(Value::Char(result))
}

/// Explodes a string into a fresh list of its chars.
pub fn tolist(ctx: &mut Context, args: &[Expr], line: usize) -> EvalResult<Value> {
    let value = ctx.eval(&args[0])?;
    let id = value.as_string(line)?;

    let items: Vec<Value> = ctx.strings().resolve(id).chars().map(Value::Char).collect();
    Ok(items.into())
}

fn type_error(expected: &str, found: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeMismatch { expected: expected.to_string(),
                                 found:    found.kind_name().to_string(),
                                 line }
}
