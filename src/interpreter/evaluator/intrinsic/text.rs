use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Concatenates one or more strings into a new string.
///
/// Unlike `+`, which renders any operand to text, `concat` requires every
/// argument to already be a string.
pub fn concat(ctx: &mut Context, args: &[Expr], line: usize) -> EvalResult<Value> {
    let mut text = String::new();
    for arg in args {
        let id = ctx.eval(arg)?.as_string(line)?;
        text.push_str(ctx.strings().resolve(id));
    }
    Ok(Value::Str(ctx.intern(&text)))
}

/// Returns the length of a string (in chars) or a list (in elements).
#[allow(clippy::cast_precision_loss)]
pub fn len(ctx: &mut Context, args: &[Expr], line: usize) -> EvalResult<Value> {
    let value = ctx.eval(&args[0])?;

    let length = match &value {
        Value::Str(id) => ctx.strings().resolve(*id).chars().count(),
        Value::List(items) => items.borrow().len(),
        other => {
            return Err(RuntimeError::TypeMismatch { expected: "string or list".to_string(),
                                                    found:    other.kind_name().to_string(),
                                                    line });
        },
    };
    Ok(Value::Number(length as f64))
}

/// Returns whether a char is an ASCII decimal digit.
pub fn isdigit(ctx: &mut Context, args: &[Expr], line: usize) -> EvalResult<Value> {
    let c = ctx.eval(&args[0])?.as_char(line)?;
    Ok(Value::Bool(c.is_ascii_digit()))
}

/// Returns whether a char is whitespace.
pub fn isspace(ctx: &mut Context, args: &[Expr], line: usize) -> EvalResult<Value> {
    let c = ctx.eval(&args[0])?.as_char(line)?;
    Ok(Value::Bool(c.is_whitespace()))
}
