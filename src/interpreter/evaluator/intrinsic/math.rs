use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Applies a unary math function, selected by name, to a numeric argument.
///
/// Chars coerce to their code point like everywhere else in arithmetic.
/// Domain errors follow IEEE semantics, so `sqrt(-1)` is NaN rather than a
/// runtime error.
pub fn unary_math(name: &str, ctx: &mut Context, args: &[Expr], line: usize) -> EvalResult<Value> {
    let op = match name {
        "sin" => f64::sin,
        "cos" => f64::cos,
        "tan" => f64::tan,
        "abs" => f64::abs,
        "sqrt" => f64::sqrt,
        "floor" => f64::floor,
        "ceil" => f64::ceil,
        _ => unreachable!(),
    };

    let value = ctx.eval(&args[0])?.as_number(line)?;
    Ok(Value::Number(op(value)))
}

/// Raises the first argument to the power of the second, like the `^`
/// operator.
pub fn pow(ctx: &mut Context, args: &[Expr], line: usize) -> EvalResult<Value> {
    let base = ctx.eval(&args[0])?.as_number(line)?;
    let exponent = ctx.eval(&args[1])?.as_number(line)?;
    Ok(Value::Number(base.powf(exponent)))
}
