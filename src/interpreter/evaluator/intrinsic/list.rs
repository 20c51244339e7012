use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::{checked_index, f64_to_i64_checked},
};

/// Appends a value to a list in place and returns the list.
///
/// The result wraps the same shared storage, so chaining
/// `append(append(xs, 1), 2)` mutates one list.
pub fn append(ctx: &mut Context, args: &[Expr], line: usize) -> EvalResult<Value> {
    let items = ctx.eval(&args[0])?.as_list(line)?;
    let value = ctx.eval(&args[1])?;

    items.borrow_mut().push(value);
    Ok(Value::List(items))
}

/// Builds the half-open integer range `[a, b)` as a fresh list of numbers.
///
/// Both bounds must be integers; `a >= b` yields the empty list. This is
/// also what the range literal `[a..b]` desugars to.
#[allow(clippy::cast_precision_loss)]
pub fn range(ctx: &mut Context, args: &[Expr], line: usize) -> EvalResult<Value> {
    let start = f64_to_i64_checked(ctx.eval(&args[0])?.as_number(line)?, line)?;
    let end = f64_to_i64_checked(ctx.eval(&args[1])?.as_number(line)?, line)?;

    let items: Vec<Value> = (start..end).map(|i| Value::Number(i as f64)).collect();
    Ok(items.into())
}

/// Removes the first element structurally equal to a value, in place, and
/// returns the list.
///
/// Elements of a different, incomparable type simply do not match; removing
/// a value that is absent is a no-op.
pub fn remove(ctx: &mut Context, args: &[Expr], line: usize) -> EvalResult<Value> {
    let items = ctx.eval(&args[0])?.as_list(line)?;
    let target = ctx.eval(&args[1])?;

    let position = items.borrow()
                        .iter()
                        .position(|item| item.eq_value(&target, line).unwrap_or(false));
    if let Some(position) = position {
        items.borrow_mut().remove(position);
    }
    Ok(Value::List(items))
}

/// Removes the element at an index, in place, and returns the list.
pub fn removeat(ctx: &mut Context, args: &[Expr], line: usize) -> EvalResult<Value> {
    let items = ctx.eval(&args[0])?.as_list(line)?;
    let position = ctx.eval(&args[1])?.as_number(line)?;

    let mut borrowed = items.borrow_mut();
    let index = checked_index(position, borrowed.len(), line)?;
    borrowed.remove(index);
    drop(borrowed);

    Ok(Value::List(items))
}

/// Returns a deep copy of a value.
///
/// Lists are copied recursively into fresh storage; every other value is
/// returned unchanged, so `clone` is how aliasing is broken.
pub fn clone_value(ctx: &mut Context, args: &[Expr], _line: usize) -> EvalResult<Value> {
    Ok(ctx.eval(&args[0])?.deep_copy())
}
