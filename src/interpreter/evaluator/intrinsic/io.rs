use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Writes its arguments to stdout with no separator and no trailing newline,
/// then flushes so prompts appear before a following `input`.
///
/// # Returns
/// `Value::None`.
///
/// # Errors
/// `RuntimeError::IoFailed` if stdout cannot be written.
pub fn print(ctx: &mut Context, args: &[Expr], line: usize) -> EvalResult<Value> {
    let text = render_arguments(ctx, args)?;
    write_stdout(&text, line)?;
    Ok(Value::None)
}

/// Like `print`, with a trailing newline. Accepts zero arguments to emit a
/// bare newline.
pub fn println(ctx: &mut Context, args: &[Expr], line: usize) -> EvalResult<Value> {
    let mut text = render_arguments(ctx, args)?;
    text.push('\n');
    write_stdout(&text, line)?;
    Ok(Value::None)
}

/// Reads one line from stdin and returns it as a string, without the line
/// terminator.
///
/// With one argument, the argument is rendered and printed as a prompt
/// first. At end of input the empty string is returned.
///
/// # Errors
/// `RuntimeError::IoFailed` if stdin cannot be read or the prompt cannot be
/// written.
pub fn input(ctx: &mut Context, args: &[Expr], line: usize) -> EvalResult<Value> {
    if let Some(prompt) = args.first() {
        let text = ctx.eval(prompt)?;
        let text = ctx.render(&text);
        write_stdout(&text, line)?;
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_line(&mut buffer)
        .map_err(|e| RuntimeError::IoFailed { details: e.to_string(),
                                              line })?;

    while buffer.ends_with('\n') || buffer.ends_with('\r') {
        buffer.pop();
    }
    Ok(Value::Str(ctx.intern(&buffer)))
}

fn render_arguments(ctx: &mut Context, args: &[Expr]) -> EvalResult<String> {
    let mut text = String::new();
    for arg in args {
        let value = ctx.eval(arg)?;
        text.push_str(&ctx.render(&value));
    }
    Ok(text)
}

fn write_stdout(text: &str, line: usize) -> EvalResult<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())
          .and_then(|()| stdout.flush())
          .map_err(|e| RuntimeError::IoFailed { details: e.to_string(),
                                                line })
}
