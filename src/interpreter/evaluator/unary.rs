use crate::{
    ast::{Expr, Fixity, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::{checked_index, f64_to_char_checked},
};

impl Context {
    /// Evaluates a unary operator expression.
    ///
    /// `+`, `-`, and `not` are plain prefix operators. Increment and
    /// decrement mutate their operand, which must be a variable or a list
    /// element; the prefix form yields the new value and the postfix form the
    /// old one.
    pub(crate) fn eval_unary(&mut self,
                             op: UnaryOperator,
                             fixity: Fixity,
                             expr: &Expr,
                             line: usize)
                             -> EvalResult<Value> {
        match op {
            UnaryOperator::Plus => Ok(Value::Number(self.eval(expr)?.as_number(line)?)),
            UnaryOperator::Negate => Ok(Value::Number(-self.eval(expr)?.as_number(line)?)),
            UnaryOperator::Not => Ok(Value::Bool(!self.eval(expr)?.as_bool(line)?)),
            UnaryOperator::Increment => self.eval_step(expr, 1.0, fixity, line),
            UnaryOperator::Decrement => self.eval_step(expr, -1.0, fixity, line),
        }
    }

    /// Applies `++` or `--` to a variable or list element.
    ///
    /// Numbers step by one; chars step through their code points, so `'a'++`
    /// reads as `'a'` and leaves `'b'` behind. Everything else is a type
    /// error.
    fn eval_step(&mut self,
                 target: &Expr,
                 delta: f64,
                 fixity: Fixity,
                 line: usize)
                 -> EvalResult<Value> {
        match target {
            Expr::Variable { name, .. } => {
                let old = self.scope.lookup(name).cloned().ok_or_else(|| {
                    RuntimeError::UndefinedVariable { name: name.clone(),
                                                      line }
                })?;
                let new = Self::stepped(&old, delta, line)?;
                self.scope.set(name, new.clone());

                Ok(match fixity {
                    Fixity::Prefix => new,
                    Fixity::Postfix => old,
                })
            },

            Expr::Index { collection, index, .. } => {
                let items = self.eval(collection)?.as_list(line)?;
                let position = self.eval(index)?.as_number(line)?;

                let mut items = items.borrow_mut();
                let index = checked_index(position, items.len(), line)?;
                let old = items[index].clone();
                let new = Self::stepped(&old, delta, line)?;
                items[index] = new.clone();
                drop(items);

                Ok(match fixity {
                    Fixity::Prefix => new,
                    Fixity::Postfix => old,
                })
            },

            // The parser only builds increments with the two targets above.
            _ => unreachable!(),
        }
    }

    fn stepped(value: &Value, delta: f64, line: usize) -> EvalResult<Value> {
        match value {
            Value::Number(n) => Ok(Value::Number(n + delta)),
            Value::Char(c) => {
                Ok(Value::Char(f64_to_char_checked(f64::from(u32::from(*c)) + delta, line)?))
            },
            other => Err(RuntimeError::TypeMismatch { expected: "number or char".to_string(),
                                                      found:    other.kind_name().to_string(),
                                                      line }),
        }
    }
}
