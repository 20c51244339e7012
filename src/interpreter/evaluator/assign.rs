use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::checked_index,
};

impl Context {
    /// Evaluates an assignment expression and yields the assigned value.
    ///
    /// Plain assignment (`op` is `None`) stores the right-hand side into the
    /// target. Compound assignment reads the target's current value, combines
    /// it with the right-hand side through the operator, and stores the
    /// result; the current value is read before the right-hand side is
    /// evaluated.
    ///
    /// Targets are variables or list elements. Indexed assignment requires a
    /// list; strings are immutable, so writing through a string index is a
    /// type error.
    ///
    /// # Errors
    /// - `RuntimeError::UndefinedVariable` for a compound assignment to a
    ///   variable that does not exist yet.
    /// - `RuntimeError::TypeMismatch` or `RuntimeError::IndexOutOfRange` for
    ///   bad indexed targets.
    pub(crate) fn eval_assignment(&mut self,
                                  target: &Expr,
                                  op: Option<BinaryOperator>,
                                  value: &Expr,
                                  line: usize)
                                  -> EvalResult<Value> {
        match target {
            Expr::Variable { name, .. } => {
                let result = match op {
                    None => self.eval(value)?,
                    Some(op) => {
                        let old = self.scope.lookup(name).cloned().ok_or_else(|| {
                            RuntimeError::UndefinedVariable { name: name.clone(),
                                                              line }
                        })?;
                        let rhs = self.eval(value)?;
                        self.apply_binary(&old, op, &rhs, line)?
                    },
                };
                self.scope.set(name, result.clone());
                Ok(result)
            },

            Expr::Index { collection, index, .. } => {
                let items = self.eval(collection)?.as_list(line)?;
                let position = self.eval(index)?.as_number(line)?;

                let result = match op {
                    None => self.eval(value)?,
                    Some(op) => {
                        let old = {
                            let items = items.borrow();
                            let index = checked_index(position, items.len(), line)?;
                            items[index].clone()
                        };
                        let rhs = self.eval(value)?;
                        self.apply_binary(&old, op, &rhs, line)?
                    },
                };

                // The right-hand side may have resized the list, so the
                // bounds check happens against its current length.
                let mut items = items.borrow_mut();
                let index = checked_index(position, items.len(), line)?;
                items[index] = result.clone();
                drop(items);

                Ok(result)
            },

            // The parser only builds assignments with the two targets above.
            _ => unreachable!(),
        }
    }
}
