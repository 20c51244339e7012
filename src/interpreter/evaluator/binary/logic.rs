use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Applies `and` or `or` to two boolean values.
    ///
    /// The operands arrive already evaluated, which is where the no-
    /// short-circuit rule comes from; this function only checks types and
    /// combines.
    pub(crate) fn eval_logic(a: &Value,
                             op: BinaryOperator,
                             b: &Value,
                             line: usize)
                             -> EvalResult<Value> {
        let a = a.as_bool(line)?;
        let b = b.as_bool(line)?;

        let result = match op {
            BinaryOperator::And => a && b,
            BinaryOperator::Or => a || b,
            _ => unreachable!(),
        };
        Ok(Value::Bool(result))
    }
}
