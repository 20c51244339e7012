use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Applies a comparison operator.
    ///
    /// `==` and `!=` use the language's typed structural equality. The four
    /// ordering operators compare numbers and chars numerically (a char
    /// orders by its code point, also against numbers) and strings
    /// lexicographically by character; any other pairing is a type error.
    ///
    /// Numeric ordering is IEEE ordering, so every ordering operator
    /// involving NaN yields `false`.
    pub(crate) fn eval_comparison(&self,
                                  a: &Value,
                                  op: BinaryOperator,
                                  b: &Value,
                                  line: usize)
                                  -> EvalResult<Value> {
        let result = match op {
            BinaryOperator::Equal => a.eq_value(b, line)?,
            BinaryOperator::NotEqual => !a.eq_value(b, line)?,
            _ => self.eval_ordering(a, op, b, line)?,
        };
        Ok(Value::Bool(result))
    }

    fn eval_ordering(&self,
                     a: &Value,
                     op: BinaryOperator,
                     b: &Value,
                     line: usize)
                     -> EvalResult<bool> {
        match (a, b) {
            (Value::Number(_) | Value::Char(_), Value::Number(_) | Value::Char(_)) => {
                let (x, y) = (a.as_number(line)?, b.as_number(line)?);
                Ok(match op {
                    BinaryOperator::Less => x < y,
                    BinaryOperator::LessEqual => x <= y,
                    BinaryOperator::Greater => x > y,
                    BinaryOperator::GreaterEqual => x >= y,
                    _ => unreachable!(),
                })
            },

            (Value::Str(x), Value::Str(y)) => {
                let ordering = self.strings().resolve(*x).cmp(self.strings().resolve(*y));
                Ok(match op {
                    BinaryOperator::Less => ordering.is_lt(),
                    BinaryOperator::LessEqual => ordering.is_le(),
                    BinaryOperator::Greater => ordering.is_gt(),
                    BinaryOperator::GreaterEqual => ordering.is_ge(),
                    _ => unreachable!(),
                })
            },

            _ => Err(RuntimeError::TypeMismatch { expected: a.kind_name().to_string(),
                                                  found:    b.kind_name().to_string(),
                                                  line }),
        }
    }
}
