use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Applies `+`, the one overloaded operator.
    ///
    /// Dispatch, in order:
    /// - either side is a string: both sides render to text and concatenate
    ///   into a new string;
    /// - the left side is a list: the right side is appended to the list's
    ///   shared storage in place (element-wise when it is a list too), and
    ///   the same list is the result;
    /// - the right side is a list: the left value is prepended in place;
    /// - otherwise both sides must be numeric and add as numbers.
    ///
    /// The in-place list forms mean `xs + 1` mutates `xs`, which is what
    /// makes `xs = xs + 1` grow the list every other holder of `xs` sees.
    pub(crate) fn eval_add(&mut self, a: &Value, b: &Value, line: usize) -> EvalResult<Value> {
        if a.is_string() || b.is_string() {
            let text = format!("{}{}", self.render(a), self.render(b));
            return Ok(Value::Str(self.intern(&text)));
        }

        if let Value::List(items) = a {
            if let Value::List(other) = b {
                // Collect first so `xs + xs` does not hold two borrows.
                let appended: Vec<Value> = other.borrow().iter().cloned().collect();
                items.borrow_mut().extend(appended);
            } else {
                items.borrow_mut().push(b.clone());
            }
            return Ok(a.clone());
        }

        if let Value::List(items) = b {
            items.borrow_mut().insert(0, a.clone());
            return Ok(b.clone());
        }

        Ok(Value::Number(a.as_number(line)? + b.as_number(line)?))
    }

    /// Applies one of the purely numeric operators.
    ///
    /// Both operands must be numbers (chars coerce to their code point).
    /// Division follows IEEE rules; floor division is `/` rounded toward
    /// negative infinity, and `%` keeps the sign of the left operand.
    pub(crate) fn eval_arith(a: &Value,
                             op: BinaryOperator,
                             b: &Value,
                             line: usize)
                             -> EvalResult<Value> {
        let a = a.as_number(line)?;
        let b = b.as_number(line)?;

        let result = match op {
            BinaryOperator::Sub => a - b,
            BinaryOperator::Mul => a * b,
            BinaryOperator::Div => a / b,
            BinaryOperator::FloorDiv => (a / b).floor(),
            BinaryOperator::Mod => a % b,
            BinaryOperator::Pow => a.powf(b),
            _ => unreachable!(),
        };
        Ok(Value::Number(result))
    }
}
