use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operator expression.
    ///
    /// Both operands are always evaluated, left first. The language has no
    /// short-circuiting: `false and f()` still calls `f`.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 line: usize)
                                 -> EvalResult<Value> {
        let a = self.eval(left)?;
        let b = self.eval(right)?;
        self.apply_binary(&a, op, &b, line)
    }

    /// Applies a binary operator to two already-evaluated values.
    ///
    /// Shared between [`Context::eval_binary_op`] and compound assignment,
    /// which combines the target's current value with the right-hand side
    /// through the same table.
    ///
    /// # Errors
    /// `RuntimeError::TypeMismatch` when the operand types do not fit the
    /// operator.
    pub(crate) fn apply_binary(&mut self,
                               a: &Value,
                               op: BinaryOperator,
                               b: &Value,
                               line: usize)
                               -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, FloorDiv, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Pow, Sub,
        };

        match op {
            Add => self.eval_add(a, b, line),
            Sub | Mul | Div | FloorDiv | Mod | Pow => Self::eval_arith(a, op, b, line),
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
                self.eval_comparison(a, op, b, line)
            },
            And | Or => Self::eval_logic(a, op, b, line),
        }
    }
}
