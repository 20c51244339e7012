use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            flow::Flow,
        },
        value::core::Value,
    },
};

impl Context {
    /// Executes a C-style `for` loop.
    ///
    /// The header clauses share one scope frame with the body's iterations,
    /// so a variable introduced by the initializer is visible to the
    /// condition, the step, and the body. The step expression runs after
    /// every completed or continued iteration, but not after `break`.
    pub(crate) fn exec_for(&mut self,
                           init: Option<&Expr>,
                           condition: Option<&Expr>,
                           step: Option<&Expr>,
                           body: &Statement)
                           -> EvalResult<()> {
        self.scope.push_frame();
        self.loop_depth += 1;

        let result = self.run_for(init, condition, step, body);

        self.loop_depth -= 1;
        self.scope.pop_frame();
        result
    }

    fn run_for(&mut self,
               init: Option<&Expr>,
               condition: Option<&Expr>,
               step: Option<&Expr>,
               body: &Statement)
               -> EvalResult<()> {
        if let Some(init) = init {
            self.eval(init)?;
        }

        loop {
            if let Some(condition) = condition {
                let line = condition.line_number();
                if !self.eval(condition)?.as_bool(line)? {
                    break;
                }
            }

            self.exec(body)?;
            if self.loop_should_exit() {
                break;
            }

            if let Some(step) = step {
                self.eval(step)?;
            }
        }
        Ok(())
    }

    /// Executes a `foreach` loop over a list or a string.
    ///
    /// The iterable is evaluated once. The loop variable is rebound in the
    /// loop's own frame on every iteration; assigning to it inside the body
    /// does not affect the iterated collection.
    pub(crate) fn exec_foreach(&mut self,
                               variable: &str,
                               iterable: &Expr,
                               body: &Statement,
                               line: usize)
                               -> EvalResult<()> {
        let source = self.eval(iterable)?;

        self.scope.push_frame();
        self.loop_depth += 1;

        let result = self.run_foreach(variable, &source, body, line);

        self.loop_depth -= 1;
        self.scope.pop_frame();
        result
    }

    fn run_foreach(&mut self,
                   variable: &str,
                   source: &Value,
                   body: &Statement,
                   line: usize)
                   -> EvalResult<()> {
        match source {
            // Iteration is by index, with the length re-read each step, so a
            // body that appends to or shrinks the list stays well-defined.
            Value::List(items) => {
                let mut index = 0;
                loop {
                    let element = {
                        let items = items.borrow();
                        if index >= items.len() {
                            break;
                        }
                        items[index].clone()
                    };

                    self.scope.define_local(variable, element);
                    self.exec(body)?;
                    if self.loop_should_exit() {
                        break;
                    }
                    index += 1;
                }
                Ok(())
            },

            Value::Str(id) => {
                let chars: Vec<char> = self.strings().resolve(*id).chars().collect();
                for c in chars {
                    self.scope.define_local(variable, Value::Char(c));
                    self.exec(body)?;
                    if self.loop_should_exit() {
                        break;
                    }
                }
                Ok(())
            },

            other => Err(RuntimeError::TypeMismatch { expected: "list or string".to_string(),
                                                      found:    other.kind_name().to_string(),
                                                      line }),
        }
    }

    /// Executes a `while` loop.
    pub(crate) fn exec_while(&mut self, condition: &Expr, body: &Statement) -> EvalResult<()> {
        self.loop_depth += 1;
        let result = self.run_while(condition, body);
        self.loop_depth -= 1;
        result
    }

    fn run_while(&mut self, condition: &Expr, body: &Statement) -> EvalResult<()> {
        let line = condition.line_number();
        while self.eval(condition)?.as_bool(line)? {
            self.exec(body)?;
            if self.loop_should_exit() {
                break;
            }
        }
        Ok(())
    }

    /// Executes a `do ... while` loop; the body runs before the first test.
    pub(crate) fn exec_do_while(&mut self, body: &Statement, condition: &Expr) -> EvalResult<()> {
        self.loop_depth += 1;
        let result = self.run_do_while(body, condition);
        self.loop_depth -= 1;
        result
    }

    fn run_do_while(&mut self, body: &Statement, condition: &Expr) -> EvalResult<()> {
        let line = condition.line_number();
        loop {
            self.exec(body)?;
            if self.loop_should_exit() {
                break;
            }
            if !self.eval(condition)?.as_bool(line)? {
                break;
            }
        }
        Ok(())
    }

    /// Inspects the flow signal after one loop iteration.
    ///
    /// `break` is consumed and ends the loop; `continue` is consumed and the
    /// loop advances; a pending `return` is left in place and ends the loop
    /// so it can propagate to the call boundary.
    fn loop_should_exit(&mut self) -> bool {
        match std::mem::take(&mut self.flow) {
            Flow::Break => true,
            Flow::Normal | Flow::Continue => false,
            ret @ Flow::Return(_) => {
                self.flow = ret;
                true
            },
        }
    }
}
