use std::{collections::HashSet, rc::Rc};

use crate::{
    ast::{Callee, Expr, FuncBody},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            flow::Flow,
            intrinsic::core::find_intrinsic,
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a function call expression.
    ///
    /// A call by name resolves against the intrinsics first, then the
    /// top-level functions, then function-valued variables in scope; the
    /// intrinsic layer cannot be shadowed. A call through an arbitrary callee
    /// expression requires the expression to produce a function value.
    ///
    /// # Errors
    /// - `RuntimeError::UndefinedFunction` when a name resolves to nothing.
    /// - `RuntimeError::ArityMismatch` when the argument count is wrong.
    /// - Any `RuntimeError` raised by the arguments or the body.
    pub(crate) fn eval_call(&mut self,
                            callee: &Callee,
                            arguments: &[Expr],
                            line: usize)
                            -> EvalResult<Value> {
        match callee {
            Callee::Name(name) => {
                if let Some(def) = find_intrinsic(name) {
                    return self.call_intrinsic(def, arguments, line);
                }

                if let Some(func) = self.functions.get(name).cloned() {
                    let args = self.eval_arguments(arguments)?;
                    return self.invoke(&func, args, name, line);
                }

                if let Some(value) = self.scope.lookup(name).cloned() {
                    let func = value.as_function(line)?;
                    let args = self.eval_arguments(arguments)?;
                    return self.invoke(&func, args, name, line);
                }

                Err(RuntimeError::UndefinedFunction { name: name.clone(),
                                                      line })
            },

            Callee::Expression(expr) => {
                let func = self.eval(expr)?.as_function(line)?;
                let args = self.eval_arguments(arguments)?;
                self.invoke(&func, args, "<anonymous>", line)
            },
        }
    }

    /// Evaluates call arguments left to right.
    fn eval_arguments(&mut self, arguments: &[Expr]) -> EvalResult<Vec<Value>> {
        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval(argument)?);
        }
        Ok(args)
    }

    /// Calls a function value with already-evaluated arguments.
    ///
    /// The call boundary isolates the caller completely: the callee sees only
    /// its parameters and the globals, starts with a clean flow signal at
    /// loop depth zero, and whatever signal or depth the caller had is
    /// restored afterwards. A pending `return` inside the callee becomes the
    /// call's result; falling off the end of the body yields `none`.
    ///
    /// # Parameters
    /// - `func`: The function body to run.
    /// - `args`: The evaluated arguments, bound positionally.
    /// - `name`: The callee's name, for error messages.
    /// - `line`: The source line of the call.
    pub(crate) fn invoke(&mut self,
                         func: &Rc<FuncBody>,
                         args: Vec<Value>,
                         name: &str,
                         line: usize)
                         -> EvalResult<Value> {
        if args.len() != func.params.len() {
            return Err(RuntimeError::ArityMismatch { name: name.to_string(),
                                                     line });
        }

        let params: HashSet<String> = func.params.iter().cloned().collect();
        let snapshot = self.scope.enter_call(params);
        let saved_flow = std::mem::take(&mut self.flow);
        let saved_depth = std::mem::replace(&mut self.loop_depth, 0);

        for (param, arg) in func.params.iter().zip(args) {
            self.scope.define_local(param, arg);
        }

        let result = self.exec(&func.body);

        let flow = std::mem::replace(&mut self.flow, saved_flow);
        self.loop_depth = saved_depth;
        self.scope.leave_call(snapshot);
        result?;

        Ok(match flow {
            Flow::Return(value) => value,
            _ => Value::None,
        })
    }
}
