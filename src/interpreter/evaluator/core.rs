use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Expr, FuncBody, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{flow::Flow, scope::Scope},
        value::{
            core::Value,
            strings::{StrId, StrTable},
        },
    },
    util::num::checked_index,
};

/// A convenient alias for evaluation results.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The evaluation context: everything a running program reads or mutates.
///
/// A context holds the variable [`Scope`], the registered top-level functions,
/// the string intern table, and the control-flow state (the pending [`Flow`]
/// signal and the current loop nesting depth). One context corresponds to one
/// program run; create a fresh one per script.
///
/// # Example
/// ```
/// use quill::interpreter::evaluator::core::Context;
///
/// let program = quill::parse("func main() { return 2 + 3; }").unwrap();
/// let mut context = Context::new();
/// let result = context.interpret(&program).unwrap();
///
/// assert_eq!(context.render(&result), "5");
/// ```
#[derive(Debug, Default)]
pub struct Context {
    /// The variable environment.
    pub scope: Scope,
    /// Top-level functions by name, registered by [`Context::interpret`].
    pub functions: HashMap<String, Rc<FuncBody>>,
    /// The string intern table backing every string value of this run.
    strings: StrTable,
    /// The pending control-flow signal.
    pub(crate) flow: Flow,
    /// How many loops enclose the currently executing statement, within the
    /// current function call.
    pub(crate) loop_depth: usize,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a parsed program.
    ///
    /// Declares the globals, registers every function definition, and then
    /// calls `main` with no arguments. The context retains the resulting
    /// globals, functions, and interned strings afterwards, so the caller can
    /// render the returned value with [`Context::render`].
    ///
    /// # Parameters
    /// - `program`: The parsed program to execute.
    ///
    /// # Returns
    /// The value returned by `main`, or `none` if `main` ends without
    /// `return`.
    ///
    /// # Errors
    /// - `RuntimeError::IntrinsicRedefinition` if a function definition reuses
    ///   an intrinsic name.
    /// - Any `RuntimeError` raised while the program runs.
    pub fn interpret(&mut self, program: &Program) -> EvalResult<Value> {
        for global in &program.globals {
            self.scope.declare_global(&global.name);
        }

        for def in &program.functions {
            self.validate_function_name(&def.name, def.line)?;
            self.functions.insert(def.name.clone(), Rc::clone(&def.func));
        }

        // The parser guarantees a parameterless `main` exists.
        let Some(main) = self.functions.get("main").cloned() else {
            unreachable!()
        };

        self.invoke(&main, Vec::new(), "main", 0)
    }

    /// Evaluates a single expression to a value.
    ///
    /// # Parameters
    /// - `expr`: The expression to evaluate.
    ///
    /// # Returns
    /// The resulting [`Value`].
    ///
    /// # Errors
    /// Any `RuntimeError` the expression raises.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::Bool { value, .. } => Ok(Value::Bool(*value)),
            Expr::Char { value, .. } => Ok(Value::Char(*value)),
            Expr::Str { value, .. } => Ok(Value::Str(self.strings.intern(value))),
            Expr::Variable { name, line } => self.eval_variable(name, *line),

            Expr::UnaryOp { op, fixity, expr, line } => self.eval_unary(*op, *fixity, expr, *line),

            Expr::BinaryOp { left, op, right, line } => {
                self.eval_binary_op(left, *op, right, *line)
            },

            Expr::Ternary { condition, then_branch, else_branch, .. } => {
                self.eval_ternary(condition, then_branch, else_branch)
            },

            Expr::Assignment { target, op, value, line } => {
                self.eval_assignment(target, *op, value, *line)
            },

            Expr::Index { collection, index, line } => self.eval_index(collection, index, *line),
            Expr::ListLiteral { elements, .. } => self.eval_list_literal(elements),

            Expr::FunctionLiteral { func, .. } => Ok(Value::Function(Rc::clone(func))),
            Expr::FunctionCall { callee, arguments, line } => {
                self.eval_call(callee, arguments, *line)
            },

            Expr::IfExpr { condition,
                           then_branch,
                           elif_branches,
                           else_branch,
                           .. } => {
                self.eval_if_expr(condition, then_branch, elif_branches, else_branch.as_deref())
            },
        }
    }

    /// Executes a single statement.
    ///
    /// Statements do not produce values; `break`, `continue`, and `return`
    /// instead leave a [`Flow`] signal on the context which enclosing
    /// compounds, loops, and calls inspect.
    ///
    /// # Errors
    /// - `RuntimeError::ControlFlowMisuse` for `break` or `continue` outside
    ///   any loop.
    /// - Any `RuntimeError` raised by contained expressions.
    pub fn exec(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(())
            },

            Statement::Compound { statements, .. } => self.exec_compound(statements),

            Statement::If { condition,
                            then_branch,
                            elif_branches,
                            else_branch,
                            .. } => {
                self.exec_if(condition, then_branch, elif_branches, else_branch.as_deref())
            },

            Statement::For { init, condition, step, body, .. } => {
                self.exec_for(init.as_ref(), condition.as_ref(), step.as_ref(), body)
            },

            Statement::ForEach { variable, iterable, body, line } => {
                self.exec_foreach(variable, iterable, body, *line)
            },

            Statement::While { condition, body, .. } => self.exec_while(condition, body),
            Statement::DoWhile { body, condition, .. } => self.exec_do_while(body, condition),

            Statement::Break { line } => {
                if self.loop_depth == 0 {
                    return Err(RuntimeError::ControlFlowMisuse { statement: "break".to_string(),
                                                                 line:      *line, });
                }
                self.flow = Flow::Break;
                Ok(())
            },
            Statement::Continue { line } => {
                if self.loop_depth == 0 {
                    return Err(RuntimeError::ControlFlowMisuse { statement: "continue"
                                                                            .to_string(),
                                                                 line:      *line, });
                }
                self.flow = Flow::Continue;
                Ok(())
            },
            Statement::Return { value, .. } => {
                let result = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::None,
                };
                self.flow = Flow::Return(result);
                Ok(())
            },

            Statement::Empty { .. } => Ok(()),
        }
    }

    /// Executes a block of statements in one fresh scope frame.
    ///
    /// Execution stops early as soon as a statement leaves a non-normal flow
    /// signal; the signal itself propagates to the enclosing construct.
    pub(crate) fn exec_compound(&mut self, statements: &[Statement]) -> EvalResult<()> {
        self.scope.push_frame();

        let mut result = Ok(());
        for statement in statements {
            result = self.exec(statement);
            if result.is_err() || !self.flow.is_normal() {
                break;
            }
        }

        self.scope.pop_frame();
        result
    }

    fn exec_if(&mut self,
               condition: &Expr,
               then_branch: &Statement,
               elif_branches: &[(Expr, Statement)],
               else_branch: Option<&Statement>)
               -> EvalResult<()> {
        let line = condition.line_number();
        if self.eval(condition)?.as_bool(line)? {
            return self.exec(then_branch);
        }

        for (elif_condition, elif_body) in elif_branches {
            let line = elif_condition.line_number();
            if self.eval(elif_condition)?.as_bool(line)? {
                return self.exec(elif_body);
            }
        }

        if let Some(else_body) = else_branch {
            return self.exec(else_body);
        }
        Ok(())
    }

    /// Evaluates `cond ? a : b`. Only the chosen branch is evaluated.
    fn eval_ternary(&mut self,
                    condition: &Expr,
                    then_branch: &Expr,
                    else_branch: &Expr)
                    -> EvalResult<Value> {
        let line = condition.line_number();
        if self.eval(condition)?.as_bool(line)? {
            self.eval(then_branch)
        } else {
            self.eval(else_branch)
        }
    }

    /// Evaluates an if-expression; yields `none` when no branch matches.
    fn eval_if_expr(&mut self,
                    condition: &Expr,
                    then_branch: &Expr,
                    elif_branches: &[(Expr, Expr)],
                    else_branch: Option<&Expr>)
                    -> EvalResult<Value> {
        let line = condition.line_number();
        if self.eval(condition)?.as_bool(line)? {
            return self.eval(then_branch);
        }

        for (elif_condition, elif_value) in elif_branches {
            let line = elif_condition.line_number();
            if self.eval(elif_condition)?.as_bool(line)? {
                return self.eval(elif_value);
            }
        }

        match else_branch {
            Some(else_value) => self.eval(else_value),
            None => Ok(Value::None),
        }
    }

    /// Resolves a bare name to a value.
    ///
    /// The scope wins over the function table, so a local named like a
    /// top-level function shadows it. A scope miss falls back to top-level
    /// functions, which makes a named function a first-class value just as a
    /// function literal is.
    fn eval_variable(&mut self, name: &str, line: usize) -> EvalResult<Value> {
        if let Some(value) = self.scope.lookup(name) {
            return Ok(value.clone());
        }
        if let Some(func) = self.functions.get(name) {
            return Ok(Value::Function(Rc::clone(func)));
        }
        Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                              line })
    }

    /// Evaluates `collection[index]` on a list or a string.
    ///
    /// String indexing counts characters, not bytes, and yields a char value.
    fn eval_index(&mut self, collection: &Expr, index: &Expr, line: usize) -> EvalResult<Value> {
        let target = self.eval(collection)?;
        let position = self.eval(index)?.as_number(line)?;

        match target {
            Value::List(items) => {
                let items = items.borrow();
                let index = checked_index(position, items.len(), line)?;
                Ok(items[index].clone())
            },
            Value::Str(id) => {
                let text = self.strings.resolve(id);
                let index = checked_index(position, text.chars().count(), line)?;
                match text.chars().nth(index) {
                    Some(c) => Ok(Value::Char(c)),
                    None => unreachable!(),
                }
            },
            other => Err(RuntimeError::TypeMismatch { expected: "list or string".to_string(),
                                                      found:    other.kind_name().to_string(),
                                                      line }),
        }
    }

    /// Evaluates a list literal into fresh storage.
    fn eval_list_literal(&mut self, elements: &[Expr]) -> EvalResult<Value> {
        let mut items = Vec::with_capacity(elements.len());
        for element in elements {
            items.push(self.eval(element)?);
        }
        Ok(items.into())
    }

    /// Interns `text` into this context's string table.
    pub fn intern(&mut self, text: &str) -> StrId {
        self.strings.intern(text)
    }

    /// Renders a value as its host-facing text, resolving interned strings
    /// through this context's table.
    #[must_use]
    pub fn render(&self, value: &Value) -> String {
        value.render(&self.strings)
    }

    /// The string intern table of this run.
    #[must_use]
    pub const fn strings(&self) -> &StrTable {
        &self.strings
    }
}
