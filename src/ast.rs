use std::rc::Rc;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all types of expressions, from literals and variables to
/// calls, arithmetic, conditionals, assignments, lists, and function literals.
/// Each variant models a distinct syntactic construct and carries the source
/// line it came from. The tree is built once by the parser and never mutated;
/// the evaluator only borrows it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `42`, `3.14` or `.5`.
    Number {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal: `true` or `false`.
    Bool {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal with escapes already decoded. The text is interned
    /// into the string table when the literal is evaluated.
    Str {
        /// The decoded text.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A char literal such as `'a'` or `'\n'`.
    Char {
        /// The literal character.
        value: char,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation, prefix (`-x`, `not b`, `++x`) or postfix (`x++`).
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// Whether the operator was written before or after its operand.
        fixity: Fixity,
        /// The operand expression.
        expr:   Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A ternary conditional expression `cond ? a : b`.
    Ternary {
        /// The condition expression; must evaluate to a boolean.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is true.
        then_branch: Box<Self>,
        /// Expression evaluated if the condition is false.
        else_branch: Box<Self>,
        /// Line number in the source code.
        line:        usize,
    },
    /// An assignment expression, plain (`x = v`) or compound (`x += v`).
    ///
    /// The parser guarantees the target is a [`Expr::Variable`] or an
    /// [`Expr::Index`]. Assignments are expressions and yield the assigned
    /// value.
    Assignment {
        /// The assignment target.
        target: Box<Self>,
        /// The combining operator for compound forms; `None` for plain `=`.
        op:     Option<BinaryOperator>,
        /// The value being assigned.
        value:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// An indexing expression (e.g. `xs[2]`), valid on lists and strings.
    Index {
        /// The list or string to index into.
        collection: Box<Self>,
        /// The index to access.
        index:      Box<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// List literal expression (e.g. `[1, 'a', "text"]`).
    ///
    /// Every evaluation of the literal allocates fresh storage; two literals
    /// never alias each other.
    ListLiteral {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// An anonymous function literal (e.g. `func (x) { return x * x; }`).
    ///
    /// The body is shared behind `Rc` so every evaluation of the same literal
    /// produces a function value with the same identity.
    FunctionLiteral {
        /// The parameter list and body.
        func: Rc<FuncBody>,
        /// Line number in the source code.
        line: usize,
    },
    /// A function call, either by name (`len(xs)`) or through an arbitrary
    /// expression that evaluates to a function (`fns[0](3)`).
    FunctionCall {
        /// What is being called.
        callee:    Callee,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Conditional ("if-elif-else") expression with expression branches,
    /// evaluating to the chosen branch or `none` when no branch matches.
    IfExpr {
        /// The primary condition expression.
        condition:     Box<Self>,
        /// Expression evaluated if the condition is true.
        then_branch:   Box<Self>,
        /// `elif` conditions and their branch expressions, in order.
        elif_branches: Vec<(Self, Self)>,
        /// Expression evaluated if no condition is true.
        else_branch:   Option<Box<Self>>,
        /// Line number in the source code.
        line:          usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use quill::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(), line: 5 };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Bool { line, .. }
            | Self::Str { line, .. }
            | Self::Char { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Ternary { line, .. }
            | Self::Assignment { line, .. }
            | Self::Index { line, .. }
            | Self::ListLiteral { line, .. }
            | Self::FunctionLiteral { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::IfExpr { line, .. } => *line,
        }
    }
}

/// The target of a function call.
#[derive(Debug, Clone, PartialEq)]
pub enum Callee {
    /// A bare name, resolved against intrinsics, then user functions, then
    /// function-valued variables.
    Name(String),
    /// An arbitrary expression that must evaluate to a function value.
    Expression(Box<Expr>),
}

/// The parameter list and body shared by function definitions and function
/// literals.
///
/// Values of function type hold an `Rc` to this node; two function values
/// compare equal exactly when they share the same `FuncBody` allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncBody {
    /// The parameter names, bound positionally on call.
    pub params: Vec<String>,
    /// The body statement executed when the function is called.
    pub body:   Statement,
}

/// Represents a top-level, user-defined function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name: String,
    /// The parameter list and body.
    pub func: Rc<FuncBody>,
    /// Line number in the source code.
    pub line: usize,
}

/// A top-level global variable declaration (`global x;`).
///
/// Globals are declared by name only and hold `none` until assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalDecl {
    /// The name of the global variable.
    pub name: String,
    /// Line number in the source code.
    pub line: usize,
}

/// A whole parsed program: global declarations followed by function
/// definitions, one of which must be a parameterless `main`.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The global variable declarations, in source order.
    pub globals:   Vec<GlobalDecl>,
    /// The function definitions, in source order.
    pub functions: Vec<FunctionDef>,
}

/// Represents a statement.
///
/// Statements execute for their effect; control-flow statements communicate
/// through the evaluator's flow signal rather than through return values.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A brace-delimited block introducing one new lexical scope.
    Compound {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// An `if` statement with optional `elif` chain and `else` branch.
    If {
        /// The primary condition expression.
        condition:     Box<Expr>,
        /// Statement executed if the condition is true.
        then_branch:   Box<Self>,
        /// `elif` conditions and their bodies, in order.
        elif_branches: Vec<(Expr, Self)>,
        /// Statement executed if no condition is true.
        else_branch:   Option<Box<Self>>,
        /// Line number in the source code.
        line:          usize,
    },
    /// A C-style `for (init; cond; step)` loop; all three clauses optional.
    For {
        /// The initializer expression, run once before the first test.
        init:      Option<Expr>,
        /// The loop condition; a missing condition means "always true".
        condition: Option<Expr>,
        /// The step expression, run after each iteration (also on `continue`).
        step:      Option<Expr>,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A `foreach (x in e)` loop over a list, string, or range.
    ForEach {
        /// The loop variable, bound in the loop's own scope frame.
        variable: String,
        /// The list, string, or range being iterated.
        iterable: Expr,
        /// The loop body.
        body:     Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A `while` loop.
    While {
        /// The loop condition; must evaluate to a boolean.
        condition: Box<Expr>,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A `do ... while (cond);` loop; the body runs at least once.
    DoWhile {
        /// The loop body.
        body:      Box<Self>,
        /// The loop condition, tested after each iteration.
        condition: Box<Expr>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A `break;` statement.
    Break {
        /// Line number in the source code.
        line: usize,
    },
    /// A `continue;` statement.
    Continue {
        /// Line number in the source code.
        line: usize,
    },
    /// A `return;` or `return expr;` statement.
    Return {
        /// The value to return; `none` when absent.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An empty statement (`;`).
    Empty {
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Expression { line, .. }
            | Self::Compound { line, .. }
            | Self::If { line, .. }
            | Self::For { line, .. }
            | Self::ForEach { line, .. }
            | Self::While { line, .. }
            | Self::DoWhile { line, .. }
            | Self::Break { line }
            | Self::Continue { line }
            | Self::Return { line, .. }
            | Self::Empty { line } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons, and logical operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition, string concatenation, or list append/prepend (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Logical and (`and`); both operands are always evaluated.
    And,
    /// Logical or (`or`); both operands are always evaluated.
    Or,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, FloorDiv, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            FloorDiv => "//",
            Mod => "%",
            Pow => "^",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Numeric identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `not x`).
    Not,
    /// Increment by one (`++x` or `x++`).
    Increment,
    /// Decrement by one (`--x` or `x--`).
    Decrement,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "not",
            Self::Increment => "++",
            Self::Decrement => "--",
        };
        write!(f, "{operator}")
    }
}

/// Whether a unary operator was written before or after its operand.
///
/// Increment and decrement exist in both fixities with different result
/// values; the other unary operators are prefix-only.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Fixity {
    /// The operator precedes its operand (`++x`).
    Prefix,
    /// The operator follows its operand (`x++`).
    Postfix,
}
