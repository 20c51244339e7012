/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the expression and statement dispatch,
/// and the program entry point that registers globals and functions and runs
/// `main`.
pub mod core;

/// The control-flow signal.
///
/// Defines the `Flow` enum that `break`, `continue`, and `return` leave on
/// the context instead of unwinding through the host.
pub mod flow;

/// The variable environment.
///
/// Implements the frame stack, the global frame, and the call-floor rule
/// that keeps a call from seeing or writing its caller's locals.
pub mod scope;

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// the overloaded `+`, the numeric operators, comparisons, and the
/// non-short-circuiting logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation, logical NOT, and the mutating increment
/// and decrement operators in both fixities.
pub mod unary;

/// Assignment evaluation.
///
/// Handles plain and compound assignment to variables and list elements.
pub mod assign;

/// Loop execution.
///
/// Runs the four loop forms and owns the per-iteration handling of the flow
/// signal.
pub mod loops;

/// Function call evaluation.
///
/// Resolves callees, binds arguments, and maintains the scope and flow
/// isolation of the call boundary.
pub mod call;

/// Intrinsic functions.
///
/// The built-in function layer: I/O, conversions, string, char, list, and
/// math operations, with their registry and arity checking.
pub mod intrinsic;
