use crate::interpreter::value::core::Value;

/// The control-flow signal threaded through statement execution.
///
/// The language does not use host exceptions (or panics) for `break`,
/// `continue`, or `return`; instead every statement may leave a signal on the
/// evaluation context, and compound statements and loops inspect it after
/// each step:
///
/// - Compound statements stop executing their remaining statements and
///   propagate any non-[`Flow::Normal`] signal upward.
/// - Loops consume [`Flow::Break`] and [`Flow::Continue`] (resetting to
///   `Normal`) and propagate [`Flow::Return`].
/// - Function calls consume [`Flow::Return`], turning its payload into the
///   call's result.
///
/// This makes the reset-at-each-iteration behavior and the call-boundary
/// isolation of the signal explicit and testable.
#[derive(Debug, Clone, Default)]
pub enum Flow {
    /// Execution proceeds normally.
    #[default]
    Normal,
    /// A `break` statement executed; the innermost loop must exit.
    Break,
    /// A `continue` statement executed; the innermost loop must advance to
    /// its next iteration.
    Continue,
    /// A `return` statement executed; the current function call must end
    /// with the carried value.
    Return(Value),
}

impl Flow {
    /// Returns `true` when no control-flow statement is pending.
    #[must_use]
    pub const fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
