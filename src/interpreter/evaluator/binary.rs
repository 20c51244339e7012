/// Binary operator dispatch.
///
/// Evaluates both operands (the logical operators do not short-circuit) and
/// routes the pair to the arithmetic, comparison, or logical implementation.
pub mod core;

/// Addition and the other arithmetic operators.
///
/// `+` is overloaded: numeric addition, string concatenation, and list
/// append/prepend. The remaining operators are purely numeric and follow IEEE
/// semantics, so division by zero yields an infinity or NaN rather than an
/// error.
pub mod arith;

/// The comparison operators.
///
/// Equality is typed and delegates to [`Value::eq_value`]; ordering is defined
/// for numbers, chars, and strings only.
///
/// [`Value::eq_value`]: crate::interpreter::value::core::Value::eq_value
pub mod compare;

/// The logical operators `and` and `or`.
pub mod logic;
