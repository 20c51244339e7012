use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            intrinsic::{convert, io, list, math, text},
        },
        value::core::Value,
    },
};

/// Type alias for intrinsic function handlers.
///
/// An intrinsic receives the evaluation context, its argument expressions
/// still unevaluated, and the line number of the call. Handlers evaluate
/// their arguments themselves, which gives them access to the context for
/// rendering and interning.
pub type IntrinsicFn = fn(&mut Context, &[Expr], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for an intrinsic.
///
/// - `Exact(n)` means the intrinsic must receive exactly `n` arguments.
/// - `AtLeast(n)` means it accepts `n` or more.
/// - `OneOf(slice)` means it accepts any arity listed in `slice`.
#[derive(Clone, Copy)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
    OneOf(&'static [usize]),
}

/// Defines intrinsic functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the intrinsic.
///
/// The macro produces:
/// - `IntrinsicDef` (per-entry metadata),
/// - `INTRINSIC_TABLE` (static table for lookup),
/// - `INTRINSIC_FUNCTIONS` (public list of intrinsic names).
macro_rules! intrinsic_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        pub struct IntrinsicDef {
            pub(crate) name:  &'static str,
            pub(crate) arity: Arity,
            pub(crate) func:  IntrinsicFn,
        }
        static INTRINSIC_TABLE: &[IntrinsicDef] = &[
            $(
                IntrinsicDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const INTRINSIC_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

intrinsic_functions! {
    "print"    => { arity: Arity::AtLeast(1), func: io::print },
    "println"  => { arity: Arity::AtLeast(0), func: io::println },
    "input"    => { arity: Arity::OneOf(&[0, 1]), func: io::input },
    "tostr"    => { arity: Arity::Exact(1), func: convert::tostr },
    "tobool"   => { arity: Arity::Exact(1), func: convert::tobool },
    "tonum"    => { arity: Arity::Exact(1), func: convert::tonum },
    "tochar"   => { arity: Arity::Exact(1), func: convert::tochar },
    "tolist"   => { arity: Arity::Exact(1), func: convert::tolist },
    "concat"   => { arity: Arity::AtLeast(1), func: text::concat },
    "len"      => { arity: Arity::Exact(1), func: text::len },
    "isdigit"  => { arity: Arity::Exact(1), func: text::isdigit },
    "isspace"  => { arity: Arity::Exact(1), func: text::isspace },
    "append"   => { arity: Arity::Exact(2), func: list::append },
    "range"    => { arity: Arity::Exact(2), func: list::range },
    "remove"   => { arity: Arity::Exact(2), func: list::remove },
    "removeat" => { arity: Arity::Exact(2), func: list::removeat },
    "clone"    => { arity: Arity::Exact(1), func: list::clone_value },
    "sin"      => { arity: Arity::Exact(1), func: |ctx, args, line| math::unary_math("sin", ctx, args, line) },
    "cos"      => { arity: Arity::Exact(1), func: |ctx, args, line| math::unary_math("cos", ctx, args, line) },
    "tan"      => { arity: Arity::Exact(1), func: |ctx, args, line| math::unary_math("tan", ctx, args, line) },
    "abs"      => { arity: Arity::Exact(1), func: |ctx, args, line| math::unary_math("abs", ctx, args, line) },
    "sqrt"     => { arity: Arity::Exact(1), func: |ctx, args, line| math::unary_math("sqrt", ctx, args, line) },
    "floor"    => { arity: Arity::Exact(1), func: |ctx, args, line| math::unary_math("floor", ctx, args, line) },
    "ceil"     => { arity: Arity::Exact(1), func: |ctx, args, line| math::unary_math("ceil", ctx, args, line) },
    "pow"      => { arity: Arity::Exact(2), func: math::pow },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::AtLeast(m) => n >= *m,
            Self::OneOf(arr) => arr.contains(&n),
        }
    }
}

/// Looks up an intrinsic by name.
#[must_use]
pub fn find_intrinsic(name: &str) -> Option<&'static IntrinsicDef> {
    INTRINSIC_TABLE.iter().find(|def| def.name == name)
}

/// Returns `true` if `name` is a reserved intrinsic name.
#[must_use]
pub fn is_intrinsic(name: &str) -> bool {
    INTRINSIC_FUNCTIONS.contains(&name)
}

impl Context {
    /// Calls an intrinsic after checking its arity.
    ///
    /// # Errors
    /// - `RuntimeError::ArityMismatch` when the argument count is not
    ///   permitted.
    /// - Whatever the handler raises.
    pub(crate) fn call_intrinsic(&mut self,
                                 def: &IntrinsicDef,
                                 arguments: &[Expr],
                                 line: usize)
                                 -> EvalResult<Value> {
        if !def.arity.check(arguments.len()) {
            return Err(RuntimeError::ArityMismatch { name: def.name.to_string(),
                                                     line });
        }
        (def.func)(self, arguments, line)
    }

    /// Ensures a user-defined function name does not collide with an
    /// intrinsic.
    ///
    /// Duplicate user function names are already rejected by the parser, so
    /// the intrinsic namespace is the only thing left to protect.
    ///
    /// # Errors
    /// `RuntimeError::IntrinsicRedefinition` if the name is reserved.
    pub(crate) fn validate_function_name(&self, name: &str, line: usize) -> EvalResult<()> {
        if is_intrinsic(name) {
            return Err(RuntimeError::IntrinsicRedefinition { name: name.to_string(),
                                                             line });
        }
        Ok(())
    }
}
