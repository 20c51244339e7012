/// The intrinsic registry and dispatch.
///
/// Declares the static table of every intrinsic with its arity, and the call
/// path that checks arity before handing the unevaluated argument expressions
/// to the handler.
pub mod core;

/// Console I/O intrinsics: `print`, `println`, and `input`.
pub mod io;

/// Type-conversion intrinsics: `tostr`, `tobool`, `tonum`, `tochar`, and
/// `tolist`.
pub mod convert;

/// String and char intrinsics: `concat`, `len`, `isdigit`, and `isspace`.
pub mod text;

/// List intrinsics: `append`, `range`, `remove`, `removeat`, and `clone`.
pub mod list;

/// Math intrinsics: the unary functions and `pow`.
pub mod math;
