/// String interning.
///
/// Defines the `StrTable` and the `StrId` handle used by every string value.
/// The table is append-only: interning equal text always returns the same id,
/// which makes string equality a plain id comparison, and resolving an id back
/// to its text is a direct index.
pub mod strings;

/// The `Value` enum and its operations.
///
/// Every runtime value is one of the seven closed variants defined here,
/// along with the typed accessors, deep copy, structural equality, and text
/// rendering the evaluator builds on.
pub mod core;
