/// Parser entry points and the lowest expression levels.
///
/// Contains the program-level grammar (globals, then function definitions,
/// with the `main` checks), plus assignment and ternary parsing.
pub mod core;

/// Binary operator precedence levels.
///
/// Implements the left-associative climb loops for comparisons, logical
/// operators, and arithmetic, plus the token-to-operator mappings.
pub mod binary;

/// Unary, exponent, postfix, and primary parsing.
///
/// The highest-binding part of the expression grammar: prefix operators,
/// right-associative `^`, postfix indexing/calls/`++`/`--`, and all atoms
/// (literals, variables, list and range literals, function literals,
/// if-expressions, parenthesized expressions).
pub mod unary;

/// Statement parsing.
///
/// Parses every statement form: expression statements, blocks, conditionals,
/// the four loop constructs, `break`/`continue`/`return`, the empty
/// statement, and the top-level `global` and `func` items.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement sequences into compound statements.
pub mod block;

/// Shared parsing utilities.
///
/// Comma-separated lists, identifier parsing, and token-expectation helpers
/// used across the other parser modules.
pub mod utils;
