//! # quill
//!
//! quill is a tree-walking interpreter for a small, dynamically typed
//! scripting language written in Rust. It tokenizes, parses, and executes
//! programs built from functions, globals, lists, strings, and a fixed set of
//! intrinsic functions, starting from a parameterless `main`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{Error, ParseError},
    interpreter::{evaluator::core::Context, lexer, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression, statement, and definition types for all language
///   constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Enables extensible and robust handling of parsed code.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code execution. It exposes the
/// public API for interpreting programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and running user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides reusable helpers and conversion routines that are
/// used throughout the evaluator, such as checked conversions from the
/// language's single numeric type to integers, indices, and code points.
///
/// # Responsibilities
/// - Safely convert between `f64`, `i64`, `usize`, and `char` without silent
///   data loss.
/// - Provide general utility functions used in multiple modules.
pub mod util;

/// Parses a source string into a program.
///
/// Runs the tokenizer and the parser; no code is executed. The returned
/// program has passed the program-level checks (unique globals and
/// functions, a parameterless `main`).
///
/// # Errors
/// Returns a [`ParseError`] if tokenizing or parsing fails.
///
/// # Examples
/// ```
/// let program = quill::parse("func main() { return 1; }").unwrap();
/// assert_eq!(program.functions.len(), 1);
///
/// assert!(quill::parse("func helper() {}").is_err()); // no main
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = lexer::tokenize(source)?;
    parse_program(&tokens)
}

/// Parses and runs a source string, returning the rendered result of `main`.
///
/// This is the whole pipeline in one call: tokenize, parse, and interpret in
/// a fresh [`Context`]. The value `main` returns is rendered to its text
/// form; a `main` without `return` yields `"none"`.
///
/// # Errors
/// Returns an [`Error`] wrapping the parse or runtime failure; any error
/// aborts the run immediately.
///
/// # Examples
/// ```
/// let result = quill::run("func main() { return 2 + 3; }").unwrap();
/// assert_eq!(result, "5");
/// ```
pub fn run(source: &str) -> Result<String, Error> {
    let program = parse(source)?;

    let mut context = Context::new();
    let result = context.interpret(&program)?;

    Ok(context.render(&result))
}
