/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, executes statements and evaluates
/// expressions, manages variable scopes and control flow, and dispatches
/// intrinsic and user-defined function calls. It is the core execution engine
/// of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Manages scopes, the flow signal, and the call boundary.
/// - Reports runtime errors such as type mismatches and undefined names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column.
/// - Handles numeric, string, and char literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of the program. This
/// enables later phases to analyze and execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements,
///   definitions).
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
/// - Enforces the program-level rules: unique globals and functions, and a
///   parameterless `main`.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation, such
/// as numbers, strings, booleans, chars, lists, functions, and `none`, along
/// with the string intern table. It also provides methods for type checking,
/// deep copying, equality, and rendering.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements typed accessors, structural equality, and deep copy.
/// - Provides the append-only string table behind string values.
pub mod value;
