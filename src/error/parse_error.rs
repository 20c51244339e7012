use crate::error::LexError;

#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The tokenizer rejected a piece of source text.
    Lex {
        /// What kind of lexical error occurred.
        kind:   LexError,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the offending text starts.
        column: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the token starts.
        column: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where input ended.
        column: usize,
    },
    /// The left side of an assignment, or the operand of `++`/`--`, is not a
    /// variable or list element.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column of the operator.
        column: usize,
    },
    /// Two top-level functions share the same name.
    DuplicateFunction {
        /// The name of the function.
        name:   String,
        /// The source line of the second definition.
        line:   usize,
        /// The source column of the second definition.
        column: usize,
    },
    /// The same global variable was declared twice.
    DuplicateGlobal {
        /// The name of the global variable.
        name:   String,
        /// The source line of the second declaration.
        line:   usize,
        /// The source column of the second declaration.
        column: usize,
    },
    /// The program does not define a `main` function.
    MissingMain {
        /// The last source line of the program.
        line:   usize,
        /// The last source column of the program.
        column: usize,
    },
    /// `main` was defined with parameters, but it must take none.
    MainWithParameters {
        /// The source line of the `main` definition.
        line:   usize,
        /// The source column of the `main` definition.
        column: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex { kind, line, column } => {
                write!(f, "Error on line {line}, column {column}: {kind}")
            },

            Self::UnexpectedToken { token, line, column } => {
                write!(f, "Error on line {line}, column {column}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line, column } => {
                write!(f, "Error on line {line}, column {column}: Unexpected end of input.")
            },

            Self::InvalidAssignmentTarget { line, column } => write!(
                f,
                "Error on line {line}, column {column}: Target must be a variable or a list element."
            ),

            Self::DuplicateFunction { name, line, column } => write!(
                f,
                "Error on line {line}, column {column}: Function '{name}' is already defined."
            ),

            Self::DuplicateGlobal { name, line, column } => write!(
                f,
                "Error on line {line}, column {column}: Global '{name}' is already declared."
            ),

            Self::MissingMain { line, column } => write!(
                f,
                "Error on line {line}, column {column}: Program must define a 'main' function."
            ),

            Self::MainWithParameters { line, column } => write!(
                f,
                "Error on line {line}, column {column}: 'main' must not take parameters."
            ),
        }
    }
}

impl std::error::Error for ParseError {}
