#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// A value had a different type than the operation required.
    TypeMismatch {
        /// The kind of value the operation expected.
        expected: String,
        /// The kind of value that was actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Tried to read or assign through an undefined variable.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a name that is neither an intrinsic, a function, nor a
    /// function-valued variable.
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to index a list or string outside its bounds.
    IndexOutOfRange {
        /// The length of the indexed value.
        len:   usize,
        /// The index that was actually requested.
        found: i64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `break` or `continue` executed outside of any loop.
    ControlFlowMisuse {
        /// The offending statement keyword.
        statement: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A function was called with the wrong number of arguments.
    ArityMismatch {
        /// The name of the function.
        name: String,
        /// The source line of the call.
        line: usize,
    },
    /// A user function was defined with the name of an intrinsic.
    IntrinsicRedefinition {
        /// The name of the intrinsic.
        name: String,
        /// The source line of the definition.
        line: usize,
    },
    /// Reading from stdin or writing to stdout failed.
    IoFailed {
        /// Details about the I/O failure.
        details: String,
        /// The source line of the intrinsic call.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { expected, found, line } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::UndefinedFunction { name, line } => {
                write!(f, "Error on line {line}: Undefined function '{name}'.")
            },

            Self::IndexOutOfRange { len, found, line } => write!(
                f,
                "Error on line {line}: Index {found} is out of range for length {len}."
            ),

            Self::ControlFlowMisuse { statement, line } => write!(
                f,
                "Error on line {line}: '{statement}' is not allowed outside of a loop."
            ),

            Self::ArityMismatch { name, line } => write!(
                f,
                "Error on line {line}: Wrong number of arguments for function '{name}'."
            ),

            Self::IntrinsicRedefinition { name, line } => write!(
                f,
                "Error on line {line}: Cannot redefine intrinsic function '{name}'."
            ),

            Self::IoFailed { details, line } => {
                write!(f, "Error on line {line}: I/O failed: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
