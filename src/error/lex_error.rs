#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Represents the ways a single token can fail to lex.
///
/// `LexError` carries no source position of its own; the tokenizer wraps it in
/// [`ParseError::Lex`](crate::error::ParseError::Lex) together with the line
/// and column where the offending text starts. The `Default` variant is the
/// one logos falls back to when no token pattern matches at all.
pub enum LexError {
    /// A string literal was opened but never closed on the same line.
    UnterminatedString,
    /// A char literal was opened but never closed on the same line.
    UnterminatedChar,
    /// A char literal with nothing between the quotes (`''`).
    EmptyChar,
    /// A char literal containing more than one character.
    InvalidChar,
    /// A backslash escape outside the supported set
    /// (`\n`, `\t`, `\"`, `\'`, `\\`, `\0`).
    UnknownEscape,
    /// A numeric literal with more than one decimal point.
    MalformedNumber,
    /// A character that does not start any token.
    #[default]
    UnknownCharacter,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString => write!(f, "Unterminated string literal."),
            Self::UnterminatedChar => write!(f, "Unterminated char literal."),
            Self::EmptyChar => write!(f, "Empty char literal."),
            Self::InvalidChar => write!(f, "Char literal must contain exactly one character."),
            Self::UnknownEscape => write!(f, "Unknown escape sequence."),
            Self::MalformedNumber => write!(f, "Number has more than one decimal point."),
            Self::UnknownCharacter => write!(f, "Unrecognized character."),
        }
    }
}

impl std::error::Error for LexError {}
