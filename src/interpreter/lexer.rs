use logos::Logos;

use crate::error::{LexError, ParseError};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Keywords and identifiers are case-insensitive: `WHILE`, `While` and `while`
/// all lex as [`Token::While`], and identifiers are normalized to lowercase.
/// String and char literals arrive with their escape sequences already
/// decoded.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    ///
    /// A second decimal point inside one literal (`1.2.3`) is caught here and
    /// reported as a malformed number rather than two adjacent tokens. The
    /// catch requires a digit after the extra dot, so a fractional literal
    /// followed by the range operator (`1.0..3`) still lexes as two numbers
    /// around [`Token::DotDot`].
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+\.[0-9]+(\.[0-9]+)+", malformed_number)]
    #[regex(r"\.[0-9]+(\.[0-9]+)+", malformed_number)]
    Number(f64),
    /// String literal tokens, such as `"hello\n"`. The payload is the decoded
    /// text. Strings cannot span lines.
    #[regex(r#""([^"\\\n\r]|\\[^\n\r])*""#, parse_string)]
    #[regex(r#""([^"\\\n\r]|\\[^\n\r])*"#, unterminated_string)]
    Str(String),
    /// Char literal tokens, such as `'a'` or `'\t'`.
    #[regex(r"'([^'\\\n\r]|\\[^\n\r])*'", parse_char)]
    #[regex(r"'([^'\\\n\r]|\\[^\n\r])*", unterminated_char)]
    Char(char),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool, ignore(ascii_case))]
    #[token("false", parse_bool, ignore(ascii_case))]
    Bool(bool),
    /// `if`
    #[token("if", ignore(ascii_case))]
    If,
    /// `elif`
    #[token("elif", ignore(ascii_case))]
    Elif,
    /// `else`
    #[token("else", ignore(ascii_case))]
    Else,
    /// `for`
    #[token("for", ignore(ascii_case))]
    For,
    /// `foreach`
    #[token("foreach", ignore(ascii_case))]
    Foreach,
    /// `while`
    #[token("while", ignore(ascii_case))]
    While,
    /// `do`
    #[token("do", ignore(ascii_case))]
    Do,
    /// `break`
    #[token("break", ignore(ascii_case))]
    Break,
    /// `continue`
    #[token("continue", ignore(ascii_case))]
    Continue,
    /// `return`
    #[token("return", ignore(ascii_case))]
    Return,
    /// `in`
    #[token("in", ignore(ascii_case))]
    In,
    /// `and`
    #[token("and", ignore(ascii_case))]
    And,
    /// `or`
    #[token("or", ignore(ascii_case))]
    Or,
    /// `not`
    #[token("not", ignore(ascii_case))]
    Not,
    /// `func`
    #[token("func", ignore(ascii_case))]
    Func,
    /// `global`
    #[token("global", ignore(ascii_case))]
    Global,
    /// Identifier tokens; variable or function names such as `x` or `square`,
    /// normalized to lowercase.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_lowercase())]
    Identifier(String),
    /// `# Comments.`
    #[regex(r"#[^\n\r]*", logos::skip)]
    Comment,
    /// `..`
    #[token("..")]
    DotDot,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `//=`
    #[token("//=")]
    DoubleSlashAssign,
    /// `^=`
    #[token("^=")]
    CaretAssign,
    /// `%=`
    #[token("%=")]
    PercentAssign,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,

    /// Line breaks; tracked for error positions, never emitted.
    #[regex(r"\r?\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    Newline,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset where that line begins,
/// so every token (and every lexical error) can be reported with a 1-based
/// line and column.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// The byte offset at which the current line starts.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1, line_start: 0 }
    }
}

/// The source position of a token, 1-based in both coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// The line the token starts on.
    pub line:   usize,
    /// The column the token starts at.
    pub column: usize,
}

/// Tokenizes a whole source string.
///
/// Drives the lexer to completion and pairs every token with the 1-based line
/// and column where it starts. The parser consumes this vector through a
/// cloneable peekable iterator, which gives it arbitrary lookahead by
/// snapshotting the iterator.
///
/// # Errors
/// Returns [`ParseError::Lex`] for the first piece of source text the lexer
/// rejects, positioned at the start of the offending text.
///
/// # Example
/// ```
/// use quill::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 1").unwrap();
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0].0, Token::Identifier("x".to_string()));
/// assert_eq!(tokens[2].1.column, 5);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());

    while let Some(token) = lexer.next() {
        let span = Span { line:   lexer.extras.line,
                          column: lexer.span().start - lexer.extras.line_start + 1, };
        match token {
            Ok(token) => tokens.push((token, span)),
            Err(kind) => {
                return Err(ParseError::Lex { kind,
                                             line: span.line,
                                             column: span.column });
            },
        }
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed numeric value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Rejects a numeric literal that contains more than one decimal point.
fn malformed_number(_lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    Err(LexError::MalformedNumber)
}

/// Parses a boolean literal from the current token slice (`true` or `false`,
/// in any letter case).
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(true)` if the slice is `"true"`.
/// - `Some(false)` if the slice is `"false"`.
/// - `None` otherwise.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    let slice = lex.slice();
    if slice.eq_ignore_ascii_case("true") {
        Some(true)
    } else if slice.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Parses a string literal, decoding its escape sequences.
fn parse_string(lex: &logos::Lexer<Token>) -> Result<String, LexError> {
    let slice = lex.slice();
    decode_escapes(&slice[1..slice.len() - 1])
}

/// Rejects a string literal that never closes.
fn unterminated_string(_lex: &logos::Lexer<Token>) -> Result<String, LexError> {
    Err(LexError::UnterminatedString)
}

/// Parses a char literal, decoding its escape sequence and checking that the
/// literal holds exactly one character.
fn parse_char(lex: &logos::Lexer<Token>) -> Result<char, LexError> {
    let slice = lex.slice();
    let decoded = decode_escapes(&slice[1..slice.len() - 1])?;

    let mut chars = decoded.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(LexError::EmptyChar),
        (Some(_), Some(_)) => Err(LexError::InvalidChar),
    }
}

/// Rejects a char literal that never closes.
fn unterminated_char(_lex: &logos::Lexer<Token>) -> Result<char, LexError> {
    Err(LexError::UnterminatedChar)
}

/// Replaces the supported escape sequences (`\n`, `\t`, `\"`, `\'`, `\\`,
/// `\0`) in the raw body of a string or char literal.
///
/// # Errors
/// Returns [`LexError::UnknownEscape`] for a backslash followed by anything
/// outside the supported set.
fn decode_escapes(raw: &str) -> Result<String, LexError> {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('t') => decoded.push('\t'),
            Some('"') => decoded.push('"'),
            Some('\'') => decoded.push('\''),
            Some('\\') => decoded.push('\\'),
            Some('0') => decoded.push('\0'),
            _ => return Err(LexError::UnknownEscape),
        }
    }

    Ok(decoded)
}
