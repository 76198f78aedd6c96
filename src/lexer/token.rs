use serde::{Deserialize, Serialize};

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
    /// Line number where the token appears (1-indexed)
    pub line: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: String, line: usize) -> Self {
        Token { kind, lexeme, line }
    }
}

/// All possible token types in Hexa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    /// Numeric literal (decimal with optional fractional part)
    Number(f64),
    /// String literal (no escape processing)
    String(String),
    /// Boolean `true` literal
    True,
    /// Boolean `false` literal
    False,
    /// `nil` literal
    Nil,

    /// Symbol: alphanumerics plus `_-+*/=<>!?&|%^~`
    Symbol(String),

    // Delimiters
    /// Left bracket `[`
    LeftBracket,
    /// Right bracket `]`
    RightBracket,

    // Special
    /// End of file marker
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::String(s) => write!(f, "\"{}\"", s),
            TokenKind::True => write!(f, "true"),
            TokenKind::False => write!(f, "false"),
            TokenKind::Nil => write!(f, "nil"),
            TokenKind::Symbol(s) => write!(f, "{}", s),
            TokenKind::LeftBracket => write!(f, "["),
            TokenKind::RightBracket => write!(f, "]"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}
