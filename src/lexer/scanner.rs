use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Scanner for Hexa bracket-expression syntax
pub struct Scanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
}

/// Characters that may appear in a symbol alongside alphanumerics
fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(
            c,
            '_' | '-' | '+' | '*' | '/' | '=' | '<' | '>' | '!' | '?' | '&' | '|' | '%' | '^' | '~'
        )
}

impl Scanner {
    /// Creates a new scanner from source code
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans all tokens from source code and returns them as a vector
    ///
    /// The returned stream always ends with a single [`TokenKind::Eof`].
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, String::new(), self.line));

        Ok(self.tokens.clone())
    }

    fn scan_token(&mut self) -> Result<()> {
        let c = self.advance();

        match c {
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            // Comment goes until the end of the line
            ';' => self.skip_line_comment(),

            '[' => self.add_token(TokenKind::LeftBracket),
            ']' => self.add_token(TokenKind::RightBracket),

            '"' => self.scan_string()?,

            c if c.is_ascii_digit() => self.scan_number()?,

            // A leading '-' starts a symbol, never a negative literal
            c if is_symbol_char(c) => self.scan_symbol(),

            _ => {
                return Err(Error::SyntaxError {
                    line: self.line,
                    message: format!("Unexpected character '{}'", c),
                });
            }
        }

        Ok(())
    }

    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    /// Strings are taken verbatim: no escape sequences are processed
    fn scan_string(&mut self) -> Result<()> {
        while !self.is_at_end() && self.peek() != '"' {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(Error::SyntaxError {
                line: self.line,
                message: "Unterminated string".to_string(),
            });
        }

        self.advance(); // Closing "

        let value: String = self.source[self.start + 1..self.current - 1]
            .iter()
            .collect();
        self.add_token(TokenKind::String(value));
        Ok(())
    }

    fn scan_number(&mut self) -> Result<()> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // Fractional part
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume .
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text: String = self.source[self.start..self.current].iter().collect();
        let value: f64 = text.parse().map_err(|_| Error::SyntaxError {
            line: self.line,
            message: format!("Invalid number: {}", text),
        })?;

        self.add_token(TokenKind::Number(value));
        Ok(())
    }

    fn scan_symbol(&mut self) {
        while is_symbol_char(self.peek()) || self.peek().is_ascii_digit() {
            self.advance();
        }

        let text: String = self.source[self.start..self.current].iter().collect();

        // Reserved literals
        let kind = match text.as_str() {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "nil" => TokenKind::Nil,
            _ => TokenKind::Symbol(text),
        };

        self.add_token(kind);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            '\0'
        } else {
            self.source[self.current + 1]
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.tokens.push(Token::new(kind, lexeme, self.line));
    }
}
