use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};
use crate::runtime::Value;

/// Parser for Hexa bracket-expression syntax
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    /// Creates a new parser over a scanned token stream
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, current: 0 }
    }

    /// Parses all top-level expressions
    pub fn parse(&mut self) -> Result<Vec<Value>> {
        let mut program = Vec::new();

        while !self.is_at_end() {
            program.push(self.parse_expression()?);
        }

        Ok(program)
    }

    /// Parses a single expression
    ///
    /// The parser performs all syntax validation; the evaluator treats its
    /// output as an already-validated value tree.
    pub fn parse_expression(&mut self) -> Result<Value> {
        match self.peek().kind {
            TokenKind::Number(n) => {
                self.advance();
                Ok(Value::Number(n))
            }
            TokenKind::String(ref s) => {
                let s = s.clone();
                self.advance();
                Ok(Value::String(s))
            }
            TokenKind::True => {
                self.advance();
                Ok(Value::Bool(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Value::Bool(false))
            }
            TokenKind::Nil => {
                self.advance();
                Ok(Value::Nil)
            }
            TokenKind::Symbol(ref name) => {
                let name = name.clone();
                self.advance();
                Ok(Value::Symbol(name))
            }
            TokenKind::LeftBracket => self.parse_list(),
            TokenKind::Eof => Err(Error::UnexpectedEof),
            TokenKind::RightBracket => Err(Error::UnexpectedToken {
                expected: "expression".to_string(),
                got: "]".to_string(),
            }),
        }
    }

    fn parse_list(&mut self) -> Result<Value> {
        self.consume(&TokenKind::LeftBracket)?;

        let mut items = Vec::new();
        while !self.check(&TokenKind::RightBracket) {
            if self.is_at_end() {
                return Err(Error::UnexpectedEof);
            }
            items.push(self.parse_expression()?);
        }

        self.consume(&TokenKind::RightBracket)?;

        Ok(Value::List(items))
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        &self.tokens[self.current - 1]
    }

    fn check(&self, kind: &TokenKind) -> bool {
        &self.peek().kind == kind
    }

    fn consume(&mut self, kind: &TokenKind) -> Result<&Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(Error::UnexpectedToken {
                expected: kind.to_string(),
                got: self.peek().kind.to_string(),
            })
        }
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }
}
