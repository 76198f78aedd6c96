//! Error types for the Hexa interpreter

use thiserror::Error;

/// Hexa interpreter errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Scan/parse errors
    /// Invalid source text encountered by the scanner or parser
    ///
    /// **Example:** an unterminated string literal, or a character outside
    /// the symbol alphabet
    #[error("Syntax error at line {line}: {message}")]
    SyntaxError {
        /// Line number where the error occurred (1-indexed)
        line: usize,
        /// Error description
        message: String,
    },

    /// Input ended in the middle of an expression
    ///
    /// **Example:** `[print 1` (unclosed list)
    #[error("Unexpected end of input")]
    UnexpectedEof,

    /// Unexpected token encountered during parsing
    #[error("Unexpected token: expected {expected}, got {got}")]
    UnexpectedToken {
        /// Expected token description
        expected: String,
        /// Actual token received
        got: String,
    },

    // Runtime errors
    /// Reference to a variable not bound anywhere in the environment chain
    ///
    /// **Example:** `x` when `x` was never defined with `[def x ...]`
    #[error("Undefined variable: {name}")]
    UndefinedVariable {
        /// Variable name
        name: String,
    },

    /// Operand of the wrong value type for an operation
    ///
    /// **Example:** `[+ 1 "a"]` (string passed to arithmetic), or
    /// `[def 5 10]` (number where a variable name is required)
    #[error("Type error: expected {expected}, got {got}")]
    TypeError {
        /// Expected type
        expected: String,
        /// Actual type
        got: String,
    },

    /// Special form or call given the wrong number of arguments
    ///
    /// **Example:** `[+ 1]`, or calling a two-parameter closure with three
    /// arguments
    #[error("Arity mismatch: expected {expected} arguments, got {got}")]
    ArityMismatch {
        /// Expected argument count
        expected: usize,
        /// Actual argument count
        got: usize,
    },

    /// Attempt to call a value that is neither a closure nor a native
    #[error("Value is not callable: {type_name}")]
    NotCallable {
        /// Type of the non-callable value
        type_name: String,
    },

    /// Division by zero
    #[error("Division by zero")]
    DivisionByZero,
}

/// Result type for Hexa operations
pub type Result<T> = std::result::Result<T, Error>;
