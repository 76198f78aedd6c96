//! # Hexa - a small Lisp-like expression language
//!
//! A dynamically-typed, homoiconic expression language with lexical
//! closures, interpreted by a tree-walking evaluator. Lists are written
//! with square brackets and double as the syntax tree: code is data.
//!
//! ```text
//! [def add [fn [a b] [+ a b]]]
//! [print [add 5 7]]            ; 12
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use hexa::{Evaluator, Parser, Scanner, Value};
//!
//! # fn main() -> hexa::Result<()> {
//! let source = r#"
//!     [def add [fn [a b] [+ a b]]]
//!     [add 5 7]
//! "#;
//!
//! // Tokenize
//! let mut scanner = Scanner::new(source);
//! let tokens = scanner.scan_tokens()?;
//!
//! // Parse into value trees (no separate AST type)
//! let mut parser = Parser::new(tokens);
//! let program = parser.parse()?;
//!
//! // Evaluate
//! let mut evaluator = Evaluator::new();
//! let result = evaluator.execute(&program)?;
//!
//! assert_eq!(result, Value::Number(12.0));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Code -> Scanner -> Tokens -> Parser -> Value tree -> Evaluator -> Value
//! ```
//!
//! - [`Scanner`] - tokenizes source text
//! - [`Parser`] - parses tokens into [`Value`] trees
//! - [`Evaluator`] - walks the trees, handling the `fn`/`def`/`if` special
//!   forms and function application
//! - [`Environment`] - chained variable scopes with reference-counted
//!   sharing, so closures can outlive their defining call frame
//!
//! ## Semantics notes
//!
//! - Closures capture their defining *environment*, not a snapshot of
//!   values: a later `[def x ...]` in that scope is visible at call time.
//! - Variable lookup returns a copy of the stored value; mutating one
//!   cannot affect the other.
//! - The interpreter is single-threaded throughout; environments are
//!   `Rc`-shared, and reference cycles created by recursive definitions
//!   are not reclaimed.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{Scanner, Token, TokenKind};
pub use parser::Parser;
pub use runtime::{EnvRef, Environment, Evaluator, NativeFn, Value};

/// Version of the Hexa interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
