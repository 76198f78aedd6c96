//! Recursive-descent parser producing [`Value`](crate::runtime::Value) trees
//!
//! Hexa is homoiconic: the parser output is the same `Value` type the
//! evaluator consumes and programs manipulate, so there is no separate AST.

mod expr_parser;

pub use expr_parser::Parser;
