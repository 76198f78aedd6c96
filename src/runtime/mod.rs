//! Runtime value model, environment chain, and evaluator

mod environment;
mod evaluator;
pub mod natives;
mod value;

pub use environment::{EnvRef, Environment};
pub use evaluator::Evaluator;
pub use value::{NativeFn, Value};
