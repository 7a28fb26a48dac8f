//! Typed evaluator for four digits, three operators and a parenthesization shape

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{Operator, Shape};
pub use display::{CLOSE, OPEN};
pub use errors::ExpressionError;
pub use eval::{Number, evaluate, evaluate_sequence, evaluates_to};

#[cfg(test)]
mod tests;
