use std::fmt;

use crate::expression::ast::{Operator, Shape};

pub const OPEN: &str = "(";
pub const CLOSE: &str = ")";

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let layout = match self {
            Shape::Flat => "a op b op c op d",
            Shape::MiddlePair => "a op (b op c) op d",
            Shape::TailPair => "a op b op (c op d)",
            Shape::TailTriple => "a op (b op c op d)",
            Shape::TwoPairs => "(a op b) op (c op d)",
        };
        write!(f, "{}", layout)
    }
}

impl Shape {
    /// Lay out digits, operator symbols and literal parentheses exactly as
    /// the grouped expression is written.
    pub fn tokens(self, digits: [u8; 4], operators: [Operator; 3]) -> Vec<String> {
        let [a, b, c, d] = digits.map(|digit| digit.to_string());
        let [op1, op2, op3] = operators.map(|op| op.symbol().to_string());
        let (open, close) = (OPEN.to_string(), CLOSE.to_string());

        match self {
            Shape::Flat => vec![a, op1, b, op2, c, op3, d],
            Shape::MiddlePair => vec![a, op1, open, b, op2, c, close, op3, d],
            Shape::TailPair => vec![a, op1, b, op2, open, c, op3, d, close],
            Shape::TailTriple => vec![a, op1, open, b, op2, c, op3, d, close],
            Shape::TwoPairs => vec![
                open.clone(),
                a,
                op1,
                b,
                close.clone(),
                op2,
                open,
                c,
                op3,
                d,
                close,
            ],
        }
    }
}
