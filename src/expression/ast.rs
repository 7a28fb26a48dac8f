use crate::expression::errors::ExpressionError;

/// One of the four arithmetic operators placed between two digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// All operators in the order the search walks them
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// Multiplicative operators bind tighter than additive ones
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Operator::Mul | Operator::Div)
    }
}

impl TryFrom<&str> for Operator {
    type Error = ExpressionError;

    fn try_from(symbol: &str) -> Result<Self, Self::Error> {
        match symbol {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            other => Err(ExpressionError::UnknownOperator(other.to_string())),
        }
    }
}

/// Parenthesization template over four ordered digits `a b c d`
/// and three operators `op1 op2 op3`.
///
/// | id | layout                      |
/// |----|-----------------------------|
/// | 0  | `a op1 b op2 c op3 d`       |
/// | 1  | `a op1 (b op2 c) op3 d`     |
/// | 2  | `a op1 b op2 (c op3 d)`     |
/// | 3  | `a op1 (b op2 c op3 d)`     |
/// | 4  | `(a op1 b) op2 (c op3 d)`   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Flat,
    MiddlePair,
    TailPair,
    TailTriple,
    TwoPairs,
}

impl Shape {
    /// Every shape in ascending id order; the search tries them in this order
    pub const ALL: [Shape; 5] = [
        Shape::Flat,
        Shape::MiddlePair,
        Shape::TailPair,
        Shape::TailTriple,
        Shape::TwoPairs,
    ];

    pub fn id(self) -> u8 {
        match self {
            Shape::Flat => 0,
            Shape::MiddlePair => 1,
            Shape::TailPair => 2,
            Shape::TailTriple => 3,
            Shape::TwoPairs => 4,
        }
    }
}

impl TryFrom<u8> for Shape {
    type Error = ExpressionError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.id() == id)
            .ok_or(ExpressionError::UnknownShape(id))
    }
}
