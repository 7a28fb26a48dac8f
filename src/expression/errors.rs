use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Expression has no operands")]
    EmptyExpression,
    #[error("Unknown parenthesization shape id: {0}")]
    UnknownShape(u8),
    #[error("Unknown operator symbol: {0}")]
    UnknownOperator(String),
}
