use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use crate::expression::ast::{Operator, Shape};
use crate::expression::errors::ExpressionError;

/// Exact value of an expression; division never truncates
pub type Number = Ratio<i64>;

impl Operator {
    /// # Errors
    ///
    /// Returns an error when dividing by zero or when the result does not fit.
    pub fn apply(self, left: Number, right: Number) -> Result<Number, ExpressionError> {
        let result = match self {
            Operator::Add => left.checked_add(&right),
            Operator::Sub => left.checked_sub(&right),
            Operator::Mul => left.checked_mul(&right),
            Operator::Div => {
                if right.is_zero() {
                    return Err(ExpressionError::DivisionByZero);
                }
                left.checked_div(&right)
            }
        };
        result.ok_or(ExpressionError::Overflow)
    }
}

/// Evaluate `v0 op0 v1 op1 v2 ...` left to right, with `*` and `/` binding
/// tighter than `+` and `-`. Extra values or operators beyond the shorter
/// side are ignored.
///
/// # Errors
///
/// Returns an error if `values` is empty or any single operation fails.
pub fn evaluate_sequence(values: &[Number], operators: &[Operator]) -> Result<Number, ExpressionError> {
    let (&first, rest) = values
        .split_first()
        .ok_or(ExpressionError::EmptyExpression)?;

    let mut total = Number::zero();
    let mut pending = Operator::Add;
    let mut term = first;

    for (&operator, &value) in operators.iter().zip(rest) {
        if operator.is_multiplicative() {
            term = operator.apply(term, value)?;
        } else {
            total = pending.apply(total, term)?;
            pending = operator;
            term = value;
        }
    }

    pending.apply(total, term)
}

/// Evaluate four ordered digits joined by three operators, grouped by `shape`.
///
/// # Errors
///
/// Returns [`ExpressionError::DivisionByZero`] when any group divides by zero.
/// Callers searching for a target treat every error as "no match".
pub fn evaluate(
    digits: [u8; 4],
    operators: [Operator; 3],
    shape: Shape,
) -> Result<Number, ExpressionError> {
    let [a, b, c, d] = digits.map(|digit| Number::from_integer(i64::from(digit)));
    let [op1, op2, op3] = operators;

    match shape {
        Shape::Flat => evaluate_sequence(&[a, b, c, d], &[op1, op2, op3]),
        Shape::MiddlePair => {
            let bc = op2.apply(b, c)?;
            evaluate_sequence(&[a, bc, d], &[op1, op3])
        }
        Shape::TailPair => {
            let cd = op3.apply(c, d)?;
            evaluate_sequence(&[a, b, cd], &[op1, op2])
        }
        Shape::TailTriple => {
            let bcd = evaluate_sequence(&[b, c, d], &[op2, op3])?;
            op1.apply(a, bcd)
        }
        Shape::TwoPairs => {
            let ab = op1.apply(a, b)?;
            let cd = op3.apply(c, d)?;
            op2.apply(ab, cd)
        }
    }
}

/// True when the grouped expression evaluates exactly to `target`
pub fn evaluates_to(digits: [u8; 4], operators: [Operator; 3], shape: Shape, target: i64) -> bool {
    matches!(evaluate(digits, operators, shape), Ok(value) if value == Number::from_integer(target))
}
