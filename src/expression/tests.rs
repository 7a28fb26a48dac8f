use crate::expression::{
    ExpressionError, Number, Operator, Shape, evaluate, evaluate_sequence, evaluates_to,
};

fn n(value: i64) -> Number {
    Number::from_integer(value)
}

#[test]
fn test_each_shape_groups_differently() {
    let digits = [1, 2, 3, 4];
    let ops = [Operator::Add, Operator::Mul, Operator::Sub];

    assert_eq!(evaluate(digits, ops, Shape::Flat), Ok(n(3)));
    assert_eq!(evaluate(digits, ops, Shape::MiddlePair), Ok(n(3)));
    assert_eq!(evaluate(digits, ops, Shape::TailPair), Ok(n(-1)));
    assert_eq!(evaluate(digits, ops, Shape::TailTriple), Ok(n(3)));
    assert_eq!(evaluate(digits, ops, Shape::TwoPairs), Ok(n(-3)));
}

#[test]
fn test_two_pairs_only_match() {
    let digits = [2, 1, 3, 4];
    let ops = [Operator::Sub, Operator::Mul, Operator::Add];

    for shape in [Shape::Flat, Shape::MiddlePair, Shape::TailPair, Shape::TailTriple] {
        assert!(!evaluates_to(digits, ops, shape, 7), "shape {} should miss", shape);
    }
    assert!(evaluates_to(digits, ops, Shape::TwoPairs, 7));
}

#[test]
fn test_division_by_zero_is_an_error_not_a_panic() {
    let digits = [5, 3, 3, 1];
    let ops = [Operator::Div, Operator::Sub, Operator::Add];

    assert_eq!(
        evaluate(digits, ops, Shape::MiddlePair),
        Err(ExpressionError::DivisionByZero)
    );
    assert!(!evaluates_to(digits, ops, Shape::MiddlePair, 0));
}

#[test]
fn test_division_is_exact() {
    let digits = [5, 3, 3, 1];
    let ops = [Operator::Div, Operator::Sub, Operator::Add];

    assert_eq!(evaluate(digits, ops, Shape::Flat), Ok(Number::new(-1, 3)));
}

#[test]
fn test_fractional_intermediate_reaches_integer_target() {
    // 9 / 9 + 9 / 9 = 2
    let digits = [9, 9, 9, 9];
    let ops = [Operator::Div, Operator::Add, Operator::Div];
    assert!(evaluates_to(digits, ops, Shape::Flat, 2));
}

#[test]
fn test_tokens_flat() {
    let tokens = Shape::Flat.tokens([4, 1, 2, 3], [Operator::Add, Operator::Mul, Operator::Sub]);
    assert_eq!(tokens, vec!["4", "+", "1", "*", "2", "-", "3"]);
}

#[test]
fn test_tokens_middle_pair() {
    let tokens =
        Shape::MiddlePair.tokens([4, 1, 2, 3], [Operator::Add, Operator::Mul, Operator::Sub]);
    assert_eq!(tokens, vec!["4", "+", "(", "1", "*", "2", ")", "-", "3"]);
}

#[test]
fn test_tokens_tail_pair() {
    let tokens =
        Shape::TailPair.tokens([4, 1, 2, 3], [Operator::Add, Operator::Mul, Operator::Sub]);
    assert_eq!(tokens, vec!["4", "+", "1", "*", "(", "2", "-", "3", ")"]);
}

#[test]
fn test_tokens_tail_triple() {
    let tokens =
        Shape::TailTriple.tokens([4, 1, 2, 3], [Operator::Add, Operator::Mul, Operator::Sub]);
    assert_eq!(tokens, vec!["4", "+", "(", "1", "*", "2", "-", "3", ")"]);
}

#[test]
fn test_tokens_two_pairs() {
    let tokens =
        Shape::TwoPairs.tokens([2, 1, 3, 4], [Operator::Sub, Operator::Mul, Operator::Add]);
    assert_eq!(
        tokens,
        vec!["(", "2", "-", "1", ")", "*", "(", "3", "+", "4", ")"]
    );
}

#[test]
fn test_shape_ids_round_trip() {
    for (expected_id, shape) in Shape::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(shape.id()), expected_id);
        assert_eq!(Shape::try_from(shape.id()), Ok(shape));
    }
    assert_eq!(Shape::try_from(5), Err(ExpressionError::UnknownShape(5)));
}

#[test]
fn test_operator_symbols() {
    for op in Operator::ALL {
        assert_eq!(Operator::try_from(op.symbol()), Ok(op));
        assert_eq!(format!("{}", op), op.symbol());
    }
    assert!(Operator::try_from("^").is_err());
}

#[test]
fn test_sequence_single_value() {
    assert_eq!(evaluate_sequence(&[n(5)], &[]), Ok(n(5)));
}

#[test]
fn test_sequence_empty() {
    assert_eq!(
        evaluate_sequence(&[], &[Operator::Add]),
        Err(ExpressionError::EmptyExpression)
    );
}

#[test]
fn test_sequence_respects_precedence() {
    // 2 + 3 * 4 - 6 / 3 = 12
    let value = evaluate_sequence(
        &[n(2), n(3), n(4), n(6), n(3)],
        &[Operator::Add, Operator::Mul, Operator::Sub, Operator::Div],
    );
    assert_eq!(value, Ok(n(12)));
}

#[test]
fn test_sequence_left_associative_subtraction() {
    // 9 - 3 - 2 = 4, not 8
    let value = evaluate_sequence(&[n(9), n(3), n(2)], &[Operator::Sub, Operator::Sub]);
    assert_eq!(value, Ok(n(4)));
}

#[test]
fn test_sequence_left_associative_division() {
    // 8 / 4 / 2 = 1, not 4
    let value = evaluate_sequence(&[n(8), n(4), n(2)], &[Operator::Div, Operator::Div]);
    assert_eq!(value, Ok(n(1)));
}

#[test]
fn test_sequence_keeps_fractions_exact() {
    // 1 / 3 * 3 = 1 exactly
    let value = evaluate_sequence(&[n(1), n(3), n(3)], &[Operator::Div, Operator::Mul]);
    assert_eq!(value, Ok(n(1)));
}
