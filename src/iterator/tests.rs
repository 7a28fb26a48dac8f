use std::collections::HashSet;

use crate::iterator::{
    DigitQuadruple, MAX_DIGIT, OPERATOR_TRIPLES, PERMUTATIONS, QuadrupleIterator, all_quadruples,
};

#[test]
fn iterator_starts_at_all_ones_and_ends_at_all_nines() {
    let quadruples = all_quadruples();
    assert_eq!(quadruples.first(), Some(&DigitQuadruple::new(1, 1, 1, 1)));
    assert_eq!(quadruples.last(), Some(&DigitQuadruple::new(9, 9, 9, 9)));
}

#[test]
fn iterator_yields_cube_of_each_leading_digit() {
    // i^3 quadruples per leading digit i
    let expected: usize = (1..=usize::from(MAX_DIGIT)).map(|i| i * i * i).sum();
    assert_eq!(QuadrupleIterator::default().count(), expected);
    assert_eq!(expected, 2025);
}

#[test]
fn iterator_keeps_trailing_digits_within_leading_digit() {
    for quadruple in QuadrupleIterator::default() {
        let [i, j, k, l] = quadruple.digits();
        assert!((1..=MAX_DIGIT).contains(&i));
        assert!(j >= 1 && j <= i, "j out of range in {}", quadruple);
        assert!(k >= 1 && k <= i, "k out of range in {}", quadruple);
        assert!(l >= 1 && l <= i, "l out of range in {}", quadruple);
    }
}

#[test]
fn iterator_nests_with_leading_digit_outermost() {
    let head: Vec<String> = QuadrupleIterator::default()
        .take(10)
        .map(|q| q.key())
        .collect();
    assert_eq!(
        head,
        vec![
            "1 1 1 1", "2 1 1 1", "2 1 1 2", "2 1 2 1", "2 1 2 2", "2 2 1 1", "2 2 1 2", "2 2 2 1",
            "2 2 2 2", "3 1 1 1",
        ]
    );
}

#[test]
fn iterator_is_restartable() {
    let iter = QuadrupleIterator::new(3);
    let first: Vec<_> = iter.clone().collect();
    let second: Vec<_> = iter.collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 1 + 8 + 27);
}

#[test]
fn iterator_clamps_bound_to_single_digits() {
    let clamped: Vec<DigitQuadruple> = QuadrupleIterator::new(12).collect();
    assert_eq!(clamped, all_quadruples());
    assert!(clamped.iter().all(|q| q.digits().iter().all(|&d| d <= MAX_DIGIT)));
}

#[test]
fn iterator_with_zero_bound_is_empty() {
    assert_eq!(QuadrupleIterator::new(0).count(), 0);
}

#[test]
fn permutations_are_distinct_bijections() {
    let distinct: HashSet<[usize; 4]> = PERMUTATIONS.iter().copied().collect();
    assert_eq!(distinct.len(), 24);
    for order in PERMUTATIONS {
        let mut sorted = order;
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2, 3]);
    }
}

#[test]
fn operator_triples_cover_every_combination_once() {
    let distinct: HashSet<_> = OPERATOR_TRIPLES.iter().copied().collect();
    assert_eq!(distinct.len(), 64);
    assert_eq!(
        OPERATOR_TRIPLES.first().map(|t| t.map(|op| op.symbol())),
        Some(["+", "+", "+"])
    );
    assert_eq!(
        OPERATOR_TRIPLES.get(1).map(|t| t.map(|op| op.symbol())),
        Some(["+", "+", "-"])
    );
    assert_eq!(
        OPERATOR_TRIPLES.last().map(|t| t.map(|op| op.symbol())),
        Some(["/", "/", "/"])
    );
}

#[test]
fn quadruple_key_keeps_original_order() {
    let quadruple = DigitQuadruple::new(4, 1, 2, 3);
    assert_eq!(quadruple.key(), "4 1 2 3");
    assert_eq!(quadruple.permuted(&[2, 1, 3, 0]), [2, 1, 3, 4]);
    assert_eq!(quadruple.key(), "4 1 2 3");
}

#[test]
fn quadruple_parses_from_key() {
    assert_eq!("9 8 7 1".parse::<DigitQuadruple>(), Ok(DigitQuadruple::new(9, 8, 7, 1)));
    assert!("9 8 7".parse::<DigitQuadruple>().is_err());
    assert!("9 8 7 0".parse::<DigitQuadruple>().is_err());
    assert!("9 8 x 1".parse::<DigitQuadruple>().is_err());
    assert!("9  8 7 1".parse::<DigitQuadruple>().is_err());
}
