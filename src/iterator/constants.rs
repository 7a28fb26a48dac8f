use crate::expression::Operator;

/// Largest digit a card corner can show
pub const MAX_DIGIT: u8 = 9;

/// Every ordering of four positions, lexicographic
pub const PERMUTATIONS: [[usize; 4]; 24] = [
    [0, 1, 2, 3],
    [0, 1, 3, 2],
    [0, 2, 1, 3],
    [0, 2, 3, 1],
    [0, 3, 1, 2],
    [0, 3, 2, 1],
    [1, 0, 2, 3],
    [1, 0, 3, 2],
    [1, 2, 0, 3],
    [1, 2, 3, 0],
    [1, 3, 0, 2],
    [1, 3, 2, 0],
    [2, 0, 1, 3],
    [2, 0, 3, 1],
    [2, 1, 0, 3],
    [2, 1, 3, 0],
    [2, 3, 0, 1],
    [2, 3, 1, 0],
    [3, 0, 1, 2],
    [3, 0, 2, 1],
    [3, 1, 0, 2],
    [3, 1, 2, 0],
    [3, 2, 0, 1],
    [3, 2, 1, 0],
];

/// All 64 operator triples; the first operator varies slowest
pub const OPERATOR_TRIPLES: [[Operator; 3]; 64] = build_operator_triples();

const fn build_operator_triples() -> [[Operator; 3]; 64] {
    let ops = Operator::ALL;
    let mut triples = [[Operator::Add; 3]; 64];
    let mut idx = 0;
    while idx < 64 {
        triples[idx] = [ops[idx / 16], ops[(idx / 4) % 4], ops[idx % 4]];
        idx += 1;
    }
    triples
}
