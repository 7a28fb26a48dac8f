use log::debug;

use crate::catalog::{PuzzleCatalog, Solution};
use crate::expression::{Operator, Shape, evaluates_to};
use crate::iterator::{DigitQuadruple, OPERATOR_TRIPLES, PERMUTATIONS};

/// First shape, in ascending id order, under which the ordered digits and
/// operators reach `target`
pub fn first_matching_shape(digits: [u8; 4], operators: [Operator; 3], target: i64) -> Option<Shape> {
    Shape::ALL
        .into_iter()
        .find(|&shape| evaluates_to(digits, operators, shape, target))
}

/// Search every operator triple and digit ordering of each quadruple.
///
/// For each (operator triple, permutation) pair at most one solution is
/// recorded: the first matching shape. Solutions for one quadruple keep the
/// loop order operator triple, then permutation. Quadruples with no solution
/// are absent from the result.
pub fn search_quadruples(quadruples: &[DigitQuadruple], target: i64) -> PuzzleCatalog {
    let mut catalog = PuzzleCatalog::new();
    let mut leading_digit = None;

    for quadruple in quadruples {
        let [lead, ..] = quadruple.digits();
        if leading_digit != Some(lead) {
            debug!("Processing quadruples with leading digit {}", lead);
            leading_digit = Some(lead);
        }

        let key = quadruple.key();
        for operators in OPERATOR_TRIPLES {
            for order in &PERMUTATIONS {
                let digits = quadruple.permuted(order);
                if let Some(shape) = first_matching_shape(digits, operators, target) {
                    catalog.push_solution(&key, Solution::from_parts(digits, operators, shape));
                }
            }
        }
    }

    debug!(
        "Searched {} quadruples for {}: {} solved, {} solutions",
        quadruples.len(),
        target,
        catalog.len(),
        catalog.solution_count()
    );
    catalog
}
