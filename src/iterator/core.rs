use log::debug;

use super::constants::MAX_DIGIT;
use super::types::DigitQuadruple;

/// Lazy walk over `i = 1..=max`, then `j`, `k`, `l` each in `1..=i`.
///
/// The inner bound follows the leading digit rather than `max`, so only
/// quadruples whose first digit is the largest are produced. Bounds above
/// [`MAX_DIGIT`] are clamped so every yielded value stays a single digit.
#[derive(Debug, Clone)]
pub struct QuadrupleIterator {
    max_digit: u8,
    next: Option<[u8; 4]>,
}

impl QuadrupleIterator {
    pub fn new(max_digit: u8) -> Self {
        let max_digit = max_digit.min(MAX_DIGIT);
        let next = (max_digit >= 1).then_some([1, 1, 1, 1]);
        Self { max_digit, next }
    }

    fn advance(&self, [i, j, k, l]: [u8; 4]) -> Option<[u8; 4]> {
        if l < i {
            Some([i, j, k, l + 1])
        } else if k < i {
            Some([i, j, k + 1, 1])
        } else if j < i {
            Some([i, j + 1, 1, 1])
        } else if i < self.max_digit {
            debug!("Enumeration moving to leading digit {}", i + 1);
            Some([i + 1, 1, 1, 1])
        } else {
            None
        }
    }
}

impl Default for QuadrupleIterator {
    fn default() -> Self {
        Self::new(MAX_DIGIT)
    }
}

impl Iterator for QuadrupleIterator {
    type Item = DigitQuadruple;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.advance(current);
        Some(DigitQuadruple(current))
    }
}

/// Every quadruple up to [`MAX_DIGIT`], in enumeration order
pub fn all_quadruples() -> Vec<DigitQuadruple> {
    QuadrupleIterator::default().collect()
}
