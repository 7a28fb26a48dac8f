use std::fmt;
use std::str::FromStr;

use crate::utils::UtilsError;

/// Four card digits in enumeration order `(i, j, k, l)`.
///
/// The rendered form `"i j k l"` is the catalog key; it is never sorted and
/// never reflects the permutation used to build an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DigitQuadruple(pub [u8; 4]);

impl DigitQuadruple {
    pub fn new(i: u8, j: u8, k: u8, l: u8) -> Self {
        Self([i, j, k, l])
    }

    pub fn digits(&self) -> [u8; 4] {
        self.0
    }

    /// Reorder the digits by a position permutation
    pub fn permuted(&self, order: &[usize; 4]) -> [u8; 4] {
        order.map(|position| self.0[position])
    }

    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DigitQuadruple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [i, j, k, l] = self.0;
        write!(f, "{} {} {} {}", i, j, k, l)
    }
}

impl FromStr for DigitQuadruple {
    type Err = UtilsError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let invalid = || UtilsError::InvalidQuadruple(key.to_string());

        let digits = key
            .split(' ')
            .map(|part| part.parse::<u8>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        let digits: [u8; 4] = digits.try_into().map_err(|_| invalid())?;
        if digits.iter().any(|&digit| digit == 0 || digit > 9) {
            return Err(invalid());
        }
        Ok(Self(digits))
    }
}
