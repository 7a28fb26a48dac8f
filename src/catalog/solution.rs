use std::fmt;

use serde::{Deserialize, Serialize};

use crate::expression::{CLOSE, OPEN, Operator, Shape};

/// One solving expression as the tokens a card reveal shows verbatim:
/// digits, operator symbols and literal parentheses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution(Vec<String>);

impl Solution {
    pub fn new(tokens: Vec<String>) -> Self {
        Self(tokens)
    }

    /// Tokens for `digits` joined by `operators` under `shape`
    pub fn from_parts(digits: [u8; 4], operators: [Operator; 3], shape: Shape) -> Self {
        Self(shape.tokens(digits, operators))
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut previous: Option<&str> = None;
        for token in self.0.iter().map(String::as_str) {
            let glued = previous == Some(OPEN) || token == CLOSE;
            if previous.is_some() && !glued {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
            previous = Some(token);
        }
        Ok(())
    }
}
