use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Target {0} is not one of the allowed primes")]
    InvalidTarget(i64),
    #[error("Not a digit quadruple key: '{0}'")]
    InvalidQuadruple(String),
    #[error("Cannot split work into zero chunks")]
    ZeroChunks,
}
