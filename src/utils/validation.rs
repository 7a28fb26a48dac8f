use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Targets a puzzle card may carry: the primes below 100
pub const ALLOWED_TARGETS: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// # Errors
///
/// Returns an error if `target` is not in [`ALLOWED_TARGETS`].
pub fn validate_target(target: i64) -> Result<u32, UtilsError> {
    debug!("Validating target: {}", target);

    let allowed = u32::try_from(target)
        .ok()
        .filter(|candidate| ALLOWED_TARGETS.contains(candidate));

    match allowed {
        Some(target) => Ok(target),
        None => {
            warn!("Rejecting target {}: not an allowed prime", target);
            Err(UtilsError::InvalidTarget(target))
        }
    }
}
