use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `u64` to `f64` if and only if it is exactly representable.
///
/// ## Errors
/// Returns a domain error if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use scicalc::util::num::{MAX_SAFE_U64_INT, u64_to_f64_checked};
///
/// assert_eq!(u64_to_f64_checked(1234).unwrap(), 1234.0);
/// assert!(u64_to_f64_checked(MAX_SAFE_U64_INT + 1).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn u64_to_f64_checked(value: u64) -> EvalResult<f64> {
    if value > MAX_SAFE_U64_INT {
        return Err(EvalError::domain(format!("{value} cannot be represented exactly")));
    }

    Ok(value as f64)
}

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// within the exactly representable range, and not fractional.
///
/// ## Errors
/// Returns a domain error for non-finite, negative, out-of-range, or
/// fractional values.
///
/// ## Example
/// ```
/// use scicalc::util::num::f64_to_u64_checked;
///
/// assert_eq!(f64_to_u64_checked(7.0).unwrap(), 7);
/// assert!(f64_to_u64_checked(-5.0).is_err());
/// assert!(f64_to_u64_checked(1.23).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(value: f64) -> EvalResult<u64> {
    if !value.is_finite() {
        return Err(EvalError::domain(format!("cannot convert non-finite value {value} to an integer")));
    }
    if value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return Err(EvalError::domain(format!("{value} is out of the integer range")));
    }
    if value.fract() != 0.0 {
        return Err(EvalError::domain(format!("{value} is not an integer")));
    }
    Ok(value as u64)
}
