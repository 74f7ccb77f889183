use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Checks that a builtin received exactly `expected` arguments.
///
/// The registry already validates arity before dispatching; builtins call
/// this as well so they are safe to use on their own.
///
/// # Example
/// ```
/// use scicalc::interpreter::evaluator::utils::check_arity;
///
/// assert!(check_arity("sin", &[1.0], 1).is_ok());
/// assert!(check_arity("sin", &[1.0, 2.0], 1).is_err());
/// ```
pub fn check_arity<T>(name: &str, args: &[T], expected: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(EvalError::Arity { name: name.to_string(),
                               expected: expected.to_string(),
                               found: args.len() })
    }
}

/// Rejects non-finite intermediate results.
///
/// `what` names the operation for the error message. NaN means the operation
/// has no real result, infinity means it overflowed.
///
/// # Example
/// ```
/// use scicalc::interpreter::evaluator::utils::ensure_finite;
///
/// assert_eq!(ensure_finite(2.0, "x").unwrap(), 2.0);
/// assert!(ensure_finite(f64::NAN, "x").is_err());
/// assert!(ensure_finite(f64::INFINITY, "x").is_err());
/// ```
pub fn ensure_finite(value: f64, what: &str) -> EvalResult<f64> {
    if value.is_nan() {
        Err(EvalError::domain(format!("{what} has no real result")))
    } else if value.is_infinite() {
        Err(EvalError::domain(format!("{what} overflows")))
    } else {
        Ok(value)
    }
}
