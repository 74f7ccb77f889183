use crate::{
    error::EvalError,
    interpreter::evaluator::{core::EvalResult, utils::check_arity},
    util::num::{f64_to_u64_checked, u64_to_f64_checked},
};

/// Largest `n` for which `n!` is finite as an `f64`.
pub const MAX_FACTORIAL: u64 = 170;

/// Computes `n!` for a non-negative integer `n`.
///
/// Fractional, negative and too large arguments are domain errors. The
/// product is accumulated in `f64` since `n!` outgrows `u64` at `n = 21`.
///
/// # Example
/// ```
/// use scicalc::interpreter::evaluator::function::factorial::factorial;
///
/// assert_eq!(factorial(&[5.0]).unwrap(), 120.0);
/// assert_eq!(factorial(&[0.0]).unwrap(), 1.0);
/// assert!(factorial(&[-1.0]).is_err());
/// assert!(factorial(&[2.5]).is_err());
/// ```
pub fn factorial(args: &[f64]) -> EvalResult<f64> {
    check_arity("factorial", args, 1)?;

    let x = args[0];
    if x < 0.0 {
        return Err(EvalError::domain(format!("factorial not defined for negative number {x}")));
    }
    let n = f64_to_u64_checked(x).map_err(|_| {
                                      EvalError::domain(format!("factorial is only defined for integers, but found {x}"))
                                  })?;
    if n > MAX_FACTORIAL {
        return Err(EvalError::domain(format!("{n}! is too large to represent")));
    }

    (2..=n).try_fold(1.0, |acc, k| Ok(acc * u64_to_f64_checked(k)?))
}
