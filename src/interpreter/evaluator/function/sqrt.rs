use crate::{
    error::EvalError,
    interpreter::evaluator::{core::EvalResult, utils::check_arity},
};

/// Computes the square root of a non-negative number.
///
/// Negative input has no real square root and produces a domain error.
///
/// # Example
/// ```
/// use scicalc::interpreter::evaluator::function::sqrt::sqrt;
///
/// assert_eq!(sqrt(&[9.0]).unwrap(), 3.0);
/// assert!(sqrt(&[-4.0]).is_err());
/// ```
pub fn sqrt(args: &[f64]) -> EvalResult<f64> {
    check_arity("sqrt", args, 1)?;

    let x = args[0];
    if x < 0.0 {
        return Err(EvalError::domain(format!("sqrt of negative number {x}")));
    }
    Ok(x.sqrt())
}

/// Computes the real cube root. Defined for every real number.
pub fn cbrt(args: &[f64]) -> EvalResult<f64> {
    check_arity("cbrt", args, 1)?;

    Ok(args[0].cbrt())
}

/// Computes the n-th root: `root(x, n) = x^(1 / n)`.
///
/// Odd integer roots of negative numbers are real and returned with their
/// sign. Any other root of a negative number is a domain error, as is a zero
/// index.
///
/// # Example
/// ```
/// use scicalc::interpreter::evaluator::function::sqrt::root;
///
/// assert_eq!(root(&[16.0, 4.0]).unwrap(), 2.0);
/// assert!((root(&[-27.0, 3.0]).unwrap() + 3.0).abs() < 1e-12);
/// assert!(root(&[-16.0, 4.0]).is_err());
/// ```
pub fn root(args: &[f64]) -> EvalResult<f64> {
    check_arity("root", args, 2)?;

    let (x, n) = (args[0], args[1]);
    if n == 0.0 {
        return Err(EvalError::domain("root index must not be 0"));
    }
    if x >= 0.0 {
        return Ok(x.powf(n.recip()));
    }

    let odd_integer = n.fract() == 0.0 && n.rem_euclid(2.0) == 1.0;
    if !odd_integer {
        return Err(EvalError::domain(format!("root {n} of negative number {x}")));
    }
    Ok(-(-x).powf(n.recip()))
}
