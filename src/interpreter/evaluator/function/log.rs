use crate::{
    error::EvalError,
    interpreter::evaluator::{core::EvalResult, utils::check_arity},
};

/// Computes the natural logarithm.
///
/// # Example
/// ```
/// use scicalc::interpreter::evaluator::function::log::ln;
///
/// assert_eq!(ln(&[1.0]).unwrap(), 0.0);
/// assert!(ln(&[0.0]).is_err());
/// ```
pub fn ln(args: &[f64]) -> EvalResult<f64> {
    check_arity("ln", args, 1)?;

    positive("ln", args[0]).map(f64::ln)
}

/// Computes the base-2 logarithm.
pub fn log2(args: &[f64]) -> EvalResult<f64> {
    check_arity("log2", args, 1)?;

    positive("log2", args[0]).map(f64::log2)
}

/// Computes the logarithm of a value, base 10 by default.
///
/// With one argument this is the common logarithm. With two arguments the
/// second one is the base: `log(value, base) = ln(value) / ln(base)`.
/// The base must be positive and different from 1.
///
/// # Example
/// ```
/// use scicalc::interpreter::evaluator::function::log::log;
///
/// assert!((log(&[1000.0]).unwrap() - 3.0).abs() < 1e-12);
/// assert!((log(&[8.0, 2.0]).unwrap() - 3.0).abs() < 1e-12);
/// assert!(log(&[8.0, 1.0]).is_err());
/// ```
pub fn log(args: &[f64]) -> EvalResult<f64> {
    match args {
        [value] => positive("log", *value).map(f64::log10),
        [value, base] => {
            let value = positive("log", *value)?;
            let base = positive("log base", *base)?;
            if base == 1.0 {
                return Err(EvalError::domain("log base must not be 1"));
            }
            Ok(value.ln() / base.ln())
        },
        _ => Err(EvalError::Arity { name:     "log".to_string(),
                                    expected: "1 or 2".to_string(),
                                    found:    args.len(), }),
    }
}

fn positive(name: &str, x: f64) -> EvalResult<f64> {
    if x > 0.0 {
        Ok(x)
    } else {
        Err(EvalError::domain(format!("{name} is only defined for positive numbers, but found {x}")))
    }
}
