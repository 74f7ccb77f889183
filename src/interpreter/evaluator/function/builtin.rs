use crate::{
    error::EvalError,
    interpreter::evaluator::{core::EvalResult, utils::check_arity},
};

/// Values of `cos` smaller than this are treated as a pole of `tan`.
const TAN_POLE_EPSILON: f64 = 1e-12;

/// Applies a unary `f64` method as a builtin function.
///
/// The generated functions accept exactly one argument and never fail on
/// finite input; non-finite results are caught by the evaluator.
///
/// # Example
/// ```
/// use scicalc::interpreter::evaluator::function::builtin::sin;
///
/// let r = sin(&[std::f64::consts::FRAC_PI_2]).unwrap();
/// assert_eq!(r, 1.0);
/// ```
macro_rules! real_builtin {
    ($($fname:ident => $real_fn:ident),* $(,)?) => {
        $(
            pub fn $fname(args: &[f64]) -> EvalResult<f64> {
                check_arity(stringify!($fname), args, 1)?;

                Ok(args[0].$real_fn())
            }
        )*
    };
}

real_builtin! {
    sin   => sin,
    cos   => cos,
    atan  => atan,
    sinh  => sinh,
    cosh  => cosh,
    tanh  => tanh,
    exp   => exp,
    abs   => abs,
    floor => floor,
    ceil  => ceil,
    round => round,
}

/// Computes the tangent of an angle in radians.
///
/// Fails with a domain error at the poles, where the cosine vanishes.
///
/// # Example
/// ```
/// use scicalc::interpreter::evaluator::function::builtin::tan;
///
/// assert!(tan(&[std::f64::consts::FRAC_PI_2]).is_err());
/// assert!((tan(&[std::f64::consts::FRAC_PI_4]).unwrap() - 1.0).abs() < 1e-12);
/// ```
pub fn tan(args: &[f64]) -> EvalResult<f64> {
    check_arity("tan", args, 1)?;

    let x = args[0];
    if x.cos().abs() < TAN_POLE_EPSILON {
        return Err(EvalError::domain(format!("tan is undefined at {x} rad")));
    }
    Ok(x.tan())
}

/// Computes the arcsine in radians. The argument must lie in `[-1, 1]`.
pub fn asin(args: &[f64]) -> EvalResult<f64> {
    check_arity("asin", args, 1)?;

    unit_interval("asin", args[0]).map(f64::asin)
}

/// Computes the arccosine in radians. The argument must lie in `[-1, 1]`.
pub fn acos(args: &[f64]) -> EvalResult<f64> {
    check_arity("acos", args, 1)?;

    unit_interval("acos", args[0]).map(f64::acos)
}

/// Computes the four-quadrant arctangent of `y / x` in radians.
///
/// `atan2(0, 0)` is undefined and reported as a domain error.
pub fn atan2(args: &[f64]) -> EvalResult<f64> {
    check_arity("atan2", args, 2)?;

    let (y, x) = (args[0], args[1]);
    if y == 0.0 && x == 0.0 {
        return Err(EvalError::domain("atan2 is undefined at (0, 0)"));
    }
    Ok(y.atan2(x))
}

/// Raises the first argument to the power of the second.
///
/// This is the function form of `^` and shares its rules: a zero base with a
/// negative exponent is a division by zero.
pub fn pow(args: &[f64]) -> EvalResult<f64> {
    check_arity("pow", args, 2)?;

    let (base, exponent) = (args[0], args[1]);
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero { position: 0 });
    }
    Ok(base.powf(exponent))
}

/// Returns the smallest or largest of one or more arguments.
///
/// # Example
/// ```
/// use scicalc::interpreter::evaluator::function::builtin::min_max;
///
/// assert_eq!(min_max("max", &[1.0, 7.5, -2.0]).unwrap(), 7.5);
/// assert_eq!(min_max("min", &[1.0, 7.5, -2.0]).unwrap(), -2.0);
/// ```
pub fn min_max(name: &str, args: &[f64]) -> EvalResult<f64> {
    let fold = match name {
        "min" => f64::min,
        "max" => f64::max,
        _ => return Err(EvalError::domain(format!("'{name}' is not min or max"))),
    };

    args.iter()
        .copied()
        .reduce(fold)
        .ok_or_else(|| EvalError::Arity { name:     name.to_string(),
                                          expected: "at least 1".to_string(),
                                          found:    0, })
}

fn unit_interval(name: &str, x: f64) -> EvalResult<f64> {
    if (-1.0..=1.0).contains(&x) {
        Ok(x)
    } else {
        Err(EvalError::domain(format!("{name} is only defined on [-1, 1], but found {x}")))
    }
}
