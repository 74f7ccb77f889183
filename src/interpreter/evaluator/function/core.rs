use std::fmt;

use tracing::trace;

use crate::{
    error::EvalError,
    interpreter::evaluator::{
        angle::AngleUse,
        core::{Context, EvalResult},
        function::{builtin, factorial, log, sqrt},
        utils::ensure_finite,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated arguments, already converted to
/// radians where the function is angle-sensitive.
pub type BuiltinFn = fn(&[f64]) -> EvalResult<f64>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

/// Registry entry for one builtin function.
#[derive(Debug)]
pub struct BuiltinDef {
    pub name:  &'static str,
    pub arity: Arity,
    pub angle: AngleUse,
    pub func:  BuiltinFn,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity constraint,
/// - how the function uses the angle mode,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                angle: $angle:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, angle: $angle, func: $func },
            )*
        ];
        /// Names of every function in the registry.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"       => { arity: Arity::Exact(1), angle: AngleUse::Argument, func: builtin::sin },
    "cos"       => { arity: Arity::Exact(1), angle: AngleUse::Argument, func: builtin::cos },
    "tan"       => { arity: Arity::Exact(1), angle: AngleUse::Argument, func: builtin::tan },
    "asin"      => { arity: Arity::Exact(1), angle: AngleUse::Result,   func: builtin::asin },
    "acos"      => { arity: Arity::Exact(1), angle: AngleUse::Result,   func: builtin::acos },
    "atan"      => { arity: Arity::Exact(1), angle: AngleUse::Result,   func: builtin::atan },
    "atan2"     => { arity: Arity::Exact(2), angle: AngleUse::Result,   func: builtin::atan2 },
    "sinh"      => { arity: Arity::Exact(1), angle: AngleUse::None,     func: builtin::sinh },
    "cosh"      => { arity: Arity::Exact(1), angle: AngleUse::None,     func: builtin::cosh },
    "tanh"      => { arity: Arity::Exact(1), angle: AngleUse::None,     func: builtin::tanh },
    "sqrt"      => { arity: Arity::Exact(1), angle: AngleUse::None,     func: sqrt::sqrt },
    "cbrt"      => { arity: Arity::Exact(1), angle: AngleUse::None,     func: sqrt::cbrt },
    "root"      => { arity: Arity::Exact(2), angle: AngleUse::None,     func: sqrt::root },
    "exp"       => { arity: Arity::Exact(1), angle: AngleUse::None,     func: builtin::exp },
    "ln"        => { arity: Arity::Exact(1), angle: AngleUse::None,     func: log::ln },
    "log"       => { arity: Arity::OneOf(&[1, 2]), angle: AngleUse::None, func: log::log },
    "log2"      => { arity: Arity::Exact(1), angle: AngleUse::None,     func: log::log2 },
    "abs"       => { arity: Arity::Exact(1), angle: AngleUse::None,     func: builtin::abs },
    "floor"     => { arity: Arity::Exact(1), angle: AngleUse::None,     func: builtin::floor },
    "ceil"      => { arity: Arity::Exact(1), angle: AngleUse::None,     func: builtin::ceil },
    "round"     => { arity: Arity::Exact(1), angle: AngleUse::None,     func: builtin::round },
    "factorial" => { arity: Arity::Exact(1), angle: AngleUse::None,     func: factorial::factorial },
    "pow"       => { arity: Arity::Exact(2), angle: AngleUse::None,     func: builtin::pow },
    "min"       => { arity: Arity::AtLeast(1), angle: AngleUse::None,   func: |args| builtin::min_max("min", args) },
    "max"       => { arity: Arity::AtLeast(1), angle: AngleUse::None,   func: |args| builtin::min_max("max", args) },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::OneOf(arr) => {
                let parts = arr.iter().map(ToString::to_string).collect::<Vec<_>>();
                f.write_str(&parts.join(" or "))
            },
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Looks up a builtin function by its exact name.
///
/// # Example
/// ```
/// use scicalc::interpreter::evaluator::function::core::{Arity, lookup_function};
///
/// let def = lookup_function("atan2").unwrap();
/// assert_eq!(def.arity, Arity::Exact(2));
/// assert!(lookup_function("system").is_none());
/// ```
#[must_use]
pub fn lookup_function(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// Returns `true` if `name` is a registered function.
#[must_use]
pub fn is_function(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

impl Context {
    /// Evaluates a builtin function call.
    ///
    /// The function is looked up in the registry, its arity is verified, and
    /// angle-sensitive arguments or results are converted according to the
    /// context's angle mode. Non-finite results become domain errors.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Evaluated argument values.
    /// - `position`: Position of the call for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup, arity or the computation
    /// fails.
    pub(crate) fn eval_function(&self,
                                name: &str,
                                mut args: Vec<f64>,
                                position: usize)
                                -> EvalResult<f64> {
        let builtin = lookup_function(name).ok_or_else(|| EvalError::InvalidInput {
                                                          token: name.to_string(),
                                                          position,
                                                      })?;

        if !builtin.arity.check(args.len()) {
            return Err(EvalError::Arity { name:     name.to_string(),
                                          expected: builtin.arity.to_string(),
                                          found:    args.len(), });
        }

        if builtin.angle == AngleUse::Argument
           && let Some(first) = args.first_mut()
        {
            *first = self.angle_mode.to_radians(*first);
        }

        let mut result = (builtin.func)(&args).map_err(|err| match err {
                                                  EvalError::DivisionByZero { .. } => {
                                                      EvalError::DivisionByZero { position }
                                                  },
                                                  other => other,
                                              })?;

        if builtin.angle == AngleUse::Result {
            result = self.angle_mode.from_radians(result);
        }

        trace!(function = name, ?args, result, "builtin call");
        ensure_finite(result, name)
    }
}
