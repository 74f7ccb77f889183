use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::EvalError,
    interpreter::evaluator::{angle::AngleMode, constant::lookup_constant, utils::ensure_finite},
    util::display::format_result,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the evaluation context.
///
/// The context is a snapshot of everything an evaluation may read besides
/// the tree itself. Only the angle mode varies; constants and functions come
/// from the fixed registries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    /// How trigonometric functions interpret angles.
    pub angle_mode: AngleMode,
}

impl Context {
    /// Creates a new evaluation context with the given angle mode.
    #[must_use]
    pub const fn new(angle_mode: AngleMode) -> Self {
        Self { angle_mode }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// The evaluator dispatches based on expression variant: literals,
    /// constants, unary and binary operations, and function calls. Arguments
    /// are evaluated left to right and the first failure aborts evaluation.
    ///
    /// # Example
    /// ```
    /// use scicalc::{
    ///     AngleMode,
    ///     interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_tokens},
    /// };
    ///
    /// let tokens = tokenize("sin(90)*2").unwrap();
    /// let expr = parse_tokens(&tokens).unwrap();
    ///
    /// let value = Context::new(AngleMode::Degrees).eval(&expr).unwrap();
    /// assert_eq!(value, 2.0);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Constant { name, position } => {
                lookup_constant(name).ok_or_else(|| EvalError::InvalidInput { token:    name.clone(),
                                                                             position: *position, })
            },
            Expr::UnaryOp { op, expr, .. } => {
                let value = self.eval(expr)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *position)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 position, } => {
                let args = arguments.iter()
                                    .map(|arg| self.eval(arg))
                                    .collect::<EvalResult<Vec<_>>>()?;
                self.eval_function(name, args, *position)
            },
        }
    }

    /// Evaluates a unary operation on a value.
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Negate => -value,
            UnaryOperator::Plus => value,
        }
    }

    /// Evaluates a binary arithmetic operation.
    ///
    /// Division by zero, and raising zero to a negative power, fail with
    /// `DivisionByZero` instead of producing an infinity. Any other
    /// non-finite result (overflow, or a power without a real value such as
    /// `(-8)^(1/3)`) is a domain error.
    ///
    /// # Example
    /// ```
    /// use scicalc::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let r = Context::eval_binary(BinaryOperator::Pow, 2.0, 10.0, 1).unwrap();
    /// assert_eq!(r, 1024.0);
    ///
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0, 1).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: f64,
                       right: f64,
                       position: usize)
                       -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        let value = match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero { position });
                }
                left / right
            },
            Pow => {
                if left == 0.0 && right < 0.0 {
                    return Err(EvalError::DivisionByZero { position });
                }
                left.powf(right)
            },
        };

        if value.is_finite() {
            return Ok(value);
        }
        ensure_finite(value,
                      &format!("{} {op} {}", format_result(left), format_result(right)))
    }
}
