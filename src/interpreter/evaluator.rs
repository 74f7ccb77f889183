use tracing::trace;

use crate::interpreter::{lexer::tokenize, parser::core::parse_tokens};

/// Angle mode handling.
///
/// Defines the degrees/radians switch and how builtins use it.
pub mod angle;

/// The constant table.
///
/// Fixed mapping from constant names to their values.
pub mod constant;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context and the arithmetic on `f64` values.
pub mod core;

/// Function evaluation.
///
/// Holds the function registry, builtin implementations, argument checking
/// and angle conversion.
pub mod function;

/// Utility functions for evaluation.
///
/// Provides helpers shared by the builtins and the arithmetic.
pub mod utils;

use self::{
    angle::AngleMode,
    core::{Context, EvalResult},
};

/// Parses and evaluates a validated expression.
///
/// This is the last stage of the pipeline: the text is tokenized, parsed
/// into an [`Expr`](crate::ast::Expr) tree and evaluated in a context
/// holding `mode`. The text should come from
/// [`validate`](crate::interpreter::validator::validate); anything the
/// lexer does not recognize is still rejected as invalid input.
///
/// # Errors
/// Returns a syntax error for malformed grammar, an arity error for wrong
/// argument counts, a domain error for undefined operations, or
/// `DivisionByZero`.
///
/// # Example
/// ```
/// use scicalc::{AngleMode, interpreter::evaluator::evaluate};
///
/// assert_eq!(evaluate("2^3^2", AngleMode::Radians).unwrap(), 512.0);
/// assert!(evaluate("(1", AngleMode::Radians).is_err());
/// ```
pub fn evaluate(validated: &str, mode: AngleMode) -> EvalResult<f64> {
    let tokens = tokenize(validated)?;
    trace!(?tokens, "tokenized");
    let expr = parse_tokens(&tokens)?;
    trace!(%expr, "parsed");

    Context::new(mode).eval(&expr)
}
