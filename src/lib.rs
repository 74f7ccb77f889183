//! # scicalc
//!
//! scicalc is a safe scientific calculator engine written in Rust.
//! It normalizes, validates and evaluates textual math expressions such as
//! `2(3+4)`, `2π`, `sin(30)` or `√9`, with implicit multiplication, named
//! constants, a fixed function registry and a degrees/radians switch.
//!
//! Input never reaches the parser unless every token belongs to the
//! mathematical vocabulary, and nothing is ever executed as code.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{evaluator::evaluate, normalizer::normalize, validator::validate};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The AST is built by the parser and traversed by
/// the evaluator.
///
/// # Responsibilities
/// - Defines expression nodes for literals, constants, operators and calls.
/// - Attaches source positions to nodes for error reporting.
pub mod ast;
/// Provides unified error types for validation and evaluation.
///
/// This module defines every error that can be raised while validating,
/// parsing or evaluating an expression, with the offending token or position
/// where one exists.
///
/// # Responsibilities
/// - Defines the validator's `InvalidInputError`.
/// - Defines `EvalError`, the full taxonomy returned by the entry points.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together normalization, validation, lexing, parsing and
/// evaluation. Data flows one way: text, normalized text, validated text,
/// number.
///
/// # Responsibilities
/// - Coordinates all pipeline stages.
/// - Owns the constant table, function registry and angle mode.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;
/// General utilities for numeric conversion and display.
///
/// # Responsibilities
/// - Safely convert between `u64` and `f64` without silent data loss.
/// - Format results for the command-line front end.
pub mod util;

pub use error::{EvalError, InvalidInputError};
pub use interpreter::evaluator::angle::AngleMode;

/// Evaluates a raw expression in the given angle mode.
///
/// This is the single entry point of the engine. The input is normalized,
/// checked against the allow-list and then parsed and evaluated. Every
/// failure is returned as a typed [`EvalError`]; no partial result is ever
/// produced.
///
/// # Errors
/// - `InvalidInput` if the input contains anything outside the mathematical
///   vocabulary.
/// - `Syntax` for malformed expressions.
/// - `Arity` for calls with the wrong number of arguments.
/// - `Domain` for undefined operations such as `sqrt(-1)`.
/// - `DivisionByZero` for `x/0`.
///
/// # Examples
/// ```
/// use scicalc::{AngleMode, evaluate_expression};
///
/// assert_eq!(evaluate_expression("2(3+4)", AngleMode::Degrees).unwrap(), 14.0);
/// assert_eq!(evaluate_expression("√(9)", AngleMode::Degrees).unwrap(), 3.0);
///
/// let half = evaluate_expression("sin(30)", AngleMode::Degrees).unwrap();
/// assert!((half - 0.5).abs() < 1e-12);
///
/// // Anything that is not math is rejected before parsing.
/// assert!(evaluate_expression("__import__('os')", AngleMode::Degrees).is_err());
/// ```
pub fn evaluate_expression(raw: &str, angle_mode: AngleMode) -> Result<f64, EvalError> {
    let normalized = normalize(raw);
    debug!(%raw, %normalized, %angle_mode, "normalized");

    validate(&normalized).map_err(EvalError::from)
                         .and_then(|validated| evaluate(&validated, angle_mode))
                         .inspect_err(|err| debug!(kind = %err.kind(), %err, "evaluation failed"))
}

/// A calculator holding the angle mode between evaluations.
///
/// The mode starts in degrees and persists until changed, as on a desk
/// calculator. Each call to [`Calculator::evaluate`] reads the mode once.
///
/// # Example
/// ```
/// use scicalc::{AngleMode, Calculator};
///
/// let mut calc = Calculator::new();
/// assert_eq!(calc.mode(), AngleMode::Degrees);
/// assert!((calc.evaluate("cos(60)").unwrap() - 0.5).abs() < 1e-12);
///
/// calc.toggle_mode();
/// assert_eq!(calc.mode(), AngleMode::Radians);
/// assert!((calc.evaluate("cos(pi)").unwrap() + 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator {
    mode: AngleMode,
}

impl Calculator {
    /// Creates a calculator in degree mode.
    #[must_use]
    pub const fn new() -> Self {
        Self { mode: AngleMode::Degrees }
    }

    /// Creates a calculator in the given mode.
    #[must_use]
    pub const fn with_mode(mode: AngleMode) -> Self {
        Self { mode }
    }

    /// Returns the current angle mode.
    #[must_use]
    pub const fn mode(&self) -> AngleMode {
        self.mode
    }

    /// Sets the angle mode for later evaluations.
    pub const fn set_mode(&mut self, mode: AngleMode) {
        self.mode = mode;
    }

    /// Switches between degrees and radians and returns the new mode.
    pub const fn toggle_mode(&mut self) -> AngleMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Evaluates `raw` in the current mode.
    ///
    /// See [`evaluate_expression`].
    pub fn evaluate(&self, raw: &str) -> Result<f64, EvalError> {
        evaluate_expression(raw, self.mode)
    }
}
