/// Result formatting for display.
///
/// Turns evaluation results into the short text shown by the command-line
/// front end.
pub mod display;
/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding errors.
/// Use these helpers whenever an integer-only operation, such as a factorial,
/// receives an `f64`.
pub mod num;
