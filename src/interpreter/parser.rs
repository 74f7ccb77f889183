/// Core parsing entry points.
///
/// Contains the token stream, the top-level expression rule and the nesting
/// depth guard.
pub mod core;

/// Unary operator and atom parsing.
///
/// Handles prefix signs, numbers, constants, function calls and
/// parenthesized groups.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative and exponent precedence levels.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides the comma-separated argument list parser.
pub mod utils;
