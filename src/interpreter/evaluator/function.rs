/// Trigonometric, hyperbolic, exponential and rounding builtins.
///
/// Angle conversion happens before these functions are called, so every
/// trigonometric builtin works in radians.
pub mod builtin;
/// The `factorial` function implementation.
///
/// Restricted to non-negative integers small enough to fit in an `f64`.
pub mod factorial;
/// Logarithm function implementations.
///
/// Supports natural, base-10, base-2 and arbitrary-base logarithms.
pub mod log;
/// Root function implementations.
///
/// Computes square roots, cube roots and n-th roots in the real domain.
pub mod sqrt;

/// The function registry and call dispatch.
pub mod core;
