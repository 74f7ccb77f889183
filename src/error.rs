/// Validation errors.
///
/// Defines the error raised by the allow-list gate when the normalized text
/// contains a character or identifier outside the mathematical vocabulary.
pub mod input_error;
/// Evaluation errors.
///
/// Contains the full error taxonomy reported by the public entry points:
/// rejected input, malformed grammar, wrong argument counts, undefined
/// mathematical operations and division by zero.
pub mod eval_error;

pub use eval_error::{ErrorKind, EvalError};
pub use input_error::InvalidInputError;
