use tracing::debug;

use crate::{
    error::InvalidInputError,
    interpreter::{
        evaluator::{constant::is_constant, function::core::is_function},
        lexer::{Token, tokenize},
    },
};

/// Checks that a normalized expression uses only the calculator vocabulary.
///
/// Accepted are numeric literals, the operators `+ - * / ^`, parentheses,
/// commas, registered constants and registered function names. Anything
/// else, such as `;`, quotes, `.` outside a number, `=`, brackets, or an
/// unknown word like `os` or `__import__`, is rejected before any parsing
/// or evaluation takes place.
///
/// Names are matched exactly, so `PI` or `Sin` are unknown.
///
/// Grammar is not checked here; `2+` passes and fails later as a syntax
/// error.
///
/// # Errors
/// Returns an [`InvalidInputError`] naming the first disallowed token and its
/// character position.
///
/// # Example
/// ```
/// use scicalc::interpreter::validator::validate;
///
/// assert_eq!(validate("2*sqrt(9)").unwrap(), "2*sqrt(9)");
///
/// let err = validate("2+os").unwrap_err();
/// assert_eq!(err.token, "os");
/// assert_eq!(err.position, 2);
/// ```
pub fn validate(normalized: &str) -> Result<String, InvalidInputError> {
    let tokens = tokenize(normalized).inspect_err(|err| {
        debug!(token = %err.token, position = err.position, "rejected text outside vocabulary");
    })?;

    for (tok, position) in &tokens {
        if let Token::Identifier(name) = tok
           && !is_constant(name)
           && !is_function(name)
        {
            debug!(%name, position, "rejected unknown identifier");
            return Err(InvalidInputError::new(name.as_str(), *position));
        }
    }

    Ok(normalized.to_string())
}
