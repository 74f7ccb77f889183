use thiserror::Error;

/// A token rejected by the validator.
///
/// `token` is the offending substring exactly as it appears in the normalized
/// expression, and `position` is its character offset in that expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error at position {position}: Disallowed input '{token}'.")]
pub struct InvalidInputError {
    /// The offending substring.
    pub token:    String,
    /// Character offset of the substring in the normalized expression.
    pub position: usize,
}

impl InvalidInputError {
    /// Creates a new error for `token` found at `position`.
    #[must_use]
    pub fn new(token: impl Into<String>, position: usize) -> Self {
        Self { token: token.into(),
               position }
    }
}
