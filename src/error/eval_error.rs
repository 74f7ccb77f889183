use std::fmt;

use thiserror::Error;

use crate::error::InvalidInputError;

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents every way an evaluation can fail.
///
/// Normalization never fails; the validator produces `InvalidInput` and the
/// parser and numeric engine produce the remaining variants. Each failure is
/// terminal for the call that raised it.
pub enum EvalError {
    /// The input contains a character or identifier outside the allow-list.
    #[error("Error at position {position}: Disallowed input '{token}'.")]
    InvalidInput {
        /// The offending substring.
        token:    String,
        /// Character offset in the normalized expression.
        position: usize,
    },
    /// The expression is not well formed.
    #[error("Error at position {position}: Syntax error: {message}.")]
    Syntax {
        /// What the parser expected or found.
        message:  String,
        /// Character offset in the normalized expression.
        position: usize,
    },
    /// A function was called with the wrong number of arguments.
    #[error("Function '{name}' expects {expected} argument(s), but {found} were given.")]
    Arity {
        /// The function name.
        name:     String,
        /// Human readable description of the accepted argument count.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// The operation is mathematically undefined for its input.
    #[error("Domain error: {details}.")]
    Domain {
        /// Details about the undefined operation.
        details: String,
    },
    /// Attempted division by zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Character offset of the operator in the normalized expression.
        position: usize,
    },
}

/// The kind of an [`EvalError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    Syntax,
    Arity,
    Domain,
    DivisionByZero,
}

impl EvalError {
    /// Builds a syntax error.
    pub fn syntax(message: impl Into<String>, position: usize) -> Self {
        Self::Syntax { message: message.into(),
                       position }
    }

    /// Builds a domain error.
    pub fn domain(details: impl Into<String>) -> Self {
        Self::Domain { details: details.into() }
    }

    /// Returns the kind of this error.
    ///
    /// # Example
    /// ```
    /// use scicalc::{AngleMode, error::ErrorKind, evaluate_expression};
    ///
    /// let err = evaluate_expression("1/0", AngleMode::Degrees).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::Syntax { .. } => ErrorKind::Syntax,
            Self::Arity { .. } => ErrorKind::Arity,
            Self::Domain { .. } => ErrorKind::Domain,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
        }
    }

    /// Returns the character position the error refers to, when it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidInput { position, .. }
            | Self::Syntax { position, .. }
            | Self::DivisionByZero { position } => Some(*position),
            Self::Arity { .. } | Self::Domain { .. } => None,
        }
    }
}

impl From<InvalidInputError> for EvalError {
    fn from(err: InvalidInputError) -> Self {
        Self::InvalidInput { token:    err.token,
                             position: err.position, }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidInput => "InvalidInputError",
            Self::Syntax => "SyntaxError",
            Self::Arity => "ArityError",
            Self::Domain => "DomainError",
            Self::DivisionByZero => "DivisionByZero",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for ErrorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "InvalidInputError" | "InvalidInput" => Ok(Self::InvalidInput),
            "SyntaxError" | "Syntax" => Ok(Self::Syntax),
            "ArityError" | "Arity" => Ok(Self::Arity),
            "DomainError" | "Domain" => Ok(Self::Domain),
            "DivisionByZero" => Ok(Self::DivisionByZero),
            other => Err(format!("unknown error kind '{other}'")),
        }
    }
}
