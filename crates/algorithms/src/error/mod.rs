//! Error handling for the hashing engines

use core::fmt;

use tsha_api::{Error as CoreError, Result as CoreResult, ResultExt};

/// The error type for the hashing engines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The state was never reset, has been closed, or is in an FSM state
    /// that does not accept the operation
    InvalidState {
        /// Operation that was rejected
        context: &'static str,
    },

    /// The padding state machine violated a buffer-capacity invariant and
    /// is now in its error state
    Protocol {
        /// Operation that observed the failure
        context: &'static str,
        /// Name of the FSM state the failure was detected in
        state: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length (or upper bound) in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for hashing engine operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidState { context } => {
                write!(f, "Invalid hash state in {}", context)
            }
            Error::Protocol { context, state } => {
                write!(f, "Padding protocol violated in {} (state {})", context, state)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidState { context } => CoreError::InvalidState { context },
            Error::Protocol { context, state } => CoreError::Protocol { context, state },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Parameter { name, reason } => {
                #[cfg(not(feature = "std"))]
                let _ = reason;
                CoreError::InvalidParameter {
                    context: name,
                    #[cfg(feature = "std")]
                    message: reason.to_string(),
                }
            }
        }
    }
}

/// Convert an engine result to an API result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.with_context(ctx)
}

// Include the validation submodule
pub mod validate;
