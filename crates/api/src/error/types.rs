//! Error type definitions for hashing operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for the tsha ecosystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A hash state was used before `reset`, after `close`, or in an FSM
    /// state that does not accept the requested operation
    InvalidState {
        context: &'static str,
    },

    /// The padding state machine hit an internal capacity invariant and
    /// entered its error state
    Protocol {
        context: &'static str,
        state: &'static str,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for hashing operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidState { .. } => Self::InvalidState { context },
            Self::Protocol { state, .. } => Self::Protocol { context, state },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            #[cfg(feature = "std")]
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { .. } => Self::InvalidParameter { context },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidState { context } => {
                write!(f, "Invalid hash state: {}", context)
            }
            Self::Protocol { context, state } => {
                write!(f, "Protocol error in {} (state {})", context, state)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            }
        }
    }
}
