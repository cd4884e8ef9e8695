//! Error types for splitrand

use thiserror::Error;

/// Result type alias using splitrand's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in splitrand operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Entropy request exceeding the counter range one hash call can address.
    ///
    /// This is a capacity limit, not a transient fault: a caller needing more
    /// raw words must split the key and issue multiple smaller requests.
    #[error(
        "requesting {requested} random words exceeds the {max} addressable by \
         a single hash call; split the key and issue multiple calls"
    )]
    CounterOverflow {
        /// Number of 32-bit words requested
        requested: u64,
        /// Maximum words addressable per call
        max: u64,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
