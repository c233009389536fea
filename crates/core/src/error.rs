//! Error types for colbatch
//!
//! Three failure classes are kept apart:
//! - precondition violations on keys ([`KeyError`], wrapped as `InvalidKey`)
//! - misuse of a batch after it was executed (`BatchExecuted`)
//! - failures reported by the submitter ([`SubmitError`]), passed through verbatim
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::consistency::ConsistencyLevel;
use crate::key::KeyError;
use thiserror::Error;

/// Result type alias for colbatch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by a [`BatchSubmitter`](crate::traits::BatchSubmitter)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Connection could not be acquired or broke mid-request
    #[error("Transport error: {0}")]
    Transport(String),

    /// The store did not answer in time
    #[error("Timed out after {elapsed_ms}ms")]
    Timeout {
        /// Time spent waiting
        elapsed_ms: u64,
    },

    /// Not enough live replicas to satisfy the requested level
    #[error("Consistency level {level} not met: {alive} replica(s) available")]
    Unavailable {
        /// Requested level
        level: ConsistencyLevel,
        /// Replicas that were reachable
        alive: u32,
    },

    /// The store refused the request as invalid
    #[error("Request rejected: {0}")]
    Rejected(String),
}

/// Error types for colbatch
#[derive(Debug, Error)]
pub enum Error {
    /// Key precondition violated
    #[error("Invalid key: {0}")]
    InvalidKey(#[from] KeyError),

    /// Batch was already executed and cannot be modified or re-sent
    #[error("Batch already executed")]
    BatchExecuted,

    /// Submission failed; the batch is consumed
    #[error("Submission failed: {0}")]
    Submit(#[from] SubmitError),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this is a programming error rather than an environmental one
    pub fn is_misuse(&self) -> bool {
        matches!(self, Error::BatchExecuted)
    }
}
