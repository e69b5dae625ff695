//! Error types for lexrank
//!
//! This module defines all error types used throughout the workspace.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every variant belongs to one of three kinds (see [`ErrorKind`]):
//! - Configuration: the corpus or config cannot be used at all
//! - InvalidInput: a call was made with arguments the contract rejects
//! - DegenerateData: the input was valid but carries no usable signal

use std::io;
use thiserror::Error;

/// Result type alias for lexrank operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for lexrank
#[derive(Debug, Error)]
pub enum Error {
    /// A document with zero tokens was supplied at corpus-build time
    #[error("Document {index} has no tokens")]
    EmptyDocument {
        /// Corpus index of the offending document
        index: usize,
    },

    /// A standalone document with zero tokens was passed to scoring
    #[error("Document has no tokens")]
    EmptyTokens,

    /// Configuration value out of range or unparseable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error while reading or writing a config file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Query with zero tokens passed to coverage computation
    #[error("Query has no tokens")]
    EmptyQuery,

    /// Empty vector passed to normalization
    #[error("Cannot normalize an empty vector")]
    EmptyVector,

    /// Blend weight outside [0, 1]
    #[error("Blend weight must be within [0, 1], got {0}")]
    InvalidWeight(f64),

    /// All values identical, standard deviation is zero
    #[error("Cannot normalize a vector with zero variance")]
    ZeroVariance,

    /// A scorer returned the wrong number of scores for the corpus
    #[error("Scorer '{scorer}' returned {actual} scores for {expected} documents")]
    ScoreCountMismatch {
        /// Scorer name
        scorer: String,
        /// Corpus size
        expected: usize,
        /// Scores actually returned
        actual: usize,
    },
}

/// Classification of [`Error`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Corpus or configuration is unusable
    Configuration,
    /// Caller passed arguments the contract rejects
    InvalidInput,
    /// Input was valid but degenerate; callers recover locally
    DegenerateData,
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyDocument { .. }
            | Error::EmptyTokens
            | Error::InvalidConfig(_)
            | Error::Io(_)
            | Error::ScoreCountMismatch { .. } => ErrorKind::Configuration,
            Error::EmptyQuery | Error::EmptyVector | Error::InvalidWeight(_) => {
                ErrorKind::InvalidInput
            }
            Error::ZeroVariance => ErrorKind::DegenerateData,
        }
    }

    /// Whether the caller is expected to fall back and continue
    pub fn is_recoverable(&self) -> bool {
        self.kind() == ErrorKind::DegenerateData
    }
}
