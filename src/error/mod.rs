//! Error handling module.
//!
//! Every generator failure is local and recoverable: the caller reports the
//! message and lets the user reconfigure.

pub mod codes;

pub use codes::{ErrorCategory, ErrorCode};

/// Password generation error type.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Invalid generator configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Not enough distinct characters for a no-repeat password.
    #[error(
        "Cannot generate a password with {requested} unique characters from a pool of {available} characters"
    )]
    InsufficientPool {
        /// Requested password length.
        requested: usize,
        /// Size of the character pool.
        available: usize,
    },

    /// Not enough distinct words for the requested passphrase.
    #[error("Cannot pick {requested} distinct words from a vocabulary of {available} words")]
    InsufficientVocabulary {
        /// Requested word count.
        requested: usize,
        /// Size of the filtered vocabulary.
        available: usize,
    },

    /// Every candidate PIN was rejected.
    #[error("Unable to generate a secure PIN after {attempts} attempts, try a different length")]
    PinExhausted {
        /// Number of candidates drawn.
        attempts: usize,
    },

    /// Word list could not be loaded.
    #[error("Vocabulary unavailable: {0}")]
    Vocabulary(String),
}

impl GeneratorError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidConfig(_) => ErrorCode::INVALID_CONFIG,
            Self::InsufficientPool { .. } => ErrorCode::INSUFFICIENT_POOL,
            Self::InsufficientVocabulary { .. } => ErrorCode::INSUFFICIENT_VOCABULARY,
            Self::PinExhausted { .. } => ErrorCode::PIN_EXHAUSTED,
            Self::Vocabulary(_) => ErrorCode::VOCABULARY_UNAVAILABLE,
        }
    }
}

/// Result type alias using `GeneratorError`.
pub type Result<T> = std::result::Result<T, GeneratorError>;
