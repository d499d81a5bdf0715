//! Error code constants.
//!
//! Error codes are organized by category:
//! - 1xxx: Configuration errors
//! - 3xxx: Validation errors
//! - 4xxx: Resource errors

/// Error code type with semantic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    // ===== Configuration Errors (1xxx) =====

    /// Invalid generator configuration (no usable characters, zero length, ...).
    pub const INVALID_CONFIG: Self = Self(1001);

    /// Word list could not be loaded.
    pub const VOCABULARY_UNAVAILABLE: Self = Self(1002);

    // ===== Validation Errors (3xxx) =====

    /// Character pool smaller than the requested unique length.
    pub const INSUFFICIENT_POOL: Self = Self(3001);

    /// Vocabulary smaller than the requested distinct word count.
    pub const INSUFFICIENT_VOCABULARY: Self = Self(3002);

    // ===== Resource Errors (4xxx) =====

    /// Retry budget exhausted while searching for an acceptable PIN.
    pub const PIN_EXHAUSTED: Self = Self(4001);

    /// Get the error code as an i32.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Get the category of this error code.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self.0 {
            1000..=1999 => ErrorCategory::Configuration,
            3000..=3999 => ErrorCategory::Validation,
            // 4xxx
            _ => ErrorCategory::Resource,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

/// Error category based on error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration-related errors (1xxx).
    Configuration,
    /// Validation errors (3xxx).
    Validation,
    /// Resource errors (4xxx).
    Resource,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::Validation => write!(f, "validation"),
            Self::Resource => write!(f, "resource"),
        }
    }
}
