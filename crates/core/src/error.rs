//! Error types for equivalence classification
//!
//! Comparators are pure computations, so the taxonomy is small:
//! - **Type**: `TypeMismatch` when an element is outside a policy's domain
//! - **Configuration**: `InvalidConfig` when partition options fail to parse
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

/// Result type alias for classification operations
pub type Result<T> = std::result::Result<T, Error>;

/// Classification errors
///
/// Neither variant is retryable: comparators are deterministic, so a retry
/// reproduces the same failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Element (or context) is not of the type the policy requires
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Type name the policy accepts
        expected: String,
        /// Type name actually supplied
        actual: String,
    },

    /// Partition options could not be parsed
    #[error("invalid config: {reason}")]
    InvalidConfig {
        /// Parser message
        reason: String,
    },
}

impl Error {
    /// Build a `TypeMismatch` from the expected and actual type names
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Error::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Build an `InvalidConfig` from a reason
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Check if this is a domain violation
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::invalid_config(e.to_string())
    }
}
