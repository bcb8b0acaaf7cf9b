use thiserror::Error;

/// Unified error type for semverkit operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    #[error("Invalid version: '{0}'")]
    InvalidVersion(String),
}

/// Convenience type alias for Results in semverkit
pub type Result<T> = std::result::Result<T, SemverError>;

impl SemverError {
    /// Create an invalid version error carrying the rejected input
    pub fn invalid_version(input: impl Into<String>) -> Self {
        SemverError::InvalidVersion(input.into())
    }

    /// The rejected input
    pub fn rejected_input(&self) -> &str {
        match self {
            SemverError::InvalidVersion(input) => input,
        }
    }
}
