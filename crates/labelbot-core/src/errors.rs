//! Logic errors.

use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`labelbot_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: labelbot_ghapi_interface::ApiError,
    },
}

impl From<labelbot_ghapi_interface::ApiError> for DomainError {
    fn from(e: labelbot_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
