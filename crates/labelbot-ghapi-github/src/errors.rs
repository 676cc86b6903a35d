//! GitHub driver errors.

use labelbot_ghapi_interface::ApiError;

/// GitHub driver error.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names, missing_docs)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Resource not found: {}", path)]
    NotFoundError { path: String },

    #[error("Invalid authentication token")]
    InvalidTokenError,
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::NotFoundError { path } => ApiError::NotFound { path },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
