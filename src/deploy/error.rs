// ABOUTME: Error types for deployment creation and status updates.
// ABOUTME: Covers malformed inputs rejected locally and failures reported by the API.

use crate::api::ApiError;
use crate::types::{DeploymentState, GitRefError, RepositoryError};

/// Errors that can occur while creating a deployment or updating its status.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// The ref is not of the form `refs/<kind>/<name>`.
    #[error("unexpected GITHUB_REF format: {value}")]
    MalformedRef { value: String, source: GitRefError },

    /// The repository is not of the form `owner/name`.
    #[error("unexpected GITHUB_REPOSITORY format: {value}")]
    MalformedRepository {
        value: String,
        source: RepositoryError,
    },

    /// The requested state is not a deployment state.
    #[error(
        "not supported deployment state {}, use one of {}",
        .state,
        DeploymentState::allowed()
    )]
    InvalidState { state: String },

    /// The API call itself failed.
    #[error(transparent)]
    Remote(#[from] ApiError),
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployErrorKind {
    /// Rejected before any request was sent.
    InvalidInput,
    /// The remote API reported a failure.
    Remote,
}

impl DeployError {
    pub fn kind(&self) -> DeployErrorKind {
        match self {
            DeployError::MalformedRef { .. }
            | DeployError::MalformedRepository { .. }
            | DeployError::InvalidState { .. } => DeployErrorKind::InvalidInput,
            DeployError::Remote(_) => DeployErrorKind::Remote,
        }
    }
}
