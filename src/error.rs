// ABOUTME: Application-wide error types for gh-deployment.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::action::ActionError;
use crate::api::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("missing environmental variable {0}")]
    MissingEnvVar(String),

    #[error("invalid deployment id: {0}")]
    InvalidDeploymentId(String),

    #[error("failed to build API client: {0}")]
    Client(#[from] ApiError),

    #[error(transparent)]
    Action(#[from] ActionError),
}

pub type Result<T> = std::result::Result<T, Error>;
