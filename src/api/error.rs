// ABOUTME: Errors returned by the GitHub API client.
// ABOUTME: Distinguishes rejected requests, transport failures, and skipped deployments.

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The API answered with a non-success status.
    #[error("{method} {url}: {status} {message}")]
    Response {
        method: String,
        url: String,
        status: StatusCode,
        message: String,
    },

    /// GitHub accepted the request without creating a deployment
    /// (for example after auto-merging the default branch into the ref).
    #[error("deployment was not created: {0}")]
    NotCreated(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// The HTTP status the API answered with, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Response { status, .. } => Some(*status),
            ApiError::NotCreated(_) => Some(StatusCode::ACCEPTED),
            ApiError::Http(e) => e.status(),
        }
    }
}
