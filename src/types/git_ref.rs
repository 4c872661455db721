// ABOUTME: Fully qualified git ref parsing (refs/heads/main, refs/tags/v1).
// ABOUTME: Extracts the short branch or tag name a deployment is created for.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GitRefError {
    #[error("expected 3 slash-separated segments, found {0}")]
    SegmentCount(usize),
}

/// A ref of the form `refs/<kind>/<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRef {
    full: String,
}

impl GitRef {
    pub fn parse(input: &str) -> Result<Self, GitRefError> {
        let segments = input.split('/').count();
        if segments != 3 {
            return Err(GitRefError::SegmentCount(segments));
        }

        Ok(Self {
            full: input.to_string(),
        })
    }

    /// The short branch or tag name, e.g. `main` for `refs/heads/main`.
    pub fn short_name(&self) -> &str {
        self.full.rsplit('/').next().unwrap_or_default()
    }
}
