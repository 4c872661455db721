// ABOUTME: Repository identifier validation (owner/name).
// ABOUTME: Splits GITHUB_REPOSITORY into the owner and name used in API paths.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("expected 2 slash-separated segments, found {0}")]
    SegmentCount(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    owner: String,
    name: String,
}

impl Repository {
    pub fn parse(input: &str) -> Result<Self, RepositoryError> {
        match input.split('/').collect::<Vec<_>>().as_slice() {
            [owner, name] => Ok(Self {
                owner: (*owner).to_string(),
                name: (*name).to_string(),
            }),
            segments => Err(RepositoryError::SegmentCount(segments.len())),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
