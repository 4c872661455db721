// ABOUTME: The fixed set of states a GitHub deployment status can take.
// ABOUTME: Provides parsing, display, and the membership predicate used before status updates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown deployment state: {0}")]
pub struct UnknownStateError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentState {
    Error,
    Failure,
    Inactive,
    InProgress,
    Queued,
    Pending,
    Success,
}

impl DeploymentState {
    /// Every valid state, in the order they are reported to users.
    pub const ALL: [DeploymentState; 7] = [
        DeploymentState::Error,
        DeploymentState::Failure,
        DeploymentState::Inactive,
        DeploymentState::InProgress,
        DeploymentState::Queued,
        DeploymentState::Pending,
        DeploymentState::Success,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentState::Error => "error",
            DeploymentState::Failure => "failure",
            DeploymentState::Inactive => "inactive",
            DeploymentState::InProgress => "in_progress",
            DeploymentState::Queued => "queued",
            DeploymentState::Pending => "pending",
            DeploymentState::Success => "success",
        }
    }

    /// The allowed set rendered as `[error failure ... success]`.
    pub fn allowed() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(DeploymentState::as_str).collect();
        format!("[{}]", names.join(" "))
    }
}

impl FromStr for DeploymentState {
    type Err = UnknownStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| UnknownStateError(s.to_string()))
    }
}

impl fmt::Display for DeploymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `state` names one of the supported deployment states.
pub fn is_state_valid(state: &str) -> bool {
    state.parse::<DeploymentState>().is_ok()
}
