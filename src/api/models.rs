// ABOUTME: Request and response bodies for the deployments endpoints.
// ABOUTME: Field names follow the GitHub REST API JSON schema.

use crate::types::{DeploymentId, DeploymentState, StatusId};
use serde::{Deserialize, Serialize};

/// Body of `POST /repos/{owner}/{repo}/deployments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDeployment {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub environment: String,
    pub production_environment: bool,
    /// Status contexts to verify before deploying. Sent empty so commit
    /// checks never block deployment creation.
    pub required_contexts: Vec<String>,
}

/// Body of `POST /repos/{owner}/{repo}/deployments/{id}/statuses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDeploymentStatus {
    pub state: DeploymentState,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Deployment {
    pub id: DeploymentId,
    #[serde(rename = "ref", default)]
    pub git_ref: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub production_environment: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeploymentStatus {
    pub id: StatusId,
    pub state: DeploymentState,
}
