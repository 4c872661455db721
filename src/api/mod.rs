// ABOUTME: Capability trait for the deployments part of the GitHub REST API.
// ABOUTME: Exposes the request/response models and the reqwest-backed client.

mod error;
mod github;
mod models;

pub use error::ApiError;
pub use github::{DEFAULT_API_URL, GitHubClient};
pub use models::{Deployment, DeploymentStatus, NewDeployment, NewDeploymentStatus};

use crate::types::{DeploymentId, Repository};
use async_trait::async_trait;

/// Deployment operations against a remote repository host.
#[async_trait]
pub trait DeploymentsApi: Send + Sync {
    /// Create a deployment for a ref in the given repository.
    async fn create_deployment(
        &self,
        repository: &Repository,
        request: &NewDeployment,
    ) -> Result<Deployment, ApiError>;

    /// Attach a new status to an existing deployment.
    async fn create_deployment_status(
        &self,
        repository: &Repository,
        id: DeploymentId,
        request: &NewDeploymentStatus,
    ) -> Result<DeploymentStatus, ApiError>;
}
