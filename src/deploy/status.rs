// ABOUTME: Sets the status of an existing deployment.
// ABOUTME: Rejects unknown states locally instead of letting the API refuse them.

use super::error::DeployError;
use super::parse_repository;
use crate::api::{DeploymentsApi, NewDeploymentStatus};
use crate::types::{DeploymentId, DeploymentState};

/// Attach `state` as the new status of deployment `id`.
pub async fn update_status<A>(
    api: &A,
    repository: &str,
    id: DeploymentId,
    state: &str,
) -> Result<(), DeployError>
where
    A: DeploymentsApi + ?Sized,
{
    let repository = parse_repository(repository)?;

    let state: DeploymentState = state.parse().map_err(|_| DeployError::InvalidState {
        state: state.to_string(),
    })?;

    tracing::debug!(repository = %repository, %id, %state, "creating deployment status");

    api.create_deployment_status(&repository, id, &NewDeploymentStatus { state })
        .await?;
    Ok(())
}
