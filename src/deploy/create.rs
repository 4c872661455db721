// ABOUTME: Creates a deployment for a ref in an environment.
// ABOUTME: Validates the ref and repository before any request is sent.

use super::error::DeployError;
use super::parse_repository;
use crate::api::{DeploymentsApi, NewDeployment};
use crate::types::{DeploymentId, GitRef};

/// Environment name that marks a deployment as a production deployment.
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// Create a deployment of `git_ref` to `environment` and return its id.
///
/// `git_ref` must be fully qualified (`refs/heads/main`, `refs/tags/v1.0.0`);
/// the deployment is created for its short name. `repository` must be
/// `owner/name`. Both are checked before the API is called, ref first.
pub async fn create_deployment<A>(
    api: &A,
    repository: &str,
    environment: &str,
    git_ref: &str,
) -> Result<DeploymentId, DeployError>
where
    A: DeploymentsApi + ?Sized,
{
    let parsed_ref = GitRef::parse(git_ref).map_err(|source| DeployError::MalformedRef {
        value: git_ref.to_string(),
        source,
    })?;
    let repository = parse_repository(repository)?;

    let request = NewDeployment {
        git_ref: parsed_ref.short_name().to_string(),
        environment: environment.to_string(),
        production_environment: environment == PRODUCTION_ENVIRONMENT,
        required_contexts: Vec::new(),
    };

    tracing::debug!(
        repository = %repository,
        git_ref = %request.git_ref,
        environment = %request.environment,
        production = request.production_environment,
        "creating deployment"
    );

    let deployment = api.create_deployment(&repository, &request).await?;
    Ok(deployment.id)
}
