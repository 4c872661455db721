// ABOUTME: Deployment creation and status updates against a DeploymentsApi.
// ABOUTME: Input validation happens here; transport belongs to the api module.

mod create;
mod error;
mod status;

pub use create::{PRODUCTION_ENVIRONMENT, create_deployment};
pub use error::{DeployError, DeployErrorKind};
pub use status::update_status;

use crate::types::Repository;

fn parse_repository(value: &str) -> Result<Repository, DeployError> {
    Repository::parse(value).map_err(|source| DeployError::MalformedRepository {
        value: value.to_string(),
        source,
    })
}
